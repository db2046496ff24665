//! Diff command
//!
//! Fetches the remote listing, compiles local definitions, and reports what
//! a sync would change, without writing anything.

use anyhow::{Context, Result};
use camino::Utf8Path;
use tabled::{Table, Tabled};
use tagsmith_core::types::Extension;
use tagsmith_sync::{compile_definitions, diff, Platform};

use crate::cli::DiffArgs;
use crate::output;

use super::{build_platform, definitions_path, load_config, load_definitions};

#[derive(Tabled)]
struct DiffRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    extension_type: String,
    #[tabled(rename = "Scope")]
    scope: String,
}

impl From<&Extension> for DiffRow {
    fn from(ext: &Extension) -> Self {
        Self {
            id: ext.id,
            name: ext.name.clone(),
            extension_type: ext.extension_type.to_string(),
            scope: ext.scope.clone(),
        }
    }
}

pub async fn run(args: DiffArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let definitions = load_definitions(&definitions_path(&config, None))?;

    let mut platform = build_platform(&config);
    platform.connect().await?;
    let remote: Vec<Extension> = platform
        .fetch_extensions()
        .await?
        .into_iter()
        .map(Extension::from_remote)
        .collect();

    let batch = compile_definitions(&definitions).context("Code generation failed")?;
    let result = diff(&batch.extensions, &remote)?;

    if !batch.skipped.is_empty() {
        output::warning(&format!(
            "{} definition(s) skipped as unsupported: {:?}",
            batch.skipped.len(),
            batch.skipped
        ));
    }

    if result.is_clean() {
        output::success("Remote profile matches local source");
        return Ok(());
    }

    if !result.update_list.is_empty() {
        output::header(&format!("{} extension(s) to update", result.update_list.len()));
        let rows: Vec<DiffRow> = result.update_list.iter().map(DiffRow::from).collect();
        println!("{}", Table::new(&rows));
    }

    if !result.not_found_list.is_empty() {
        output::header(&format!(
            "{} extension(s) missing remotely (never auto-created)",
            result.not_found_list.len()
        ));
        let rows: Vec<DiffRow> = result.not_found_list.iter().map(DiffRow::from).collect();
        println!("{}", Table::new(&rows));
    }

    if args.exit_code && !result.update_list.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
