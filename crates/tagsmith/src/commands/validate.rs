//! Validate command
//!
//! Parses the local definitions file and runs every generator without
//! touching the remote. Skips are reported per definition; any hard
//! generator failure fails the command, mirroring how a real sync would
//! abort the batch.

use anyhow::{bail, Result};
use camino::Utf8Path;
use tabled::{Table, Tabled};

use crate::cli::ValidateArgs;
use crate::output;

use super::{definitions_path, load_config, load_definitions};

#[derive(Tabled)]
struct ValidationRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    extension_type: String,
    #[tabled(rename = "Result")]
    result: String,
}

pub fn run(args: ValidateArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let path = definitions_path(&config, args.definitions.as_deref());
    let definitions = load_definitions(&path)?;

    let mut rows = Vec::with_capacity(definitions.len());
    let mut failures = 0;

    for def in &definitions {
        let result = match tagsmith_codegen::generate(def) {
            Ok(Some(code)) => format!("generated ({} bytes)", code.len()),
            Ok(None) => "skipped (unsupported shape)".to_string(),
            Err(e) => {
                failures += 1;
                format!("FAILED: {}", e)
            }
        };
        rows.push(ValidationRow {
            id: def.id,
            name: def.name.clone(),
            extension_type: def.extension_type().to_string(),
            result,
        });
    }

    output::header(&format!("Validated {} definition(s) from {}", rows.len(), path));
    println!("{}", Table::new(&rows));

    if failures > 0 {
        output::error(&format!("{} definition(s) failed validation", failures));
        bail!("validation failed");
    }

    output::success("All definitions are valid");
    Ok(())
}
