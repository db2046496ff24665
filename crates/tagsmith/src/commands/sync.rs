//! Sync command
//!
//! The full pipeline: connect, fetch remote, generate, diff, and push
//! out-of-date extensions to the remote profile.

use anyhow::Result;
use camino::Utf8Path;
use tagsmith_sync::{SyncEngine, SyncOptions};

use crate::cli::SyncArgs;
use crate::output;

use super::{build_platform, definitions_path, load_config, load_definitions};

pub async fn run(args: SyncArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let definitions = load_definitions(&definitions_path(&config, None))?;

    output::info(&format!(
        "Syncing {} definition(s) to {}/{} ({})",
        definitions.len(),
        config.config.account,
        config.config.profile,
        config.config.environment
    ));

    let mut engine = SyncEngine::new(build_platform(&config));
    let options = SyncOptions {
        dry_run: args.dry_run,
    };
    let summary = engine.sync(&definitions, &options).await?;

    output::header("Sync summary");
    output::kv("generated", &summary.generated.to_string());
    output::kv("skipped", &summary.skipped.len().to_string());
    output::kv("to update", &summary.diff.update_list.len().to_string());
    output::kv("missing remotely", &summary.diff.not_found_list.len().to_string());
    output::kv("pushed", &summary.pushed.to_string());
    output::kv(
        "duration",
        &format!(
            "{} ms",
            (summary.finished_at - summary.started_at).num_milliseconds()
        ),
    );

    for missing in &summary.diff.not_found_list {
        output::warning(&format!(
            "No remote counterpart for {} ({}); create it on the platform first",
            missing.id, missing.name
        ));
    }

    if args.dry_run && !summary.diff.update_list.is_empty() {
        output::info(&format!(
            "Dry run: {} extension(s) would be pushed",
            summary.diff.update_list.len()
        ));
    } else if summary.pushed > 0 {
        output::success(&format!("Pushed {} extension(s)", summary.pushed));
    } else {
        output::success("Remote profile is up to date");
    }

    Ok(())
}
