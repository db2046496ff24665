//! Sync orchestration
//!
//! Sequences one run: connect, fetch remote, compile local definitions,
//! diff, and push the update list. Compilation and diffing never block;
//! platform calls happen strictly one after another, so a failed push
//! surfaces before any further write.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tagsmith_core::types::{Extension, LocalDefinition};
use tracing::{info, warn};

use crate::diff::{self, DiffResult};
use crate::platform::Platform;

/// Options for one sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Compute everything but skip the final push
    pub dry_run: bool,
}

/// Outcome of one sync run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// Extensions compiled from local definitions
    pub generated: usize,

    /// Definition ids skipped as recognized-but-unsupported
    pub skipped: Vec<u64>,

    /// The diff that drove the push
    pub diff: DiffResult,

    /// Extensions actually pushed (zero on dry runs)
    pub pushed: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Local definitions compiled into comparable extensions
#[derive(Debug, Clone, Default)]
pub struct CompiledBatch {
    /// Extensions in definition order
    pub extensions: Vec<Extension>,

    /// Definition ids skipped as recognized-but-unsupported
    pub skipped: Vec<u64>,
}

/// Compile every local definition into an [`Extension`].
///
/// Skip signals drop the one definition and record its id; a hard generator
/// error aborts the whole batch, so an invalid batch is never partially
/// deployed.
pub fn compile_definitions(definitions: &[LocalDefinition]) -> Result<CompiledBatch> {
    let mut batch = CompiledBatch::default();

    for def in definitions {
        let generated = tagsmith_codegen::generate(def)
            .with_context(|| format!("Failed to generate extension {} ({})", def.id, def.name))?;

        match generated {
            Some(code) => batch.extensions.push(Extension::from_local(
                def.id,
                def.name.clone(),
                def.extension_type(),
                code,
                def.scope.clone(),
                def.occurrence.clone(),
                def.status.clone(),
            )),
            None => batch.skipped.push(def.id),
        }
    }

    Ok(batch)
}

/// Orchestrates fetch, compile, diff, and push against one platform
pub struct SyncEngine<P: Platform> {
    platform: P,
}

impl<P: Platform> SyncEngine<P> {
    pub fn new(platform: P) -> Self {
        Self { platform }
    }

    /// Access the underlying platform
    pub fn platform_ref(&self) -> &P {
        &self.platform
    }

    /// Run one full sync pass over the given local definitions
    pub async fn sync(
        &mut self,
        definitions: &[LocalDefinition],
        options: &SyncOptions,
    ) -> Result<SyncSummary> {
        let started_at = Utc::now();

        self.platform
            .connect()
            .await
            .context("Platform connection failed")?;

        let remote: Vec<Extension> = self
            .platform
            .fetch_extensions()
            .await
            .context("Failed to fetch remote extensions")?
            .into_iter()
            .map(Extension::from_remote)
            .collect();

        let batch = compile_definitions(definitions)?;
        if !batch.skipped.is_empty() {
            info!(
                "Skipped {} definition(s) with unsupported shapes: {:?}",
                batch.skipped.len(),
                batch.skipped
            );
        }

        let diff = diff::diff(&batch.extensions, &remote)?;

        for missing in &diff.not_found_list {
            warn!(
                "Extension {} ({}) has no remote counterpart and will not be created",
                missing.id, missing.name
            );
        }

        let mut pushed = 0;
        if diff.update_list.is_empty() {
            info!("Remote is already in sync; nothing to push");
        } else if options.dry_run {
            info!(
                "Dry run: {} extension(s) would be pushed",
                diff.update_list.len()
            );
        } else {
            for extension in &diff.update_list {
                self.platform.save_extension(extension).await?;
                pushed += 1;
            }
            info!("Pushed {} extension(s)", pushed);
        }

        Ok(SyncSummary {
            generated: batch.extensions.len(),
            skipped: batch.skipped,
            diff,
            pushed,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
