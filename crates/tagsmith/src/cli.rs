//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Tagsmith - keep tag-management extensions in sync with local source
#[derive(Parser, Debug)]
#[command(name = "tagsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to tagsmith.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version(VersionArgs),

    /// Parse local definitions and run every generator without touching the remote
    Validate(ValidateArgs),

    /// Emit generated source for local definitions
    Generate(GenerateArgs),

    /// Fetch the remote listing and show what a sync would change
    Diff(DiffArgs),

    /// Generate, diff, and push out-of-date extensions to the remote profile
    Sync(SyncArgs),
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Definitions file to validate (defaults to the configured path)
    #[arg(short, long)]
    pub definitions: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Write one .js file per extension into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Only generate the definition with this id
    #[arg(long)]
    pub id: Option<u64>,
}

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Exit with status 1 when updates are pending (for CI)
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Compute and report everything but skip the final push
    #[arg(long)]
    pub dry_run: bool,
}
