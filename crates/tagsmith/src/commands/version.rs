//! Version command

use anyhow::Result;

use crate::cli::VersionArgs;

pub fn run(args: VersionArgs) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "name": "tagsmith",
                "version": version,
            })
        );
    } else {
        println!("tagsmith {}", version);
    }

    Ok(())
}
