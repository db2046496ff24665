//! Generate command
//!
//! Emits generated source for local definitions, either concatenated to
//! stdout or as one .js file per extension id in an output directory.

use anyhow::{bail, Context, Result};
use camino::Utf8Path;

use crate::cli::GenerateArgs;
use crate::output;

use super::{definitions_path, load_config, load_definitions};

pub fn run(args: GenerateArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let path = definitions_path(&config, None);
    let mut definitions = load_definitions(&path)?;

    if let Some(id) = args.id {
        definitions.retain(|def| def.id == id);
        if definitions.is_empty() {
            bail!("No definition with id {} in {}", id, path);
        }
    }

    if let Some(dir) = &args.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir))?;
    }

    let mut written = 0;
    let mut skipped = 0;

    for def in &definitions {
        match tagsmith_codegen::generate(def)? {
            Some(code) => {
                if let Some(dir) = &args.output {
                    let file = dir.join(format!("{}.js", def.id));
                    std::fs::write(&file, &code)
                        .with_context(|| format!("Failed to write {}", file))?;
                } else {
                    print!("{}", code);
                }
                written += 1;
            }
            None => {
                skipped += 1;
                output::warning(&format!(
                    "Skipping {} ({}): unsupported configuration shape",
                    def.id, def.name
                ));
            }
        }
    }

    if let Some(dir) = &args.output {
        output::success(&format!(
            "Wrote {} file(s) to {} ({} skipped)",
            written, dir, skipped
        ));
    }

    Ok(())
}
