//! Command implementations

pub mod diff;
pub mod generate;
pub mod sync;
pub mod validate;
pub mod version;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tagsmith_core::types::LocalDefinition;
use tagsmith_core::TagsmithConfig;
use tagsmith_sync::HttpPlatform;

/// Load the config file, honoring the global --config flag
pub fn load_config(config_path: Option<&Utf8Path>) -> Result<TagsmithConfig> {
    TagsmithConfig::load(config_path).context("Failed to load tagsmith configuration")
}

/// Read the ordered local definitions file
pub fn load_definitions(path: &Utf8Path) -> Result<Vec<LocalDefinition>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions file {}", path))?;
    let definitions: Vec<LocalDefinition> = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse definitions file {}", path))?;
    tracing::debug!("Loaded {} definitions from {}", definitions.len(), path);
    Ok(definitions)
}

/// Build the HTTP platform client from the loaded config
pub fn build_platform(config: &TagsmithConfig) -> HttpPlatform {
    HttpPlatform::new(
        config.config.platform.base_url.clone(),
        config.config.account.clone(),
        config.config.profile.clone(),
        config.resolve_token(),
    )
}

/// Definitions path: explicit flag wins over the configured location
pub fn definitions_path(config: &TagsmithConfig, explicit: Option<&Utf8Path>) -> Utf8PathBuf {
    match explicit {
        Some(path) => path.to_owned(),
        None => config.definitions_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_definitions_parses_an_ordered_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("definitions.yaml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(
            br#"
- id: 2
  name: second first
  type: pathname_tokenizer
- id: 1
  name: then this
  type: crypto
  hash_type: "3"
"#,
        )
        .unwrap();

        let utf8 = Utf8PathBuf::from_path_buf(path).unwrap();
        let defs = load_definitions(&utf8).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].id, 2);
        assert_eq!(defs[1].id, 1);
    }

    #[test]
    fn load_definitions_reports_the_failing_path() {
        let err = load_definitions(Utf8Path::new("/nonexistent/defs.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/defs.yaml"));
    }
}
