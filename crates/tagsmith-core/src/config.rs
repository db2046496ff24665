//! Configuration file loading and parsing

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["tagsmith.yaml", "tagsmith.yml"];

/// Environment variable overriding the platform API token
const TOKEN_ENV_VAR: &str = "TAGSMITH_TOKEN";

/// Parsed tagsmith.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsmithConfigFile {
    /// Platform account name
    pub account: String,

    /// Profile within the account
    pub profile: String,

    /// Target environment (dev, qa, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Remote platform connection
    pub platform: PlatformConfig,

    /// Path to the local definitions file, relative to the config file
    #[serde(default = "default_definitions")]
    pub definitions: Utf8PathBuf,
}

/// Remote platform connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform API
    pub base_url: String,

    /// API token; the TAGSMITH_TOKEN environment variable takes precedence
    #[serde(default)]
    pub token: Option<String>,
}

fn default_environment() -> String {
    "prod".to_string()
}

fn default_definitions() -> Utf8PathBuf {
    Utf8PathBuf::from("definitions.yaml")
}

/// Loaded Tagsmith configuration
#[derive(Debug, Clone)]
pub struct TagsmithConfig {
    /// The parsed configuration
    pub config: TagsmithConfigFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,

    /// Working directory (the config file's parent)
    pub working_dir: Utf8PathBuf,
}

impl TagsmithConfig {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            (p.to_owned(), content)
        } else {
            Self::find_config()?
        };

        let working_dir = config_path
            .parent()
            .map(|p| p.to_owned())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        let config: TagsmithConfigFile = serde_yaml_ng::from_str(&content)?;

        if config.account.is_empty() {
            return Err(Error::missing_field("account"));
        }
        if config.profile.is_empty() {
            return Err(Error::missing_field("profile"));
        }

        tracing::debug!(
            "Loaded config for {}/{} ({})",
            config.account,
            config.profile,
            config.environment
        );

        Ok(Self {
            config,
            config_path,
            working_dir,
        })
    }

    /// Search the current directory for a config file
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        for name in CONFIG_FILE_NAMES {
            let candidate = Utf8PathBuf::from(name);
            if let Ok(content) = fs::read_to_string(&candidate) {
                return Ok((candidate, content));
            }
        }
        Err(Error::config_not_found(CONFIG_FILE_NAMES.join(" or ")))
    }

    /// Absolute-ish path to the local definitions file
    pub fn definitions_path(&self) -> Utf8PathBuf {
        self.working_dir.join(&self.config.definitions)
    }

    /// Resolve the platform token: environment variable wins over the file
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.config.platform.token.clone())
    }
}
