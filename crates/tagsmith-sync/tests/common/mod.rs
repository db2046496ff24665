//! Shared test builders and mocks

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tagsmith_core::types::{
    Extension, ExtensionConfig, ExtensionType, LocalDefinition, RemoteExtension,
    SetDataValuesConfig, SetEntry,
};
use tagsmith_sync::Platform;

/// A local set_data_values definition assigning one literal
pub fn text_definition(id: u64, name: &str, value: &str) -> LocalDefinition {
    LocalDefinition {
        id,
        name: name.to_string(),
        scope: "afterload".to_string(),
        occurrence: "run_always".to_string(),
        status: "active".to_string(),
        notes: String::new(),
        conditions: Default::default(),
        config: ExtensionConfig::SetDataValues(SetDataValuesConfig {
            sets: vec![SetEntry {
                setoption: "text".to_string(),
                set: "v".to_string(),
                settotext: Some(value.to_string()),
                settovar: None,
            }],
        }),
    }
}

/// A remote payload mirroring what the platform listing returns
pub fn remote_extension(id: u64, name: &str, code: &str) -> RemoteExtension {
    RemoteExtension {
        id,
        extension_type: ExtensionType::SetDataValues,
        name: name.to_string(),
        code: code.to_string(),
        scope: "afterload".to_string(),
        occurrence: "run_always".to_string(),
        status: "active".to_string(),
        notes: String::new(),
    }
}

/// In-memory platform recording every save
pub struct InMemoryPlatform {
    pub remote: Vec<RemoteExtension>,
    pub saved: Mutex<Vec<Extension>>,
    pub fail_connect: bool,
}

impl InMemoryPlatform {
    pub fn new(remote: Vec<RemoteExtension>) -> Self {
        Self {
            remote,
            saved: Mutex::new(Vec::new()),
            fail_connect: false,
        }
    }

    pub fn saved_ids(&self) -> Vec<u64> {
        self.saved.lock().unwrap().iter().map(|e| e.id).collect()
    }
}

#[async_trait]
impl Platform for InMemoryPlatform {
    fn name(&self) -> &'static str {
        "in-memory"
    }

    async fn connect(&mut self) -> Result<()> {
        if self.fail_connect {
            bail!("connection refused");
        }
        Ok(())
    }

    async fn fetch_extensions(&self) -> Result<Vec<RemoteExtension>> {
        Ok(self.remote.clone())
    }

    async fn save_extension(&self, extension: &Extension) -> Result<()> {
        self.saved.lock().unwrap().push(extension.clone());
        Ok(())
    }
}
