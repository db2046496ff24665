//! The Extension value object compared by the diff engine
//!
//! Local definitions (after code generation) and remote listings both
//! converge onto `Extension` so the diff engine compares one shape. Identity
//! is (id, type); the deployable payload is code/scope/occurrence/status.

use serde::{Deserialize, Serialize};

use super::definition::ExtensionType;

/// One managed extension, local or remote
///
/// Effectively immutable after construction; the builder-style `with_notes`
/// setter exists only for use while constructing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    pub code: String,
    pub scope: String,
    pub occurrence: String,
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

impl Extension {
    /// Build an extension from a remote listing payload
    pub fn from_remote(payload: RemoteExtension) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            extension_type: payload.extension_type,
            code: payload.code,
            scope: payload.scope,
            occurrence: payload.occurrence,
            status: payload.status,
            notes: payload.notes,
        }
    }

    /// Build an extension from local source plus generated code
    pub fn from_local(
        id: u64,
        name: impl Into<String>,
        extension_type: ExtensionType,
        code: impl Into<String>,
        scope: impl Into<String>,
        occurrence: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            extension_type,
            code: code.into(),
            scope: scope.into(),
            occurrence: occurrence.into(),
            status: status.into(),
            notes: String::new(),
        }
    }

    /// Attach notes during construction
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// True when `other` refers to the same extension (same id and type)
    pub fn same_identity(&self, other: &Extension) -> bool {
        self.id == other.id && self.extension_type == other.extension_type
    }

    /// True when the deployable payload matches: code, scope, occurrence,
    /// and status are all equal. Name and notes are metadata and never force
    /// a redeploy.
    pub fn deployed_equal(&self, other: &Extension) -> bool {
        self.code == other.code
            && self.scope == other.scope
            && self.occurrence == other.occurrence
            && self.status == other.status
    }
}

/// Extension payload as returned by the remote platform listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteExtension {
    pub id: u64,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub occurrence: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: u64, code: &str) -> RemoteExtension {
        RemoteExtension {
            id,
            extension_type: ExtensionType::Crypto,
            name: "hash emails".to_string(),
            code: code.to_string(),
            scope: "afterload".to_string(),
            occurrence: "run_always".to_string(),
            status: "active".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn local_and_remote_converge() {
        let a = Extension::from_remote(remote(1, "A"));
        let b = Extension::from_local(
            1,
            "hash emails",
            ExtensionType::Crypto,
            "A",
            "afterload",
            "run_always",
            "active",
        );
        assert!(a.same_identity(&b));
        assert!(a.deployed_equal(&b));
    }

    #[test]
    fn code_change_breaks_deployed_equality_but_not_identity() {
        let a = Extension::from_remote(remote(1, "A"));
        let b = Extension::from_remote(remote(1, "B"));
        assert!(a.same_identity(&b));
        assert!(!a.deployed_equal(&b));
    }

    #[test]
    fn notes_do_not_affect_deployed_equality() {
        let a = Extension::from_remote(remote(1, "A")).with_notes("touched");
        let b = Extension::from_remote(remote(1, "A"));
        assert!(a.deployed_equal(&b));
    }
}
