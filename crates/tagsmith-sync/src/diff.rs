//! Structural diff of local vs. remote extension collections
//!
//! Local source is authoritative for what should exist. The diff partitions
//! the local collection into extensions that must be redeployed and
//! extensions with no remote counterpart; remote-only extensions are never
//! reported. Both result lists preserve local input order.

use tagsmith_core::types::Extension;
use tagsmith_core::{Error, Result};

/// Partition of the local collection produced by [`diff`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    /// Local extensions whose remote counterpart differs in code, scope,
    /// occurrence, or status
    pub update_list: Vec<Extension>,

    /// Local extensions with no remote counterpart of the same (id, type);
    /// these are never auto-created
    pub not_found_list: Vec<Extension>,
}

impl DiffResult {
    /// True when remote already matches local source
    pub fn is_clean(&self) -> bool {
        self.update_list.is_empty() && self.not_found_list.is_empty()
    }
}

/// Compare two extension collections.
///
/// Fails when either collection contains duplicate ids; the error names all
/// duplicated ids across whichever collections had them.
pub fn diff(local: &[Extension], remote: &[Extension]) -> Result<DiffResult> {
    let mut duplicates = duplicated_ids(local);
    duplicates.extend(duplicated_ids(remote));
    if !duplicates.is_empty() {
        return Err(Error::duplicate_ids(duplicates));
    }

    let mut result = DiffResult::default();

    for ext in local {
        match remote.iter().find(|r| r.same_identity(ext)) {
            None => result.not_found_list.push(ext.clone()),
            Some(counterpart) if counterpart.deployed_equal(ext) => {}
            Some(_) => result.update_list.push(ext.clone()),
        }
    }

    tracing::debug!(
        "Diffed {} local against {} remote: {} to update, {} not found",
        local.len(),
        remote.len(),
        result.update_list.len(),
        result.not_found_list.len()
    );

    Ok(result)
}

/// Ids appearing more than once in a collection, in first-seen order
fn duplicated_ids(extensions: &[Extension]) -> Vec<u64> {
    let mut seen = Vec::new();
    let mut duplicated = Vec::new();
    for ext in extensions {
        if seen.contains(&ext.id) {
            duplicated.push(ext.id);
        } else {
            seen.push(ext.id);
        }
    }
    duplicated
}
