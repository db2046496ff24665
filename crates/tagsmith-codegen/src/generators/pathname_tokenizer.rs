//! Pathname-Tokenizer generator
//!
//! Ignores all per-instance configuration, including conditions: every
//! instance emits the same fixed algorithm. The current pathname is split
//! into at most 9 pieces (the leading empty piece plus up to 8 segments)
//! and written into a global container, initializing it if absent.

use tagsmith_core::types::{LocalDefinition, PathnameTokenizerConfig};

use crate::error::Result;

use super::wrap;

pub(super) fn generate(
    def: &LocalDefinition,
    _cfg: &PathnameTokenizerConfig,
) -> Result<Option<String>> {
    let statements = vec![
        "if (typeof utag.data.path_tokens == 'undefined') { utag.data.path_tokens = {}; }"
            .to_string(),
        "var seg = location.pathname.split('/', 9);".to_string(),
        "for (var i = 1; i < seg.length; i++) { utag.data.path_tokens['path' + i] = seg[i]; }"
            .to_string(),
    ];

    Ok(Some(wrap(def, "1", &statements)))
}
