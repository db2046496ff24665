//! Crypto generator
//!
//! Hashes data-layer values in place using the runtime's built-in hash
//! routines. The variables to hash are named by the definition's own
//! condition tree: every variable whose operator is missing or `defined`
//! is a hash target, deduplicated in first-seen order.
//!
//! Prefix stripping here covers `udo.`, `js.`, and `cp.` and is deliberately
//! separate from the condition compiler's `udo.`-only stripping; the two
//! passes must not be unified.

use tagsmith_core::types::{CryptoConfig, LocalDefinition};

use crate::conditions;
use crate::error::Result;
use crate::escape::escape_string_literal;

use super::{strip_prefixes, wrap};

pub(super) fn generate(def: &LocalDefinition, cfg: &CryptoConfig) -> Result<Option<String>> {
    let routine = match cfg.hash_type.as_str() {
        "1" => "utag.ut.md5",
        "2" => "utag.ut.sha1",
        "3" => "utag.ut.sha256",
        _ => return Ok(None),
    };

    let mut variables: Vec<String> = Vec::new();
    for condition in def.conditions.iter_conditions() {
        if !matches!(condition.operator.as_deref(), None | Some("defined")) {
            continue;
        }
        let name = strip_prefixes(&condition.variable, &["udo.", "js.", "cp."]).to_string();
        if !variables.contains(&name) {
            variables.push(name);
        }
    }

    if variables.is_empty() {
        return Ok(None);
    }

    let statements = variables
        .iter()
        .map(|variable| {
            let v = escape_string_literal(variable);
            format!(
                "if (typeof b['{}'] != 'undefined') {{ b['{}'] = {}(b['{}']); }}",
                v, v, routine, v
            )
        })
        .collect::<Vec<_>>();

    let condition = conditions::compile(&def.conditions)?;
    Ok(Some(wrap(def, &condition, &statements)))
}
