//! Persist-Data-Value generator
//!
//! Persists one data-layer value across pages via cookie. The only
//! generator where a bad scope is fatal rather than skipped: persistence
//! must run after load rules (or under an explicit tag-id scope) to see the
//! value it copies.

use tagsmith_core::types::{is_tag_scope, LocalDefinition, PersistDataValueConfig, SCOPE_AFTER_LOAD};

use crate::conditions;
use crate::error::{CodegenError, Result};
use crate::escape::escape_string_literal;

use super::{strip_prefixes, wrap};

/// Targets under this namespace go through the runtime's session-cookie
/// writer instead of a raw document.cookie assignment.
const SESSION_COOKIE_PREFIX: &str = "cp.utag_main_";

pub(super) fn generate(
    def: &LocalDefinition,
    cfg: &PersistDataValueConfig,
) -> Result<Option<String>> {
    if def.scope != SCOPE_AFTER_LOAD && !is_tag_scope(&def.scope) {
        return Err(CodegenError::unsupported_scope(def.id, &def.scope));
    }

    if cfg.setoption != "var" {
        return Ok(None);
    }

    let source = escape_string_literal(strip_prefixes(
        cfg.settovar.as_deref().unwrap_or(""),
        &["js.", "udo."],
    ));

    let mut statements = Vec::with_capacity(2);

    if let Some(key) = cfg.set.strip_prefix(SESSION_COOKIE_PREFIX) {
        statements.push(format!(
            "utag.loader.SC('utag_main', {{'{}': b['{}'] + ';exp-session'}});",
            escape_string_literal(key),
            source
        ));
    } else {
        let cookie_name = escape_string_literal(strip_prefixes(&cfg.set, &["cp."]));
        statements.push(format!(
            "document.cookie = '{}=' + b['{}'] + ';path=/;domain=' + utag.cfg.domain + ';';",
            cookie_name, source
        ));
    }

    // The persisted value is also visible on the current event, not only on
    // the next page load.
    statements.push(format!(
        "b['{}'] = b['{}'];",
        escape_string_literal(&cfg.set),
        source
    ));

    let condition = conditions::compile(&def.conditions)?;
    Ok(Some(wrap(def, &condition, &statements)))
}
