//! Join-Data-Values generator
//!
//! Builds an ordered array of literals and property references, optionally
//! back-fills empty slots with a default, then joins with the configured
//! delimiter into the target property.
//!
//! Literal resolution is a two-step fallback inherited from the flat legacy
//! configuration: the `<key>_set_text` sibling wins, otherwise a forward
//! scan picks the first entry carrying an inline literal. First match wins;
//! this is preserved as observed, not cleaned up.

use tagsmith_core::types::{is_tag_scope, JoinDataValuesConfig, LocalDefinition, SCOPE_AFTER_LOAD};

use crate::conditions;
use crate::error::{CodegenError, Result};
use crate::escape::escape_string_literal;

use super::{strip_prefixes, wrap};

pub(super) fn generate(
    def: &LocalDefinition,
    cfg: &JoinDataValuesConfig,
) -> Result<Option<String>> {
    if cfg.loadrule.as_deref().is_some_and(|r| !r.is_empty()) {
        return Err(CodegenError::LoadRuleRestricted { id: def.id });
    }
    if cfg.leading_delimiter {
        return Err(CodegenError::LeadingDelimiter { id: def.id });
    }
    if def.scope != SCOPE_AFTER_LOAD && !is_tag_scope(&def.scope) {
        return Err(CodegenError::unsupported_scope(def.id, &def.scope));
    }

    let mut items = Vec::with_capacity(cfg.configs.len());
    for entry in &cfg.configs {
        match entry.setoption.as_str() {
            "text" => {
                let literal = match cfg.extras.get(&format!("{}_set_text", entry.key)) {
                    Some(text) => text.clone(),
                    None => cfg
                        .configs
                        .iter()
                        .find_map(|e| e.text.clone())
                        .unwrap_or_default(),
                };
                items.push(format!("'{}'", escape_string_literal(&literal)));
            }
            "var" => {
                let variable =
                    strip_prefixes(entry.variable.as_deref().unwrap_or(""), &["js."]);
                items.push(format!("b['{}']", escape_string_literal(variable)));
            }
            _ => return Ok(None),
        }
    }

    let mut statements = Vec::with_capacity(3);
    statements.push(format!("var j = [{}];", items.join(", ")));

    if !cfg.default_value.is_empty() {
        statements.push(format!(
            "for (var i = 0; i < j.length; i++) {{ if (j[i] == '' || typeof j[i] == 'undefined') {{ j[i] = '{}'; }} }}",
            escape_string_literal(&cfg.default_value)
        ));
    }

    let target = escape_string_literal(strip_prefixes(&cfg.set, &["udo.", "js."]));
    statements.push(format!(
        "b['{}'] = j.join('{}');",
        target,
        escape_string_literal(&cfg.delimiter)
    ));

    let condition = conditions::compile(&def.conditions)?;
    Ok(Some(wrap(def, &condition, &statements)))
}
