//! Lookup-Table generator
//!
//! Emits an if/else-if chain over the ordered lookup rows. The else branch
//! depends on the table's logic flag and default: `logic == "true"` only
//! assigns a non-empty default, while any other logic value always emits an
//! else branch, assigning the default or the runtime's `undefined`.

use tagsmith_core::types::{LocalDefinition, LookupTableConfig};

use crate::conditions;
use crate::error::Result;
use crate::escape::escape_string_literal;

use super::{strip_prefixes, wrap};

pub(super) fn generate(def: &LocalDefinition, cfg: &LookupTableConfig) -> Result<Option<String>> {
    if cfg.lookups.is_empty() {
        return Ok(None);
    }

    let input = escape_string_literal(strip_prefixes(&cfg.variable, &["udo."]));
    let target = escape_string_literal(strip_prefixes(&cfg.set, &["udo."]));

    let mut chain = String::new();
    for (i, row) in cfg.lookups.iter().enumerate() {
        let test = match cfg.filter.as_str() {
            "equals" => format!("b['{}'] == '{}'", input, escape_string_literal(&row.name)),
            // Truthiness guard first: indexOf on undefined throws
            "contains" => format!(
                "b['{}'] && b['{}'].indexOf('{}') > -1",
                input,
                input,
                escape_string_literal(&row.name)
            ),
            _ => return Ok(None),
        };
        if i > 0 {
            chain.push_str(" else ");
        }
        chain.push_str(&format!(
            "if ({}) {{ b['{}'] = '{}'; }}",
            test,
            target,
            escape_string_literal(&row.value)
        ));
    }

    let logic_is_true = cfg.logic == "true";
    if logic_is_true {
        if !cfg.default_value.is_empty() {
            chain.push_str(&format!(
                " else {{ b['{}'] = '{}'; }}",
                target,
                escape_string_literal(&cfg.default_value)
            ));
        }
    } else if !cfg.default_value.is_empty() {
        chain.push_str(&format!(
            " else {{ b['{}'] = '{}'; }}",
            target,
            escape_string_literal(&cfg.default_value)
        ));
    } else {
        chain.push_str(&format!(" else {{ b['{}'] = undefined; }}", target));
    }

    let condition = conditions::compile(&def.conditions)?;
    Ok(Some(wrap(def, &condition, &[chain])))
}
