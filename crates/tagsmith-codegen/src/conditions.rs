//! Condition compiler: condition trees to boolean expression text
//!
//! Compiles a `ConditionSet` (OR of AND-groups) into a single boolean
//! expression against the runtime data layer `b`. Emission order mirrors
//! input order exactly; the compiler never reorders, deduplicates, or
//! canonicalizes, because downstream diffing depends on byte-stable output.

use tagsmith_core::types::{Condition, ConditionGroup, ConditionSet};

use crate::error::{CodegenError, Result};
use crate::escape::escape_string_literal;

/// Namespace prefix stripped from variables before emission.
///
/// Only `udo.` is stripped here: universal-data-object variables live as
/// bare keys on `b`, while `cp.` / `qp.` / `js.` keys are stored prefixed.
const UDO_PREFIX: &str = "udo.";

/// Compile a condition set to one boolean expression.
///
/// The empty set compiles to the literal `1` (always true).
pub fn compile(set: &ConditionSet) -> Result<String> {
    if set.is_empty() {
        return Ok("1".to_string());
    }

    let groups = set
        .groups
        .iter()
        .map(compile_group)
        .collect::<Result<Vec<_>>>()?;

    if groups.len() == 1 {
        Ok(groups.into_iter().next().expect("one group"))
    } else {
        Ok(format!("({})", groups.join(" || ")))
    }
}

/// Compile one AND-group; two or more conditions are parenthesized.
fn compile_group(group: &ConditionGroup) -> Result<String> {
    let conditions = group
        .conditions
        .iter()
        .map(compile_condition)
        .collect::<Result<Vec<_>>>()?;

    if conditions.len() == 1 {
        Ok(conditions.into_iter().next().expect("one condition"))
    } else {
        Ok(format!("({})", conditions.join(" && ")))
    }
}

/// Property access for a condition's variable, with `udo.` stripped.
fn operand(variable: &str) -> String {
    let name = variable.strip_prefix(UDO_PREFIX).unwrap_or(variable);
    format!("b['{}']", escape_string_literal(name))
}

fn compile_condition(condition: &Condition) -> Result<String> {
    let lhs = operand(&condition.variable);
    let value = escape_string_literal(&condition.value);

    let text = match condition.operator.as_deref() {
        None | Some("defined") => format!("typeof {} != 'undefined'", lhs),
        Some("equals") => format!("{} == '{}'", lhs, value),
        Some("does_not_equal") => format!("{} != '{}'", lhs, value),
        Some("equals_ignore_case") => format!(
            "{}.toString().toLowerCase() == '{}'.toString().toLowerCase()",
            lhs, value
        ),
        Some("contains") => format!("{}.indexOf('{}') > -1", lhs, value),
        Some("contains_ignore_case") => format!(
            "{}.toString().toLowerCase().indexOf('{}'.toLowerCase()) > -1",
            lhs, value
        ),
        Some("does_not_contain") => format!("{}.indexOf('{}') < 0", lhs, value),
        // Value is inserted as raw regex source; escaping it would change
        // the pattern. Callers own the contents.
        Some("starts_with") => format!("/^{}/.test({})", condition.value, lhs),
        Some("less_than") => format!("parseFloat({}) < parseFloat('{}')", lhs, value),
        Some("less_than_equal_to") => {
            format!("parseFloat({}) <= parseFloat('{}')", lhs, value)
        }
        Some("greater_than") => format!("parseFloat({}) > parseFloat('{}')", lhs, value),
        Some("notdefined") => format!("typeof {} == 'undefined'", lhs),
        Some("notpopulated") => format!("{} == ''", lhs),
        // Legacy quirk: the original runtime tested the fixed js_page
        // variable instead of the operand. Deployed extensions depend on
        // this text, so it stays.
        Some("populated") => {
            "typeof b['js_page'] != 'undefined' && b['js_page'] != ''".to_string()
        }
        Some(other) => return Err(CodegenError::unsupported_operator(other)),
    };

    Ok(text)
}
