//! Condition tree types gating an extension's generated logic
//!
//! A `ConditionSet` is an ordered list of `ConditionGroup`s combined with OR;
//! each group is an ordered list of `Condition`s combined with AND. Order is
//! significant: the condition compiler emits groups and conditions verbatim in
//! input order, and the diff engine compares the emitted text byte-for-byte.

use serde::{Deserialize, Serialize};

/// A single condition over a data-layer variable
///
/// `variable` carries its namespace prefix (`udo.`, `cp.`, `qp.`, `js.`);
/// consumers strip prefixes per their own rules. A missing `operator` means
/// "is defined".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Data-layer variable, including its namespace prefix
    pub variable: String,

    /// Comparison operator; `None` is treated as `defined`
    #[serde(default)]
    pub operator: Option<String>,

    /// Right-hand side value, always carried as text
    #[serde(default)]
    pub value: String,
}

impl Condition {
    /// Create a condition with an explicit operator
    pub fn new(
        variable: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            variable: variable.into(),
            operator: Some(operator.into()),
            value: value.into(),
        }
    }

    /// Create a bare "is defined" condition
    pub fn defined(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            operator: None,
            value: String::new(),
        }
    }
}

/// Ordered conditions combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionGroup {
    pub conditions: Vec<Condition>,
}

impl ConditionGroup {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }
}

/// Ordered groups combined with OR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet {
    pub groups: Vec<ConditionGroup>,
}

impl ConditionSet {
    pub fn new(groups: Vec<ConditionGroup>) -> Self {
        Self { groups }
    }

    /// True when no groups are present (compiles to the literal `1`)
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate every condition across all groups in input order
    pub fn iter_conditions(&self) -> impl Iterator<Item = &Condition> {
        self.groups.iter().flat_map(|g| g.conditions.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_set_yaml_shape_is_nested_lists() {
        let yaml = r#"
- - variable: udo.page_name
    operator: equals
    value: home
  - variable: cp.visitor
- - variable: qp.cid
    operator: contains
    value: email
"#;
        let set: ConditionSet = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(set.groups.len(), 2);
        assert_eq!(set.groups[0].conditions.len(), 2);
        assert_eq!(set.groups[0].conditions[1].operator, None);
        assert_eq!(set.groups[1].conditions[0].variable, "qp.cid");
    }

    #[test]
    fn empty_set_is_empty() {
        assert!(ConditionSet::default().is_empty());
    }
}
