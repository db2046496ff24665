//! Set-Data-Values generator
//!
//! Emits one assignment per configured entry, in input order. Entry sources:
//! `text` (escaped literal), `code` (raw expression in its own try/catch),
//! `var` (copy from another data-layer property). Any other source option
//! makes the whole conversion skip.

use tagsmith_core::types::{LocalDefinition, SetDataValuesConfig};

use crate::conditions;
use crate::error::Result;
use crate::escape::escape_string_literal;

use super::{strip_prefixes, wrap};

pub(super) fn generate(
    def: &LocalDefinition,
    cfg: &SetDataValuesConfig,
) -> Result<Option<String>> {
    let mut statements = Vec::with_capacity(cfg.sets.len());

    for entry in &cfg.sets {
        let target = escape_string_literal(strip_prefixes(&entry.set, &["udo."]));

        match entry.setoption.as_str() {
            "text" => {
                let value = escape_string_literal(entry.settotext.as_deref().unwrap_or(""));
                statements.push(format!("b['{}'] = '{}';", target, value));
            }
            // Raw expression from the definition, not revalidated here; its
            // own try/catch keeps one bad expression from killing the rest
            // of the body.
            "code" => {
                let raw = entry.settotext.as_deref().unwrap_or("");
                statements.push(format!(
                    "try {{ b['{}'] = {}; }} catch (e) {{ utag.DB(e); }}",
                    target, raw
                ));
            }
            "var" => {
                let source = strip_prefixes(
                    entry.settovar.as_deref().unwrap_or(""),
                    &["js.", "udo."],
                );
                statements.push(format!(
                    "b['{}'] = b['{}'];",
                    target,
                    escape_string_literal(source)
                ));
            }
            _ => return Ok(None),
        }
    }

    let condition = conditions::compile(&def.conditions)?;
    Ok(Some(wrap(def, &condition, &statements)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsmith_core::types::{Condition, ConditionGroup, ConditionSet, ExtensionConfig, SetEntry};

    fn definition(sets: Vec<SetEntry>, conditions: ConditionSet) -> LocalDefinition {
        LocalDefinition {
            id: 12,
            name: "set values".to_string(),
            scope: "afterload".to_string(),
            occurrence: "run_always".to_string(),
            status: "active".to_string(),
            notes: String::new(),
            conditions,
            config: ExtensionConfig::SetDataValues(SetDataValuesConfig { sets }),
        }
    }

    fn entry(setoption: &str, set: &str, text: Option<&str>, var: Option<&str>) -> SetEntry {
        SetEntry {
            setoption: setoption.to_string(),
            set: set.to_string(),
            settotext: text.map(str::to_string),
            settovar: var.map(str::to_string),
        }
    }

    #[test]
    fn text_entry_with_no_conditions_emits_guarded_assignment() {
        let def = definition(
            vec![entry("text", "testVar", Some("Hello World!"), None)],
            ConditionSet::default(),
        );
        let out = generate(&def, config(&def)).unwrap().unwrap();
        assert!(out.contains("if (1) {\n      b['testVar'] = 'Hello World!';\n    }"));
    }

    #[test]
    fn code_entry_gets_its_own_try_catch() {
        let def = definition(
            vec![entry("code", "ts", Some("new Date().getTime()"), None)],
            ConditionSet::default(),
        );
        let out = generate(&def, config(&def)).unwrap().unwrap();
        assert!(out
            .contains("try { b['ts'] = new Date().getTime(); } catch (e) { utag.DB(e); }"));
    }

    #[test]
    fn var_entry_strips_source_prefixes() {
        let def = definition(
            vec![
                entry("var", "copy1", None, Some("js.pageTitle")),
                entry("var", "copy2", None, Some("udo.section")),
                entry("var", "copy3", None, Some("cp.visitor")),
            ],
            ConditionSet::default(),
        );
        let out = generate(&def, config(&def)).unwrap().unwrap();
        assert!(out.contains("b['copy1'] = b['pageTitle'];"));
        assert!(out.contains("b['copy2'] = b['section'];"));
        assert!(out.contains("b['copy3'] = b['cp.visitor'];"));
    }

    #[test]
    fn unknown_setoption_skips_the_whole_definition() {
        let def = definition(
            vec![
                entry("text", "a", Some("ok"), None),
                entry("mystery", "b", None, None),
            ],
            ConditionSet::default(),
        );
        assert_eq!(generate(&def, config(&def)).unwrap(), None);
    }

    #[test]
    fn entries_are_emitted_in_input_order() {
        let def = definition(
            vec![
                entry("text", "first", Some("1"), None),
                entry("text", "second", Some("2"), None),
            ],
            ConditionSet::default(),
        );
        let out = generate(&def, config(&def)).unwrap().unwrap();
        let first = out.find("b['first']").unwrap();
        let second = out.find("b['second']").unwrap();
        assert!(first < second);
    }

    #[test]
    fn conditions_guard_the_body() {
        let conditions = ConditionSet::new(vec![ConditionGroup::new(vec![Condition::new(
            "udo.page",
            "equals",
            "home",
        )])]);
        let def = definition(vec![entry("text", "a", Some("x"), None)], conditions);
        let out = generate(&def, config(&def)).unwrap().unwrap();
        assert!(out.contains("if (b['page'] == 'home') {"));
    }

    #[test]
    fn generation_is_byte_stable() {
        let def = definition(
            vec![entry("text", "a", Some("x"), None)],
            ConditionSet::default(),
        );
        assert_eq!(
            generate(&def, config(&def)).unwrap(),
            generate(&def, config(&def)).unwrap()
        );
    }

    fn config(def: &LocalDefinition) -> &SetDataValuesConfig {
        match &def.config {
            ExtensionConfig::SetDataValues(cfg) => cfg,
            _ => unreachable!(),
        }
    }
}
