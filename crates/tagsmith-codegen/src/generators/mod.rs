//! Per-type extension code generators
//!
//! Each generator maps one local definition to full generated source text,
//! or signals a skip with `Ok(None)`. All six share the same wrapper: banner
//! comment, immediately-invoked function over `(a, b)` (event type and data
//! layer), and a try/catch forwarding exceptions to the runtime debug
//! channel. Layout is part of the deployment contract and must not drift.

mod crypto;
mod join_data_values;
mod lookup_table;
mod pathname_tokenizer;
mod persist_data_value;
mod set_data_values;

use tagsmith_core::types::{ExtensionConfig, LocalDefinition};

use crate::error::Result;
use crate::escape::escape_comment;

/// Generate source text for one local definition.
///
/// Dispatch is by the definition's explicit type tag. `Ok(None)` means the
/// configuration shape is recognized but unsupported; the caller skips that
/// definition without aborting the batch.
pub fn generate(def: &LocalDefinition) -> Result<Option<String>> {
    let generated = match &def.config {
        ExtensionConfig::SetDataValues(cfg) => set_data_values::generate(def, cfg)?,
        ExtensionConfig::PersistDataValue(cfg) => persist_data_value::generate(def, cfg)?,
        ExtensionConfig::JoinDataValues(cfg) => join_data_values::generate(def, cfg)?,
        ExtensionConfig::LookupTable(cfg) => lookup_table::generate(def, cfg)?,
        ExtensionConfig::Crypto(cfg) => crypto::generate(def, cfg)?,
        ExtensionConfig::PathnameTokenizer(cfg) => pathname_tokenizer::generate(def, cfg)?,
    };

    match &generated {
        Some(code) => tracing::debug!(
            "Generated {} bytes for {} extension {} ({})",
            code.len(),
            def.extension_type(),
            def.id,
            def.name
        ),
        None => tracing::debug!(
            "Skipping {} extension {} ({}): unsupported configuration shape",
            def.extension_type(),
            def.id,
            def.name
        ),
    }

    Ok(generated)
}

/// Assemble the shared banner + wrapper around a compiled condition and the
/// generator's body statements. Statements land one per line inside the
/// condition guard, indented six spaces.
pub(crate) fn wrap(def: &LocalDefinition, condition: &str, statements: &[String]) -> String {
    let mut out = String::new();
    out.push_str("/* Based on ");
    out.push_str(def.extension_type().banner_label());
    out.push(' ');
    out.push_str(&escape_comment(&def.name));
    out.push(' ');
    out.push_str(&def.id.to_string());
    out.push_str(" */\n");
    out.push_str("(function(a, b) {\n");
    out.push_str("  try {\n");
    out.push_str("    if (");
    out.push_str(condition);
    out.push_str(") {\n");
    for statement in statements {
        out.push_str("      ");
        out.push_str(statement);
        out.push('\n');
    }
    out.push_str("    }\n");
    out.push_str("  } catch (e) {\n");
    out.push_str("    utag.DB(e);\n");
    out.push_str("  }\n");
    out.push_str("})(utag.ev, utag.data);\n");
    out
}

/// Strip the first matching namespace prefix, if any.
///
/// Generators strip different prefix sets than the condition compiler does;
/// the two passes are deliberately separate.
pub(crate) fn strip_prefixes<'a>(name: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = name.strip_prefix(prefix) {
            return rest;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagsmith_core::types::{ExtensionConfig, SetDataValuesConfig};

    fn definition(name: &str) -> LocalDefinition {
        LocalDefinition {
            id: 7,
            name: name.to_string(),
            scope: "afterload".to_string(),
            occurrence: "run_always".to_string(),
            status: "active".to_string(),
            notes: String::new(),
            conditions: Default::default(),
            config: ExtensionConfig::SetDataValues(SetDataValuesConfig::default()),
        }
    }

    #[test]
    fn wrapper_layout_is_fixed() {
        let out = wrap(&definition("My Ext"), "1", &["b['x'] = 'y';".to_string()]);
        assert_eq!(
            out,
            "/* Based on SET DATA VALUES My Ext 7 */\n\
             (function(a, b) {\n\
             \x20 try {\n\
             \x20   if (1) {\n\
             \x20     b['x'] = 'y';\n\
             \x20   }\n\
             \x20 } catch (e) {\n\
             \x20   utag.DB(e);\n\
             \x20 }\n\
             })(utag.ev, utag.data);\n"
        );
    }

    #[test]
    fn banner_defuses_comment_injection_in_names() {
        let out = wrap(&definition("evil */ alert(1)"), "1", &[]);
        assert!(out.starts_with("/* Based on SET DATA VALUES evil *\\/ alert(1) 7 */\n"));
    }

    #[test]
    fn strip_prefixes_takes_first_match_only() {
        assert_eq!(strip_prefixes("js.foo", &["js.", "udo."]), "foo");
        assert_eq!(strip_prefixes("udo.foo", &["js.", "udo."]), "foo");
        assert_eq!(strip_prefixes("cp.foo", &["js.", "udo."]), "cp.foo");
    }
}
