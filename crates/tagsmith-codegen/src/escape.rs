//! Escaping for generated string literals and comments
//!
//! Both functions are pure and deterministic. Generated text is compared
//! byte-for-byte by the diff engine, so there is no room for locale- or
//! platform-dependent behavior here.

/// Escape a value for embedding in a single-quoted string literal.
///
/// Walking characters one at a time means the backslash case can never
/// re-escape a sequence introduced by a later rule.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{000C}' => out.push_str("\\f"),
            '\u{000B}' => out.push_str("\\v"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for embedding in a `/* ... */` comment.
///
/// `*/` becomes `*\/` so injected input cannot terminate the comment early;
/// newlines collapse to spaces so the banner stays on one line.
pub fn escape_comment(s: &str) -> String {
    s.replace("*/", "*\\/").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslash_is_escaped_before_introduced_sequences() {
        // A literal backslash followed by n must not collapse into \n
        assert_eq!(escape_string_literal("a\\nb"), "a\\\\nb");
        assert_eq!(escape_string_literal("a\nb"), "a\\nb");
    }

    #[test]
    fn quotes_and_controls() {
        assert_eq!(escape_string_literal("it's"), "it\\'s");
        assert_eq!(
            escape_string_literal("a\tb\r\x0C\x0B\0"),
            "a\\tb\\r\\f\\v\\0"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_string_literal("Hello World!"), "Hello World!");
    }

    #[test]
    fn comment_terminator_is_defused() {
        assert_eq!(escape_comment("end */ alert(1)"), "end *\\/ alert(1)");
    }

    #[test]
    fn comment_newlines_become_spaces() {
        assert_eq!(escape_comment("line1\nline2\rline3"), "line1 line2 line3");
    }

    #[test]
    fn escaping_is_idempotent_on_clean_input() {
        let s = "same input, same output";
        assert_eq!(escape_string_literal(s), escape_string_literal(s));
    }
}
