//! Quoting for rewritten string literals
//!
//! Rewritten literals are emitted single-quoted. Literals that are not
//! rewritten keep their original text.

/// Render `value` as a single-quoted JavaScript string literal.
pub fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Render `value` as a JSX attribute string.
///
/// JSX attribute strings have no escape sequences, so a value containing a
/// single quote falls back to double quotes.
pub fn jsx_attribute_literal(value: &str) -> String {
    if value.contains('\'') {
        format!("\"{}\"", value)
    } else {
        format!("'{}'", value)
    }
}
