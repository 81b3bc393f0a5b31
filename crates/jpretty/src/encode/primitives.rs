use crate::error::{Error, Result};
use crate::value::Number;

pub fn format_null() -> &'static str {
    "null"
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Render a number token. In strict mode a non-finite value is an encoding
/// error rather than invalid output.
pub fn format_number(n: &Number, allow_nan: bool) -> Result<String> {
    if !allow_nan && !n.is_finite() {
        return Err(Error::NonFinite);
    }
    Ok(n.to_string())
}

fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// JSON string escaping: quote, backslash, the short escapes, and \u00XX
/// for remaining control characters.
pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if is_control(c) => {
                use core::fmt::Write as _;
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_and_quote_into(&mut out, s);
    out
}
