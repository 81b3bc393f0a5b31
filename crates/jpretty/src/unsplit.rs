//! Text-level pass that puts short integer lists back on one line.
//!
//! The pretty encoder spreads every list across lines, which is noisy for
//! small coordinate-style lists such as `[123, 456, 789]`. This pass rewrites
//! the already-encoded text; it is deliberately decoupled from the encoder
//! so it can be tested on plain fixtures. Three rules, applied in order:
//!
//! 1. `[` whitespace digits `,`            -> `[` digits `,`
//! 2. newline whitespace digits `,`        -> space digits `,`
//! 3. newline whitespace digits maybe-ws `]` -> space digits `]`
//!
//! Only bare ASCII digit runs match, so lists holding floats, signed numbers,
//! or strings are left untouched. Being pattern-based on the whole document,
//! it is not necessarily fast on very large outputs.

/// Apply the three rewrite rules to encoded JSON text.
pub fn unsplit_int_lists(text: &str) -> String {
    let text = join_after_open(text);
    let text = join_middle_items(&text);
    join_closing_item(&text)
}

fn skip_whitespace(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn skip_digits(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Rule 1: drop the whitespace between an opening bracket and a first
/// integer element that is followed by a comma.
fn join_after_open(text: &str) -> String {
    let b = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'[' {
            let ws_end = skip_whitespace(b, i + 1);
            if ws_end > i + 1 {
                let digits_end = skip_digits(b, ws_end);
                if digits_end > ws_end && digits_end < b.len() && b[digits_end] == b',' {
                    out.push_str(&text[last..=i]);
                    out.push_str(&text[ws_end..=digits_end]);
                    i = digits_end + 1;
                    last = i;
                    continue;
                }
            }
        }
        i += 1;
    }
    out.push_str(&text[last..]);
    out
}

/// Rule 2: fold a line break before `<digits>,` into a single space.
fn join_middle_items(text: &str) -> String {
    let b = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'\n' {
            let ws_end = skip_whitespace(b, i + 1);
            let digits_end = skip_digits(b, ws_end);
            if digits_end > ws_end && digits_end < b.len() && b[digits_end] == b',' {
                out.push_str(&text[last..i]);
                out.push(' ');
                out.push_str(&text[ws_end..=digits_end]);
                i = digits_end + 1;
                last = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&text[last..]);
    out
}

/// Rule 3: fold a line break before the final `<digits>]` into a space.
fn join_closing_item(text: &str) -> String {
    let b = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'\n' {
            let ws_end = skip_whitespace(b, i + 1);
            let digits_end = skip_digits(b, ws_end);
            if digits_end > ws_end {
                let close = skip_whitespace(b, digits_end);
                if close < b.len() && b[close] == b']' {
                    out.push_str(&text[last..i]);
                    out.push(' ');
                    out.push_str(&text[ws_end..digits_end]);
                    out.push(']');
                    i = close + 1;
                    last = i;
                    continue;
                }
            }
        }
        i += 1;
    }
    out.push_str(&text[last..]);
    out
}
