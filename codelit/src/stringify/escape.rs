//! String and char literal escaping.
//!
//! Strings are written either as ordinary quoted literals, where every
//! special character is escaped, or as verbatim `@"..."` literals, where only
//! `"` needs doubling. Verbatim form wins once a string carries more than a
//! handful of characters that would otherwise need a backslash.

use thiserror::Error;
use tracing::trace;

/// Escape-worthy characters tolerated before switching to verbatim form.
pub const DEFAULT_VERBATIM_THRESHOLD: usize = 3;

/// Errors from [`unescape`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnescapeError {
    #[error("dangling backslash at end of literal")]
    Dangling,
    #[error("unknown escape sequence '\\{0}'")]
    UnknownEscape(char),
    #[error("escape '\\{kind}' at offset {offset} is missing hex digits")]
    MissingHexDigits { kind: char, offset: usize },
    #[error("escape at offset {offset} does not encode a valid character")]
    InvalidCodePoint { offset: usize },
}

/// Which quote delimits the literal being escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single,
    Double,
}

/// Check whether `s` reads better as a verbatim literal.
///
/// Counts control characters other than `\r`, plus backslashes; verbatim
/// form is preferred once the count exceeds `threshold`.
pub fn prefer_verbatim(s: &str, threshold: usize) -> bool {
    s.chars()
        .filter(|&c| (c < ' ' && c != '\r') || c == '\\')
        .nth(threshold)
        .is_some()
}

/// Render a string literal, choosing between quoted and verbatim form.
pub fn string_literal(s: &str, threshold: usize) -> String {
    if prefer_verbatim(s, threshold) {
        trace!(len = s.len(), threshold, "using verbatim string literal");
        format!("@\"{}\"", s.replace('"', "\"\""))
    } else {
        format!("\"{}\"", escape_str(s))
    }
}

/// Render a char literal.
///
/// A char literal holds a single UTF-16 unit; characters outside the Basic
/// Multilingual Plane have no char literal and yield `None`.
pub fn char_literal(c: char) -> Option<String> {
    if c.len_utf16() > 1 {
        return None;
    }
    let mut out = String::from('\'');
    push_escaped(&mut out, c, Quote::Single);
    out.push('\'');
    Some(out)
}

/// Escape every character of `s` for use inside an ordinary `"..."` literal.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c, Quote::Double);
    }
    out
}

fn push_escaped(out: &mut String, c: char, quote: Quote) {
    match c {
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        // fixed width: `\x` would otherwise absorb following hex digits
        c if c.is_control() => out.push_str(&format!("\\x{:04x}", u32::from(c))),
        // line and paragraph separators end a line inside a literal
        '\u{2028}' | '\u{2029}' => out.push_str(&format!("\\u{:04x}", u32::from(c))),
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\'' if quote == Quote::Single => out.push_str("\\'"),
        c => out.push(c),
    }
}

/// Decode the body of an ordinary quoted literal.
///
/// Accepts the simple escapes (`\\ \" \' \0 \a \b \f \n \r \t \v`),
/// `\x` with one to four hex digits, `\u` with four and `\U` with eight.
pub fn unescape(body: &str) -> Result<String, UnescapeError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let Some((_, kind)) = chars.next() else {
            return Err(UnescapeError::Dangling);
        };
        let decoded = match kind {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            '0' => '\0',
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'v' => '\u{b}',
            'x' => hex_escape(&mut chars, 1, 4, kind, offset)?,
            'u' => hex_escape(&mut chars, 4, 4, kind, offset)?,
            'U' => hex_escape(&mut chars, 8, 8, kind, offset)?,
            other => return Err(UnescapeError::UnknownEscape(other)),
        };
        out.push(decoded);
    }

    Ok(out)
}

fn hex_escape(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    min: usize,
    max: usize,
    kind: char,
    offset: usize,
) -> Result<char, UnescapeError> {
    let mut code = 0u32;
    let mut len = 0;
    while len < max {
        match chars.peek().and_then(|(_, c)| c.to_digit(16)) {
            Some(digit) => {
                code = code * 16 + digit;
                len += 1;
                chars.next();
            }
            None => break,
        }
    }

    if len < min {
        return Err(UnescapeError::MissingHexDigits { kind, offset });
    }
    char::from_u32(code).ok_or(UnescapeError::InvalidCodePoint { offset })
}
