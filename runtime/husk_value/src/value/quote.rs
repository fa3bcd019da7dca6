//! Quoting of strings for the canonical text form.
//!
//! A string prints bare when it reads back as a single bareword. Otherwise it
//! is single-quoted, unless it holds control characters, which only a
//! double-quoted string can spell.

use std::borrow::Cow;
use std::fmt::Write;

/// Punctuation allowed inside a bareword, besides letters and digits.
const BAREWORD_PUNCT: &str = "!%+,-./:@_~";

fn is_bareword_char(c: char) -> bool {
    c.is_alphanumeric() || BAREWORD_PUNCT.contains(c)
}

fn is_bareword(s: &str) -> bool {
    // A leading tilde would be read back as a home-directory abbreviation.
    !s.is_empty() && !s.starts_with('~') && s.chars().all(is_bareword_char)
}

/// Quote `s` so that it reads back as the same string.
pub(crate) fn quote(s: &str) -> Cow<'_, str> {
    if is_bareword(s) {
        return Cow::Borrowed(s);
    }
    if !s.chars().any(char::is_control) {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            if c == '\'' {
                out.push('\'');
            }
            out.push(c);
        }
        out.push('\'');
        return Cow::Owned(out);
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii_control() => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests;
