//! Token extraction — turns a [`RawMatch`] into the requested [`Token`].

use crate::scan::RawMatch;
use crate::types::{Mode, Token};

/// Remove JSON decoration (`"`, `,`, `}`, `]`) and all whitespace.
pub fn strip(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '"' | ',' | '}' | ']') && !c.is_whitespace())
        .collect()
}

/// Extract the side of `raw` selected by `mode`.
///
/// The stripped match is split on its first `:`. Keys are always text;
/// values are coerced with [`coerce`].
pub fn extract(raw: &RawMatch<'_>, mode: Mode) -> Token {
    let stripped = strip(raw.text);
    let (key, value) = stripped.split_once(':').unwrap_or((stripped.as_str(), ""));
    match mode {
        Mode::Keys => Token::Text(key.to_string()),
        Mode::Values => coerce(value),
    }
}

/// Numeric token if `value` is non-empty and parses fully as a number,
/// text token otherwise.
pub fn coerce(value: &str) -> Token {
    if let Ok(n) = value.parse::<i64>() {
        return Token::Number(n.into());
    }
    if let Ok(n) = value.parse::<u64>() {
        return Token::Number(n.into());
    }
    // f64 parsing alone would also accept "inf" and "NaN".
    let numeric_chars = value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'));
    if numeric_chars {
        if let Some(n) = value
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
        {
            return Token::Number(n);
        }
    }
    Token::Text(value.to_string())
}
