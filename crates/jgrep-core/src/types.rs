//! Core types for jgrep-core.
//!
//! This module defines the result unit handed back to callers, the
//! [`Token`], and the [`Mode`] discriminant that decides which side of a
//! key/value pair is returned.

use serde::Serialize;

/// One extracted key or value.
///
/// Keys are always [`Token::Text`]. Values become [`Token::Number`] when the
/// stripped text parses fully as a number and [`Token::Text`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Token {
    Text(String),
    Number(serde_json::Number),
}

impl Token {
    /// The numeric payload, if this is a [`Token::Number`].
    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Token::Text(_) => None,
            Token::Number(n) => Some(n),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Text(s) => write!(f, "{s}"),
            Token::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Text(s)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Token::Number(n.into())
    }
}

impl From<Token> for serde_json::Value {
    fn from(token: Token) -> Self {
        match token {
            Token::Text(s) => serde_json::Value::String(s),
            Token::Number(n) => serde_json::Value::Number(n),
        }
    }
}

/// Which side of each key/value pair a search returns.
///
/// The other side is the one constrained by the caller's terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Keys,
    Values,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Keys => write!(f, "keys"),
            Mode::Values => write!(f, "values"),
        }
    }
}
