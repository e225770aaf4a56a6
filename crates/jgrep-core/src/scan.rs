//! Pair scanner — finds `key: value` occurrences in flattened JSON text.
//!
//! The scanning expression is
//!
//! ```text
//! "?(<key pattern>)"?:\s*"?(<value pattern>)"?
//! ```
//!
//! One side carries the caller's composite pattern, the other a default that
//! matches anything plausible. This is a token-level approximation of JSON:
//! nesting depth is not tracked, and a string value that itself contains
//! `":` punctuation can produce spurious pairs.

use regex::Regex;

/// Free-side key pattern: a run of identifier-ish characters.
pub const DEFAULT_KEY_PATTERN: &str = r"[a-zA-Z0-9_\-]*";

/// Free-side value pattern: an optionally quoted run up to the next `"` or
/// `,`, or to the end of the text.
pub const DEFAULT_VALUE_PATTERN: &str = r#""?[^",]*(?:[",]|$)"#;

/// One scanned key/value occurrence, before extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'a> {
    /// The matched slice of the input text.
    pub text: &'a str,
}

/// A compiled pair-matching expression.
#[derive(Debug, Clone)]
pub struct PairScanner {
    regex: Regex,
}

impl PairScanner {
    /// Compile the pair expression around `key_pattern` and `value_pattern`.
    ///
    /// Both are raw regex sources. Compilation errors are returned as-is.
    pub fn new(key_pattern: &str, value_pattern: &str) -> Result<Self, regex::Error> {
        let source = format!(r#""?({key_pattern})"?:\s*"?({value_pattern})"?"#);
        let regex = Regex::new(&source)?;
        tracing::trace!(pattern = %regex, "pair scanner compiled");
        Ok(Self { regex })
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    pub fn scan<'a>(&'a self, text: &'a str) -> impl Iterator<Item = RawMatch<'a>> + 'a {
        self.regex.find_iter(text).map(|m| RawMatch { text: m.as_str() })
    }

    /// The full scanning expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
