//! Matcher — the `keys` / `values` orchestration over validated JSON text.
//!
//! `keys(terms)` constrains the value side with the composite pattern and
//! returns the key of every match; `values(terms)` is the mirror image. The
//! unconstrained side uses the matcher's free-side pattern for that side.

use crate::config::ScanConfig;
use crate::extract::extract;
use crate::pattern::composite;
use crate::scan::{PairScanner, DEFAULT_KEY_PATTERN, DEFAULT_VALUE_PATTERN};
use crate::term::Term;
use crate::types::{Mode, Token};

/// Pair matcher holding the free-side patterns.
///
/// Cheap to clone, holds no per-call state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    key_pattern: String,
    value_pattern: String,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            key_pattern: DEFAULT_KEY_PATTERN.to_string(),
            value_pattern: DEFAULT_VALUE_PATTERN.to_string(),
        }
    }

    /// Use the free-side patterns from a `[scan]` config section.
    pub fn from_config(cfg: &ScanConfig) -> Self {
        Self {
            key_pattern: cfg.key_pattern.clone(),
            value_pattern: cfg.value_pattern.clone(),
        }
    }

    /// Keys whose value matches any of `terms`, in order of occurrence.
    pub fn keys(&self, json: &str, terms: &[Term]) -> Result<Vec<Token>, regex::Error> {
        self.grep(json, terms, Mode::Keys)
    }

    /// Values whose key matches any of `terms`, in order of occurrence.
    pub fn values(&self, json: &str, terms: &[Term]) -> Result<Vec<Token>, regex::Error> {
        self.grep(json, terms, Mode::Values)
    }

    /// Scan `json` with `terms` constraining the side opposite to `mode`.
    pub fn grep(&self, json: &str, terms: &[Term], mode: Mode) -> Result<Vec<Token>, regex::Error> {
        let constrained = composite(terms);
        let scanner = match mode {
            Mode::Keys => PairScanner::new(&self.key_pattern, &constrained)?,
            Mode::Values => PairScanner::new(&constrained, &self.value_pattern)?,
        };

        let tokens: Vec<Token> = scanner.scan(json).map(|m| extract(&m, mode)).collect();
        tracing::debug!(
            %mode,
            terms = terms.len(),
            pattern = %constrained,
            expression = scanner.as_str(),
            matches = tokens.len(),
            "grep complete"
        );
        Ok(tokens)
    }
}
