//! jgrep — grep for JSON.
//!
//! Pull keys or values out of JSON text by pattern, without building a parse
//! tree. This crate ties the two layers together so that integration tests
//! and the CLI can use one entry point.
//!
//! # Architecture
//!
//! ```text
//! Input ──► jgrep-input::resolve ──► JSON text ──► jgrep-core::Matcher ──► Token*
//! ```
//!
//! # Example
//!
//! ```
//! use jgrep::{grep, terms, Token};
//!
//! let json = r#"{"key":"value","key2":"value","key3":"otherValue"}"#;
//! let keys = grep(json).keys(&terms!["value"]).unwrap();
//! assert_eq!(keys, vec![Token::from("key"), Token::from("key2")]);
//! ```

pub use jgrep_core::config::{Config, OutputFormat};
pub use jgrep_core::{GrepError, InputError, Matcher, Mode, Term, Token};
pub use jgrep_input::{resolve, resolve_async, Input};

/// Build a `[Term; N]` from mixed literals, numbers and regexes.
///
/// ```
/// let re = regex::Regex::new(r"key\d").unwrap();
/// let terms = jgrep::terms!["value", 45, re];
/// assert!(terms[2].is_pattern());
/// ```
#[macro_export]
macro_rules! terms {
    ($($term:expr),* $(,)?) => {
        [$($crate::Term::from($term)),*]
    };
}

/// A resolved input, ready to be searched any number of times.
///
/// Resolution happens once, up front. If it failed, every search returns the
/// same [`InputError`].
#[derive(Debug, Clone)]
pub struct JsonGrep {
    data: Result<String, InputError>,
    matcher: Matcher,
}

impl JsonGrep {
    /// Resolve `input` synchronously.
    pub fn new(input: impl Into<Input>) -> Self {
        Self {
            data: resolve(input.into()),
            matcher: Matcher::new(),
        }
    }

    /// Resolve `input`, reading files through tokio.
    pub async fn load(input: impl Into<Input>) -> Self {
        Self {
            data: resolve_async(input.into()).await,
            matcher: Matcher::new(),
        }
    }

    /// Replace the default matcher, e.g. with [`Matcher::from_config`].
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// The resolved JSON text.
    pub fn text(&self) -> Result<&str, InputError> {
        self.data.as_deref().map_err(Clone::clone)
    }

    /// Keys whose value matches any of `terms`.
    pub fn keys(&self, terms: &[Term]) -> Result<Vec<Token>, GrepError> {
        self.search(terms, Mode::Keys)
    }

    /// Values whose key matches any of `terms`.
    pub fn values(&self, terms: &[Term]) -> Result<Vec<Token>, GrepError> {
        self.search(terms, Mode::Values)
    }

    pub fn search(&self, terms: &[Term], mode: Mode) -> Result<Vec<Token>, GrepError> {
        let json = self.text()?;
        Ok(self.matcher.grep(json, terms, mode)?)
    }
}

/// Shorthand for [`JsonGrep::new`].
pub fn grep(input: impl Into<Input>) -> JsonGrep {
    JsonGrep::new(input)
}
