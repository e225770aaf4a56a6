//! Error taxonomy shared by the loader and the matcher.
//!
//! An absence of matches is never an error; it is an empty result.

use thiserror::Error;

/// Number of characters of the offending text quoted in [`InputError`].
pub const PREVIEW_CHARS: usize = 50;

/// Raised once, at resolution time, when no interpretation of the input
/// yields valid JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid json: {preview}...")]
    InvalidJson { preview: String },
}

impl InputError {
    /// Build an [`InputError::InvalidJson`] quoting the first
    /// [`PREVIEW_CHARS`] characters of `text`.
    pub fn invalid_json(text: &str) -> Self {
        InputError::InvalidJson {
            preview: text.chars().take(PREVIEW_CHARS).collect(),
        }
    }
}

/// Everything `keys` / `values` can fail with.
#[derive(Debug, Error)]
pub enum GrepError {
    #[error(transparent)]
    Input(#[from] InputError),
    /// A pattern term (or a configured default pattern) failed to compile.
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
