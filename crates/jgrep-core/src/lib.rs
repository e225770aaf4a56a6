//! jgrep-core — pattern construction and key/value matching for jgrep.
//!
//! This crate holds everything that runs once the input is known to be valid
//! JSON text. It never touches the filesystem except for [`config::Config::load`].
//!
//! # Pipeline
//!
//! ```text
//! Term* ──► composite ──► PairScanner ──► RawMatch* ──► extract ──► Token*
//! ```
//!
//! Matching is a heuristic over the flattened text, not a parse: it does not
//! track nesting depth, so keys at different levels are indistinguishable.

pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod pattern;
pub mod scan;
pub mod term;
pub mod types;

pub use error::{GrepError, InputError};
pub use matcher::Matcher;
pub use term::Term;
pub use types::{Mode, Token};
