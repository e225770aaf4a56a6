//! Composite pattern construction.
//!
//! All terms of one call are folded into a single alternation. The result is
//! always embedded inside its own group by the scanner, so `|` never escapes
//! into the surrounding pair expression.

use crate::term::Term;

/// Join the escaped sources of `terms` with `|`.
///
/// An empty slice yields the empty string, which matches the empty string.
pub fn composite(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| t.escape())
        .collect::<Vec<_>>()
        .join("|")
}
