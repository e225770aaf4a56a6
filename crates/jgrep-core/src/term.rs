//! Search terms and their escaping rules.
//!
//! A [`Term`] is either matched exactly (literal text or a number) or used as
//! a caller-authored regular expression. Pattern terms are not compiled here;
//! a malformed pattern surfaces when the scanner is built.

use std::borrow::Cow;

/// One caller-supplied search unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Matched exactly, after escaping.
    Literal(String),
    /// Matched exactly against its JSON textual form, after escaping.
    Number(serde_json::Number),
    /// Regular expression source, inserted verbatim.
    Pattern(String),
}

impl Term {
    pub fn literal(text: impl Into<String>) -> Self {
        Term::Literal(text.into())
    }

    pub fn pattern(source: impl Into<String>) -> Self {
        Term::Pattern(source.into())
    }

    /// Regex source for this term.
    ///
    /// Pattern terms come back unchanged, capture groups and anchors included.
    /// Literal and number terms have every regex metacharacter escaped so they
    /// only match their own text.
    pub fn escape(&self) -> Cow<'_, str> {
        match self {
            Term::Pattern(source) => Cow::Borrowed(source),
            Term::Literal(text) => Cow::Owned(regex::escape(text)),
            Term::Number(n) => Cow::Owned(regex::escape(&number_text(n))),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Term::Pattern(_))
    }
}

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// JSON text of `n`, with integral floats written as integers (`45.0` as
/// `45`) since documents spell them that way.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < MAX_EXACT_F64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::Literal(text.to_string())
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Term::Literal(text)
    }
}

impl From<&String> for Term {
    fn from(text: &String) -> Self {
        Term::Literal(text.clone())
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Number(n.into())
    }
}

impl From<serde_json::Number> for Term {
    fn from(n: serde_json::Number) -> Self {
        Term::Number(n)
    }
}

impl From<regex::Regex> for Term {
    fn from(re: regex::Regex) -> Self {
        Term::Pattern(re.as_str().to_string())
    }
}

impl From<&regex::Regex> for Term {
    fn from(re: &regex::Regex) -> Self {
        Term::Pattern(re.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case::dot("a.b", "a.b", "axb")]
    #[case::star("a*", "a*", "aaa")]
    #[case::plus_minus("+-1", "+-1", "1")]
    #[case::question("why?", "why?", "wh")]
    #[case::anchors("^x$", "^x$", "x")]
    #[case::braces("{2}", "{2}", "22")]
    #[case::parens("(a|b)", "(a|b)", "a")]
    #[case::brackets("[0-9]", "[0-9]", "5")]
    #[case::backslash(r"C:\d", r"C:\d", "C:1")]
    fn escaped_literal_matches_only_itself(
        #[case] literal: &str,
        #[case] hit: &str,
        #[case] miss: &str,
    ) {
        let term = Term::literal(literal);
        let re = Regex::new(&format!("^(?:{})$", term.escape())).unwrap();
        assert!(re.is_match(hit), "{literal:?} should match itself");
        assert!(!re.is_match(miss), "{literal:?} should not match {miss:?}");
    }

    #[test]
    fn pattern_is_verbatim() {
        let term = Term::from(Regex::new(r"[4-6]{2}").unwrap());
        assert!(term.is_pattern());
        assert_eq!(term.escape(), r"[4-6]{2}");
    }

    #[test]
    fn numbers_use_their_json_text() {
        assert_eq!(Term::from(45).escape(), "45");
        assert_eq!(Term::from(-7i64).escape(), r"\-7");
        let half = serde_json::Number::from_f64(0.5).unwrap();
        assert_eq!(Term::from(half).escape(), r"0\.5");
    }

    #[test]
    fn integral_floats_use_integer_text() {
        let whole = serde_json::Number::from_f64(45.0).unwrap();
        assert_eq!(Term::from(whole).escape(), "45");
        let negative = serde_json::Number::from_f64(-3.0).unwrap();
        assert_eq!(Term::from(negative).escape(), r"\-3");
        let huge = serde_json::Number::from_f64(1e20).unwrap();
        assert_eq!(Term::from(huge.clone()).escape(), regex::escape(&huge.to_string()));
    }

    #[test]
    fn malformed_pattern_is_accepted_at_construction() {
        let term = Term::pattern("(unclosed");
        assert_eq!(term.escape(), "(unclosed");
    }
}
