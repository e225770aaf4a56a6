//! Assertion macros for jgrep harnesses.
//!
//! These wrap `pretty_assertions` and turn a heterogeneous list of expected
//! strings and numbers into a `Vec<Token>` so expectations read like JSON.

/// Assert that a search result equals the expected tokens.
///
/// ```rust
/// assert_tokens!(grep(DOC_ARRAY).values(&terms!["key"]), ["value1", "value2"]);
/// ```
#[macro_export]
macro_rules! assert_tokens {
    ($result:expr, [$($expected:expr),* $(,)?]) => {{
        let actual: Vec<jgrep::Token> = match $result {
            Ok(tokens) => tokens,
            Err(e) => panic!("assert_tokens! failed: search returned an error: {e}"),
        };
        let expected: Vec<jgrep::Token> = vec![$(jgrep::Token::from($expected)),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}

/// Assert that a search failed with the given message.
#[macro_export]
macro_rules! assert_grep_error {
    ($result:expr, $message:expr) => {{
        match $result {
            Ok(tokens) => panic!(
                "assert_grep_error! failed: expected an error, got {:?}",
                tokens
            ),
            Err(e) => pretty_assertions::assert_eq!(e.to_string(), $message),
        }
    }};
}
