//! JSON validity checks used while probing inputs.

use jgrep_core::InputError;
use serde::de::IgnoredAny;

/// True if `text` is one syntactically valid JSON document.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Pass `text` through if it is JSON, otherwise quote it in the error.
pub(crate) fn checked(text: String) -> Result<String, InputError> {
    if is_json(&text) {
        Ok(text)
    } else {
        Err(InputError::invalid_json(&text))
    }
}

/// Decode a UTF-8 buffer and validate it.
pub(crate) fn decode(bytes: &[u8]) -> Result<String, InputError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => checked(text.to_string()),
        Err(e) => {
            tracing::debug!(error = %e, "input: buffer is not utf-8");
            Err(InputError::invalid_json(&String::from_utf8_lossy(bytes)))
        }
    }
}
