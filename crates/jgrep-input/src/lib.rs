//! jgrep-input — input resolution for jgrep.
//!
//! Every input shape is reduced to one string that is known to be valid JSON
//! text, or to an [`InputError`] quoting the offending text. The matcher in
//! [`jgrep_core`] only ever sees the resolved string.
//!
//! | Variant | Rule |
//! |---------|------|
//! | `Text` | passed through if it is JSON, otherwise tried as a file path |
//! | `Path` | file contents, which must be JSON |
//! | `Bytes` | UTF-8 decoded, must be JSON |
//! | `Structured` | serialized to compact JSON |

mod validate;

use std::path::{Path, PathBuf};

use bytes::Bytes;
use jgrep_core::InputError;

pub use validate::is_json;

/// Anything jgrep can search.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// JSON text, or a path to a file containing JSON text.
    Text(String),
    /// A path to a file containing JSON text.
    Path(PathBuf),
    /// A UTF-8 buffer containing JSON text.
    Bytes(Bytes),
    /// An in-memory value, serialized before matching.
    Structured(serde_json::Value),
}

impl Input {
    /// Serialize any [`serde::Serialize`] value into a structured input.
    ///
    /// Object keys keep their declaration order, so a struct searches the
    /// same as its JSON text.
    pub fn from_serialize<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, InputError> {
        serde_json::to_string(value)
            .map(Input::Text)
            .map_err(|e| InputError::invalid_json(&e.to_string()))
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Text(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Text(s)
    }
}

impl From<PathBuf> for Input {
    fn from(p: PathBuf) -> Self {
        Input::Path(p)
    }
}

impl From<&Path> for Input {
    fn from(p: &Path) -> Self {
        Input::Path(p.to_path_buf())
    }
}

impl From<Bytes> for Input {
    fn from(b: Bytes) -> Self {
        Input::Bytes(b)
    }
}

impl From<Vec<u8>> for Input {
    fn from(b: Vec<u8>) -> Self {
        Input::Bytes(Bytes::from(b))
    }
}

impl From<serde_json::Value> for Input {
    fn from(v: serde_json::Value) -> Self {
        Input::Structured(v)
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve `input` into validated JSON text, reading files synchronously.
pub fn resolve(input: Input) -> Result<String, InputError> {
    match input {
        Input::Text(text) => {
            if is_json(&text) {
                return Ok(text);
            }
            tracing::debug!(len = text.len(), "input: text is not json, trying as path");
            let path = Path::new(&text);
            if !path.is_file() {
                return Err(InputError::invalid_json(&text));
            }
            match std::fs::read_to_string(path) {
                Ok(contents) => validate::checked(contents),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "input: read failed");
                    Err(InputError::invalid_json(&text))
                }
            }
        }
        Input::Path(path) => match std::fs::read_to_string(&path) {
            Ok(contents) => validate::checked(contents),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "input: read failed");
                Err(InputError::invalid_json(&path.to_string_lossy()))
            }
        },
        Input::Bytes(bytes) => validate::decode(&bytes),
        Input::Structured(value) => Ok(value.to_string()),
    }
}

/// Resolve `input` into validated JSON text, reading files through tokio.
///
/// Same rules as [`resolve`].
pub async fn resolve_async(input: Input) -> Result<String, InputError> {
    let path = match &input {
        Input::Text(text) if !is_json(text) => PathBuf::from(text),
        Input::Path(path) => path.clone(),
        _ => return resolve(input),
    };

    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(InputError::invalid_json(&path.to_string_lossy()));
    }

    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => validate::checked(contents),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "input: async read failed");
            Err(InputError::invalid_json(&path.to_string_lossy()))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn json_text_passes_through_untouched() {
        let text = "{\n\t\"key\": \"value\"\n}";
        assert_eq!(resolve(text.into()).unwrap(), text);
    }

    #[test]
    fn non_json_text_is_reported() {
        let err = resolve("Not Found".into()).unwrap_err();
        assert_eq!(err.to_string(), "invalid json: Not Found...");
    }

    #[test]
    fn text_naming_a_json_file_reads_it() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"key":"value1"}}]"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();
        assert_eq!(resolve(path.into()).unwrap(), r#"[{"key":"value1"}]"#);
    }

    #[test]
    fn invalid_file_quotes_its_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Not Found").unwrap();
        let err = resolve(Input::from(file.path())).unwrap_err();
        assert_eq!(err.to_string(), "invalid json: Not Found...");
    }

    #[test]
    fn missing_path_quotes_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = resolve(Input::Path(path.clone())).unwrap_err();
        let expected: String = path.to_string_lossy().chars().take(50).collect();
        assert_eq!(err.to_string(), format!("invalid json: {expected}..."));
    }

    #[test]
    fn structured_values_serialize_compactly() {
        let value = serde_json::json!({"key": "value1"});
        assert_eq!(resolve(value.into()).unwrap(), r#"{"key":"value1"}"#);
    }

    #[test]
    fn structured_values_keep_key_order() {
        let value: serde_json::Value = serde_json::from_str(r#"{"zeta":1,"alpha":2}"#).unwrap();
        assert_eq!(resolve(value.into()).unwrap(), r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn from_serialize_accepts_plain_collections() {
        let map = std::collections::BTreeMap::from([("key", 45)]);
        let input = Input::from_serialize(&map).unwrap();
        assert_eq!(resolve(input).unwrap(), r#"{"key":45}"#);
    }

    #[tokio::test]
    async fn async_resolution_matches_sync() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"key":45}}"#).unwrap();
        let input = Input::from(file.path());
        assert_eq!(
            resolve_async(input.clone()).await.unwrap(),
            resolve(input).unwrap()
        );
        assert_eq!(
            resolve_async("Not Found".into()).await.unwrap_err(),
            InputError::invalid_json("Not Found")
        );
    }
}
