//! Static JSON documents used across harnesses.
//!
//! Each document comes in a compact and a pretty-printed shape so harnesses
//! can check that layout whitespace never changes what is matched.

/// Flat object, two keys share the value `"value"`.
pub const DOC_SHARED_VALUE: &str = r#"{"key":"value","key2":"value","key3":"otherValue"}"#;
pub const DOC_SHARED_VALUE_PRETTY: &str =
    "{\n\t\"key\": \"value\",\n\t\"key2\": \"value\",\n\t\"key3\": \"otherValue\"\n}";

/// Flat object with distinct string values.
pub const DOC_DISTINCT_VALUES: &str = r#"{"key":"value","key2":"value2","key3":"otherValue"}"#;

/// Flat object with numeric values.
pub const DOC_NUMBERS: &str = r#"{"key":45,"key2":46,"key3":47}"#;
pub const DOC_REPEATED_NUMBER: &str = r#"{"key":45,"key2":45,"key3":46}"#;
pub const DOC_REPEATED_NUMBER_PRETTY: &str = "{\n\t\"key\": 45,\n\t\"key2\": 45,\n\t\"key3\": 46}";

/// Array of single-key objects, the key `"key"` appears twice.
pub const DOC_ARRAY: &str = r#"[{"key":"value1"},{"key":"value2"},{"otherKey":"otherValue"}]"#;
pub const DOC_ARRAY_PRETTY: &str =
    "[\n\t{\"key\":\"value1\"},\n\t{\"key\":\"value2\"},\n\t{\"otherKey\":\"otherValue\"}\n\t]";
pub const DOC_ARRAY_NUMBERS: &str = r#"[{"key":45},{"key":46},{"otherKey":47}]"#;
pub const DOC_ARRAY_NUMBERS_PRETTY: &str =
    "[\n\t{\"key\":45},\n\t{\"key\":46},\n\t{\"otherKey\":47}\n\t]";

/// A flat object of `n` pairs `"k{i}": "v{i}"`, used for throughput and
/// ordering checks.
pub fn flat_object(n: usize) -> String {
    let pairs: Vec<String> = (0..n).map(|i| format!(r#""k{i}":"v{i}""#)).collect();
    format!("{{{}}}", pairs.join(","))
}

/// Write `contents` to a fresh temp file and return its handle (the file is
/// deleted when the handle drops).
pub fn temp_json(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
