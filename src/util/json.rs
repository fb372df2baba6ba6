use serde_json::Value;

/// Strict JSON decode; malformed input is an error, never a default.
pub fn safe_parse(data: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(data)
}
