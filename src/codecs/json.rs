//! JSON codec backed by `serde_json`.

use serde_json::Value;

use super::Codec;
use crate::error::CodecError;
use crate::registry::Metadata;

/// JSON format handler.
///
/// Composes compact JSON (no whitespace between tokens).
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Codec for Json {
    fn identifier(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        serde_json::from_str(raw).map_err(CodecError::new)
    }

    fn compose(&self, value: &Value) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(CodecError::new)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
            .with("mime_type", self.mime_type())
            .with("library", "serde_json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let value = Json.parse(r#"{"name": "Vehicle", "parts": [1, 2]}"#).unwrap();
        assert_eq!(value, json!({"name": "Vehicle", "parts": [1, 2]}));
    }

    #[test]
    fn test_compose_is_compact() {
        let out = Json.compose(&json!({"a": [1, true, null]})).unwrap();
        assert_eq!(out, r#"{"a":[1,true,null]}"#);
    }

    #[test]
    fn test_parse_error_keeps_serde_json_error() {
        let err = Json.parse("{not json").unwrap_err();
        assert!(err.is::<serde_json::Error>());
        assert!(err.kind().contains("serde_json"));
    }
}
