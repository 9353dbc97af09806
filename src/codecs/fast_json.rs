//! JSON codec backed by `simd-json`.
//!
//! Same text in and out as [`Json`](super::Json); only the library differs.

use serde_json::Value;

use super::Codec;
use crate::error::CodecError;
use crate::registry::Metadata;

/// SIMD-accelerated JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimdJson;

impl Codec for SimdJson {
    fn identifier(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }

    fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        // simd-json parses in place.
        let mut bytes = raw.as_bytes().to_vec();
        simd_json::serde::from_slice(&mut bytes).map_err(CodecError::new)
    }

    fn compose(&self, value: &Value) -> Result<String, CodecError> {
        simd_json::serde::to_string(value).map_err(CodecError::new)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
            .with("mime_type", self.mime_type())
            .with("library", "simd-json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codecs::Json;
    use serde_json::json;

    #[test]
    fn test_parse_matches_serde_json() {
        let raw = r#"{"name": "Vehicle", "parts": [1, 2.5, null, true]}"#;
        assert_eq!(SimdJson.parse(raw).unwrap(), Json.parse(raw).unwrap());
    }

    #[test]
    fn test_roundtrip() {
        let value = json!({"a": [1, "x"], "b": {"c": false}});
        let text = SimdJson.compose(&value).unwrap();
        assert_eq!(SimdJson.parse(&text).unwrap(), value);
    }

    #[test]
    fn test_parse_error_keeps_simd_json_error() {
        let err = SimdJson.parse("{not json").unwrap_err();
        assert!(err.is::<simd_json::Error>());
    }
}
