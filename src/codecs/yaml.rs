//! YAML codec backed by `serde_yaml`.
//!
//! Values go through `serde_json::Value`, so YAML-only constructs
//! (non-string keys, tags) are rejected at parse time.

use serde_json::Value;

use super::Codec;
use crate::error::CodecError;
use crate::registry::Metadata;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Codec for Yaml {
    fn identifier(&self) -> &str {
        "yaml"
    }

    fn mime_type(&self) -> &str {
        "application/x-yaml"
    }

    fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        serde_yaml::from_str(raw).map_err(CodecError::new)
    }

    fn compose(&self, value: &Value) -> Result<String, CodecError> {
        serde_yaml::to_string(value).map_err(CodecError::new)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
            .with("mime_type", self.mime_type())
            .with("library", "serde_yaml")
    }
}
