//! TOML codec backed by the `toml` crate.
//!
//! TOML documents are always tables, so only JSON objects can be composed.

use serde_json::Value;

use super::Codec;
use crate::error::CodecError;
use crate::registry::Metadata;

/// TOML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toml;

impl Codec for Toml {
    fn identifier(&self) -> &str {
        "toml"
    }

    fn mime_type(&self) -> &str {
        "application/toml"
    }

    fn parse(&self, raw: &str) -> Result<Value, CodecError> {
        ::toml::from_str(raw).map_err(CodecError::new)
    }

    fn compose(&self, value: &Value) -> Result<String, CodecError> {
        ::toml::to_string(value).map_err(CodecError::new)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
            .with("mime_type", self.mime_type())
            .with("library", "toml")
    }
}
