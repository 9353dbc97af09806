//! Codec trait and the built-in codecs used by discovery.
//!
//! A [`Codec`] bundles a parser, a composer and descriptive metadata under
//! one identifier. Third-party formats can implement it and hand the value
//! to [`FormatRegistry::register_codec`](crate::FormatRegistry::register_codec)
//! instead of registering two loose functions.
//!
//! Built-in codecs:
//!
//! - [`Json`] - always available (`serde_json`)
//! - [`SimdJson`] - cargo feature `fast-json` (`simd-json`), preferred by discovery
//! - [`Yaml`] - cargo feature `yaml` (`serde_yaml`)
//! - [`Toml`] - cargo feature `toml` (`toml`)

#[cfg(feature = "fast-json")]
mod fast_json;
mod json;
#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "yaml")]
mod yaml;

use serde_json::Value;

use crate::error::CodecError;
use crate::registry::Metadata;

#[cfg(feature = "fast-json")]
pub use fast_json::SimdJson;
pub use json::Json;
#[cfg(feature = "toml")]
pub use self::toml::Toml;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// A format that can both read and write structured values.
pub trait Codec: Send + Sync {
    /// Identifier the codec registers under (e.g. "json").
    fn identifier(&self) -> &str;

    /// MIME type for this format.
    fn mime_type(&self) -> &str {
        "application/octet-stream"
    }

    /// Parse raw text into a structured value.
    fn parse(&self, raw: &str) -> Result<Value, CodecError>;

    /// Compose a structured value into raw text.
    fn compose(&self, value: &Value) -> Result<String, CodecError>;

    /// Metadata stored alongside the codec when it is registered.
    fn metadata(&self) -> Metadata {
        Metadata::new().with("mime_type", self.mime_type())
    }
}
