//! # formats
//!
//! Registry of named parser/composer pairs for converting between data
//! formats without hardcoding which library handles which format.
//!
//! ## Module Structure
//!
//! ```text
//! api        → free functions over the process-wide default registry
//!   ↓
//! registry   → FormatRegistry: registration, parse/compose/convert dispatch
//!   ↓
//! discovery  → catalog of known formats and their providers
//!   ↓
//! codecs     → Codec trait, built-in JSON / YAML / TOML codecs
//!   ↓
//! error      → FormatError, CodecError
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use formats::{FormatRegistry, Metadata, Exclude};
//!
//! let registry = FormatRegistry::with_discovery(Exclude::none());
//! registry.register("lines", split_lines, join_lines, Metadata::new());
//!
//! let value = registry.parse("json", r#"{"a": [1, 2]}"#)?;
//! let text = registry.convert("json", "yaml", r#"{"a": [1, 2]}"#)?;
//! ```
//!
//! ## Cargo features
//!
//! - `yaml` - discover YAML through `serde_yaml`
//! - `toml` - discover TOML through `toml`
//! - `fast-json` - prefer `simd-json` for JSON
//! - `all-formats` - all of the above
//!
//! JSON through `serde_json` is always available as the fallback.

/// Free functions over the default registry
pub mod api;

/// Codec trait and built-in format codecs
pub mod codecs;

/// Discovery of formats backed by available libraries
pub mod discovery;

/// Error types
pub mod error;

/// Registry construction options
pub mod options;

/// The format registry
pub mod registry;

pub use api::{
    compose, composer, convert, default_registry, discover, discover_with_meta, meta, parse, parser, register,
    register_codec, register_composer, register_meta, register_parser,
};
pub use codecs::Codec;
pub use discovery::{Exclude, KnownFormat, Provider};
pub use error::{BoxError, Capability, CodecError, FormatError};
pub use options::RegistryOptions;
pub use registry::{
    Composer, ComposerRegistration, FormatCapability, FormatId, FormatRecord, FormatRegistry,
    Metadata, Parser, ParserRegistration,
};

// Re-export the structured value type
pub use serde_json::Value;
