//! Free functions over a process-wide default registry.
//!
//! The default registry is created empty, exactly once, on first use, and
//! lives for the rest of the process. Every function here forwards to the
//! [`FormatRegistry`] method of the same name with the same contract.
//! Code that needs isolation (tests, independent format sets) should build
//! its own registry with [`registry`] or [`FormatRegistry::new`].

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::codecs::Codec;
use crate::discovery::Exclude;
use crate::error::FormatError;
use crate::options::RegistryOptions;
use crate::registry::{
    ComposerRegistration, FormatId, FormatRegistry, Metadata, ParserRegistration,
};

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::new);

/// The process-wide registry the free functions operate on.
pub fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

/// Create a new, independent registry.
pub fn registry(options: &RegistryOptions) -> FormatRegistry {
    FormatRegistry::with_options(options)
}

/// See [`FormatRegistry::register`].
pub fn register<P, PE, C, CE>(identifier: impl Into<FormatId>, parser: P, composer: C, metadata: Metadata)
where
    P: Fn(&str) -> Result<Value, PE> + Send + Sync + 'static,
    PE: std::error::Error + Send + Sync + 'static,
    C: Fn(&Value) -> Result<String, CE> + Send + Sync + 'static,
    CE: std::error::Error + Send + Sync + 'static,
{
    default_registry().register(identifier, parser, composer, metadata)
}

/// See [`FormatRegistry::register_codec`].
pub fn register_codec<C: Codec + 'static>(codec: C) {
    default_registry().register_codec(codec)
}

/// See [`FormatRegistry::register_parser`].
pub fn register_parser<F, E>(identifier: impl Into<FormatId>, parser: F, metadata: Metadata)
where
    F: Fn(&str) -> Result<Value, E> + Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    default_registry().register_parser(identifier, parser, metadata)
}

/// See [`FormatRegistry::register_composer`].
pub fn register_composer<F, E>(identifier: impl Into<FormatId>, composer: F, metadata: Metadata)
where
    F: Fn(&Value) -> Result<String, E> + Send + Sync + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    default_registry().register_composer(identifier, composer, metadata)
}

/// See [`FormatRegistry::register_meta`].
pub fn register_meta(identifier: impl Into<FormatId>, metadata: Metadata) {
    default_registry().register_meta(identifier, metadata)
}

/// See [`FormatRegistry::parser`].
pub fn parser(identifier: impl Into<FormatId>, metadata: Metadata) -> ParserRegistration<'static> {
    default_registry().parser(identifier, metadata)
}

/// See [`FormatRegistry::composer`].
pub fn composer(identifier: impl Into<FormatId>, metadata: Metadata) -> ComposerRegistration<'static> {
    default_registry().composer(identifier, metadata)
}

/// See [`FormatRegistry::parse`].
pub fn parse(identifier: &str, raw: &str) -> Result<Value, FormatError> {
    default_registry().parse(identifier, raw)
}

/// See [`FormatRegistry::compose`].
pub fn compose(identifier: &str, value: &Value) -> Result<String, FormatError> {
    default_registry().compose(identifier, value)
}

/// See [`FormatRegistry::convert`].
pub fn convert(from: &str, to: &str, raw: &str) -> Result<String, FormatError> {
    default_registry().convert(from, to, raw)
}

/// See [`FormatRegistry::meta`].
pub fn meta(identifier: &str) -> Result<Metadata, FormatError> {
    default_registry().meta(identifier)
}

/// See [`FormatRegistry::discover`].
pub fn discover(exclude: impl Into<Exclude>) -> Vec<FormatId> {
    default_registry().discover(exclude)
}

/// See [`FormatRegistry::discover_with_meta`].
pub fn discover_with_meta(exclude: impl Into<Exclude>, metadata: &Metadata) -> Vec<FormatId> {
    default_registry().discover_with_meta(exclude, metadata)
}
