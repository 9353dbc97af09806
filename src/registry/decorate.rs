//! Register-and-return helpers.
//!
//! [`FormatRegistry::parser`] and [`FormatRegistry::composer`] hand out one
//! of these; calling `register` stores the function and gives it straight
//! back, so the caller keeps a directly callable handle:
//!
//! ```ignore
//! let split = registry.parser("csv", Metadata::new()).register(split_lines);
//! assert_eq!(split("a\nb")?, json!(["a", "b"]));
//! ```

use serde_json::Value;

use super::{FormatId, FormatRegistry, Metadata};

/// Pending parser registration for one identifier.
#[must_use = "nothing is registered until `register` is called"]
pub struct ParserRegistration<'r> {
    registry: &'r FormatRegistry,
    identifier: FormatId,
    metadata: Metadata,
}

impl<'r> ParserRegistration<'r> {
    pub(super) fn new(registry: &'r FormatRegistry, identifier: FormatId, metadata: Metadata) -> Self {
        Self {
            registry,
            identifier,
            metadata,
        }
    }

    /// Register `f` as the parser and return it unchanged.
    pub fn register<F, E>(self, f: F) -> F
    where
        F: Fn(&str) -> Result<Value, E> + Clone + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.registry
            .register_parser(self.identifier, f.clone(), self.metadata);
        f
    }
}

/// Pending composer registration for one identifier.
#[must_use = "nothing is registered until `register` is called"]
pub struct ComposerRegistration<'r> {
    registry: &'r FormatRegistry,
    identifier: FormatId,
    metadata: Metadata,
}

impl<'r> ComposerRegistration<'r> {
    pub(super) fn new(registry: &'r FormatRegistry, identifier: FormatId, metadata: Metadata) -> Self {
        Self {
            registry,
            identifier,
            metadata,
        }
    }

    /// Register `f` as the composer and return it unchanged.
    pub fn register<F, E>(self, f: F) -> F
    where
        F: Fn(&Value) -> Result<String, E> + Clone + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.registry
            .register_composer(self.identifier, f.clone(), self.metadata);
        f
    }
}
