//! Format registry: the table from format identifier to parser/composer.
//!
//! A [`FormatRegistry`] maps a case-sensitive identifier (`"json"`,
//! `"yaml"`, `"csv"`, ...) to a [`FormatRecord`] holding an optional
//! parser, an optional composer and free-form [`Metadata`].
//!
//! ## Registration semantics
//!
//! | Operation           | parser    | composer  | metadata                    |
//! |---------------------|-----------|-----------|-----------------------------|
//! | `register`          | replaced  | replaced  | replaced                    |
//! | `register_codec`    | replaced  | replaced  | replaced                    |
//! | `register_parser`   | set       | kept      | replaced only if non-empty  |
//! | `register_composer` | kept      | set       | replaced only if non-empty  |
//! | `register_meta`     | kept      | kept      | replaced                    |
//!
//! Records are never removed.
//!
//! ## Dispatch
//!
//! `parse`/`compose` return the registered function's result untouched and
//! surface its failure as [`FormatError::Codec`]. `convert` chains the two
//! and reports any failure as [`FormatError::ConversionFailed`] naming both
//! identifiers.
//!
//! The table sits behind a `parking_lot::RwLock`. The lock is released
//! before a parser or composer runs, so registered functions may call back
//! into the registry.

mod decorate;
mod metadata;
mod record;


use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::Value;
use smol_str::SmolStr;

use crate::codecs::Codec;
use crate::discovery::{self, Exclude, KnownFormat};
use crate::error::{Capability, FormatError};
use crate::options::RegistryOptions;

pub use decorate::{ComposerRegistration, ParserRegistration};
pub use metadata::Metadata;
pub use record::{Composer, FormatCapability, FormatRecord, Parser};

/// Format identifier. Compared byte-for-byte, never normalized.
pub type FormatId = SmolStr;

/// Registry of formats.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_discovery(Exclude::none());
/// let yaml = registry.convert("json", "yaml", r#"{"a": 1}"#)?;
/// ```
#[derive(Default)]
pub struct FormatRegistry {
    formats: RwLock<FxHashMap<FormatId, FormatRecord>>,
}

impl FormatRegistry {
    // ── Construction ─────────────────────────────────────────────────

    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry and immediately discover available formats.
    pub fn with_discovery(exclude: impl Into<Exclude>) -> Self {
        let registry = Self::new();
        registry.discover(exclude);
        registry
    }

    /// Create a registry as described by `options`.
    pub fn with_options(options: &RegistryOptions) -> Self {
        let registry = Self::new();
        if options.auto_discover {
            registry.discover(options.exclude.as_slice());
        }
        registry
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register a parser and a composer, replacing any existing record.
    ///
    /// The previous parser, composer and metadata are dropped.
    pub fn register<P, PE, C, CE>(
        &self,
        identifier: impl Into<FormatId>,
        parser: P,
        composer: C,
        metadata: Metadata,
    ) where
        P: Fn(&str) -> Result<Value, PE> + Send + Sync + 'static,
        PE: std::error::Error + Send + Sync + 'static,
        C: Fn(&Value) -> Result<String, CE> + Send + Sync + 'static,
        CE: std::error::Error + Send + Sync + 'static,
    {
        let record = FormatRecord::new(
            Some(Parser::new(parser)),
            Some(Composer::new(composer)),
            metadata,
        );
        self.insert_record(identifier.into(), record);
    }

    /// Register a [`Codec`] as both parser and composer, replacing any
    /// existing record. The record's metadata is the codec's.
    pub fn register_codec<C: Codec + 'static>(&self, codec: C) {
        let identifier = FormatId::from(codec.identifier());
        let record = codec_record(Arc::new(codec));
        self.insert_record(identifier, record);
    }

    /// Register a complete record, replacing any existing one.
    pub fn insert_record(&self, identifier: FormatId, record: FormatRecord) {
        tracing::debug!(
            format = %identifier,
            parse = record.parser.is_some(),
            compose = record.composer.is_some(),
            "registering format"
        );
        self.formats.write().insert(identifier, record);
    }

    /// Set the parser for `identifier`, keeping any existing composer.
    ///
    /// Non-empty `metadata` replaces the record's metadata wholesale;
    /// empty metadata leaves it untouched.
    pub fn register_parser<F, E>(&self, identifier: impl Into<FormatId>, parser: F, metadata: Metadata)
    where
        F: Fn(&str) -> Result<Value, E> + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        tracing::debug!(format = %identifier, "registering parser");
        let mut formats = self.formats.write();
        let record = formats.entry(identifier).or_default();
        record.parser = Some(Parser::new(parser));
        if !metadata.is_empty() {
            record.metadata = metadata;
        }
    }

    /// Set the composer for `identifier`, keeping any existing parser.
    ///
    /// Metadata follows the same rule as [`register_parser`](Self::register_parser).
    pub fn register_composer<F, E>(
        &self,
        identifier: impl Into<FormatId>,
        composer: F,
        metadata: Metadata,
    ) where
        F: Fn(&Value) -> Result<String, E> + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        tracing::debug!(format = %identifier, "registering composer");
        let mut formats = self.formats.write();
        let record = formats.entry(identifier).or_default();
        record.composer = Some(Composer::new(composer));
        if !metadata.is_empty() {
            record.metadata = metadata;
        }
    }

    /// Replace the metadata of `identifier`, creating a bare record if needed.
    pub fn register_meta(&self, identifier: impl Into<FormatId>, metadata: Metadata) {
        let identifier = identifier.into();
        tracing::debug!(format = %identifier, keys = metadata.len(), "registering metadata");
        self.formats.write().entry(identifier).or_default().metadata = metadata;
    }

    /// Start a parser registration that returns the function it registers.
    pub fn parser(&self, identifier: impl Into<FormatId>, metadata: Metadata) -> ParserRegistration<'_> {
        ParserRegistration::new(self, identifier.into(), metadata)
    }

    /// Start a composer registration that returns the function it registers.
    pub fn composer(
        &self,
        identifier: impl Into<FormatId>,
        metadata: Metadata,
    ) -> ComposerRegistration<'_> {
        ComposerRegistration::new(self, identifier.into(), metadata)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Parse `raw` as `identifier`.
    ///
    /// A failure inside the parser is returned as [`FormatError::Codec`]
    /// carrying the parser's own error.
    pub fn parse(&self, identifier: &str, raw: &str) -> Result<Value, FormatError> {
        let parser = self
            .formats
            .read()
            .get(identifier)
            .and_then(|record| record.parser.clone())
            .ok_or_else(|| FormatError::not_supported(identifier, Capability::Parser))?;
        tracing::trace!(format = identifier, bytes = raw.len(), "parsing");
        Ok(parser.call(raw)?)
    }

    /// Compose `value` as `identifier`.
    pub fn compose(&self, identifier: &str, value: &Value) -> Result<String, FormatError> {
        let composer = self
            .formats
            .read()
            .get(identifier)
            .and_then(|record| record.composer.clone())
            .ok_or_else(|| FormatError::not_supported(identifier, Capability::Composer))?;
        tracing::trace!(format = identifier, "composing");
        Ok(composer.call(value)?)
    }

    /// Parse `raw` as `from` and compose the result as `to`.
    ///
    /// Every failure, including a missing parser or composer, comes back
    /// as [`FormatError::ConversionFailed`].
    pub fn convert(&self, from: &str, to: &str, raw: &str) -> Result<String, FormatError> {
        self.parse(from, raw)
            .and_then(|value| self.compose(to, &value))
            .map_err(|err| FormatError::conversion(from, to, err))
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Metadata of `identifier`; empty when none was attached.
    pub fn meta(&self, identifier: &str) -> Result<Metadata, FormatError> {
        self.formats
            .read()
            .get(identifier)
            .map(|record| record.metadata.clone())
            .ok_or_else(|| FormatError::not_supported(identifier, Capability::Record))
    }

    /// Snapshot of the record under `identifier`.
    pub fn record(&self, identifier: &str) -> Option<FormatRecord> {
        self.formats.read().get(identifier).cloned()
    }

    /// Which directions `identifier` supports, if it is registered.
    pub fn capability(&self, identifier: &str) -> Option<FormatCapability> {
        self.formats.read().get(identifier).map(FormatRecord::capability)
    }

    /// Check if a record exists for `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.formats.read().contains_key(identifier)
    }

    /// All registered identifiers (sorted).
    pub fn identifiers(&self) -> Vec<FormatId> {
        let mut names: Vec<_> = self.formats.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.formats.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.read().is_empty()
    }

    // ── Discovery ────────────────────────────────────────────────────

    /// Register every built-in format whose library is available.
    ///
    /// Formats in `exclude` and formats that already have a record are
    /// skipped. Returns the identifiers that were registered.
    pub fn discover(&self, exclude: impl Into<Exclude>) -> Vec<FormatId> {
        self.discover_from(discovery::builtin(), exclude)
    }

    /// Like [`discover`](Self::discover), attaching `metadata` to every
    /// format it registers. Caller entries win over provider entries.
    pub fn discover_with_meta(&self, exclude: impl Into<Exclude>, metadata: &Metadata) -> Vec<FormatId> {
        discovery::run(self, discovery::builtin(), &exclude.into(), metadata)
    }

    /// Like [`discover`](Self::discover), over a caller-supplied catalog.
    pub fn discover_from(&self, catalog: &[KnownFormat], exclude: impl Into<Exclude>) -> Vec<FormatId> {
        discovery::run(self, catalog, &exclude.into(), &Metadata::new())
    }

    /// Insert `record` unless `identifier` is already present.
    ///
    /// The check and the insert happen under one write lock.
    pub(crate) fn insert_if_absent(&self, identifier: FormatId, record: FormatRecord) -> bool {
        match self.formats.write().entry(identifier) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("formats", &self.identifiers())
            .finish()
    }
}

/// Build a full record whose parser and composer call into `codec`.
pub(crate) fn codec_record(codec: Arc<dyn Codec>) -> FormatRecord {
    let metadata = codec.metadata();
    let parse_codec = Arc::clone(&codec);
    let parser = Parser::from_fn(move |raw: &str| parse_codec.parse(raw));
    let composer = Composer::from_fn(move |value: &Value| codec.compose(value));
    FormatRecord::new(Some(parser), Some(composer), metadata)
}
