//! Per-format entries stored in the registry.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::Metadata;
use crate::error::CodecError;

/// Function turning raw text into a structured value.
#[derive(Clone)]
pub struct Parser(Arc<dyn Fn(&str) -> Result<Value, CodecError> + Send + Sync>);

impl Parser {
    /// Wrap a parsing function. Its error type is erased into [`CodecError`].
    pub fn new<F, E>(f: F) -> Self
    where
        F: Fn(&str) -> Result<Value, E> + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Arc::new(move |raw: &str| f(raw).map_err(CodecError::new)))
    }

    /// Wrap a function that already reports [`CodecError`].
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<Value, CodecError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, raw: &str) -> Result<Value, CodecError> {
        (self.0)(raw)
    }

    /// Whether both handles point at the same registered function.
    pub fn ptr_eq(&self, other: &Parser) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Parser(..)")
    }
}

/// Function turning a structured value into raw text.
#[derive(Clone)]
pub struct Composer(Arc<dyn Fn(&Value) -> Result<String, CodecError> + Send + Sync>);

impl Composer {
    /// Wrap a composing function. Its error type is erased into [`CodecError`].
    pub fn new<F, E>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<String, E> + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Arc::new(move |value: &Value| f(value).map_err(CodecError::new)))
    }

    /// Wrap a function that already reports [`CodecError`].
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<String, CodecError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: &Value) -> Result<String, CodecError> {
        (self.0)(value)
    }

    /// Whether both handles point at the same registered function.
    pub fn ptr_eq(&self, other: &Composer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Composer(..)")
    }
}

/// Which directions a registered format supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCapability {
    /// Has a parser.
    pub parse: bool,
    /// Has a composer.
    pub compose: bool,
}

impl FormatCapability {
    /// Parser and composer.
    pub const FULL: Self = Self {
        parse: true,
        compose: true,
    };

    pub const PARSE_ONLY: Self = Self {
        parse: true,
        compose: false,
    };

    pub const COMPOSE_ONLY: Self = Self {
        parse: false,
        compose: true,
    };

    /// Metadata only.
    pub const NONE: Self = Self {
        parse: false,
        compose: false,
    };
}

/// Everything registered under one format identifier.
///
/// Any combination of fields may be present: a parser-only format
/// cannot produce text, a composer-only one cannot read it, and a record
/// may briefly hold only metadata.
#[derive(Clone, Debug, Default)]
pub struct FormatRecord {
    pub parser: Option<Parser>,
    pub composer: Option<Composer>,
    pub metadata: Metadata,
}

impl FormatRecord {
    pub fn new(parser: Option<Parser>, composer: Option<Composer>, metadata: Metadata) -> Self {
        Self {
            parser,
            composer,
            metadata,
        }
    }

    pub fn capability(&self) -> FormatCapability {
        FormatCapability {
            parse: self.parser.is_some(),
            compose: self.composer.is_some(),
        }
    }
}
