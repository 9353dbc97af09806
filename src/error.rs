//! Error types for registry operations.

use std::fmt;

use thiserror::Error;

use crate::registry::FormatId;

/// Boxed error returned by a parser or composer.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The capability a lookup expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// A parser (raw text → structured value).
    Parser,
    /// A composer (structured value → raw text).
    Composer,
    /// Any record at all.
    Record,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::Parser => "parser",
            Capability::Composer => "composer",
            Capability::Record => "record",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by a [`FormatRegistry`](crate::FormatRegistry).
#[derive(Debug, Error)]
pub enum FormatError {
    /// The identifier has no record, or its record lacks the requested function.
    #[error("no {capability} registered for format '{identifier}'")]
    NotSupported {
        identifier: FormatId,
        capability: Capability,
    },

    /// A registered parser or composer failed.
    ///
    /// Only direct `parse`/`compose` calls produce this; the codec's own
    /// error is carried as-is and can be recovered with
    /// [`CodecError::downcast_ref`].
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A `convert` call failed in either its parse or its compose step.
    #[error("failed to convert '{from}' to '{to}': {kind}: {message}")]
    ConversionFailed {
        from: FormatId,
        to: FormatId,
        /// Kind name of the underlying error.
        kind: String,
        /// Display text of the underlying error.
        message: String,
        #[source]
        source: Box<FormatError>,
    },
}

impl FormatError {
    /// Create a not-supported error.
    pub fn not_supported(identifier: impl Into<FormatId>, capability: Capability) -> Self {
        Self::NotSupported {
            identifier: identifier.into(),
            capability,
        }
    }

    /// Wrap `err` as the failure of converting `from` into `to`.
    pub fn conversion(from: impl Into<FormatId>, to: impl Into<FormatId>, err: FormatError) -> Self {
        Self::ConversionFailed {
            from: from.into(),
            to: to.into(),
            kind: err.kind().to_string(),
            message: err.to_string(),
            source: Box::new(err),
        }
    }

    /// Kind name of this error.
    ///
    /// For codec failures this is the Rust type name of the error the
    /// parser or composer returned.
    pub fn kind(&self) -> &str {
        match self {
            FormatError::NotSupported { .. } => "NotSupported",
            FormatError::Codec(err) => err.kind(),
            FormatError::ConversionFailed { .. } => "ConversionFailed",
        }
    }

    /// Whether this is a [`FormatError::NotSupported`].
    pub fn is_not_supported(&self) -> bool {
        matches!(self, FormatError::NotSupported { .. })
    }
}

/// Failure raised inside a parser or composer.
///
/// Records the concrete error type's name when the codec is registered,
/// so the failure stays attributable after the error is erased.
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct CodecError {
    kind: &'static str,
    #[source]
    inner: BoxError,
}

impl CodecError {
    /// Wrap a concrete error, remembering its type name.
    ///
    /// A `CodecError` passed in is returned as-is, so functions that
    /// already report `CodecError` (such as [`Codec`](crate::Codec)
    /// methods) keep the underlying error and its kind.
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let boxed: BoxError = Box::new(err);
        match boxed.downcast::<CodecError>() {
            Ok(codec) => *codec,
            Err(inner) => Self {
                kind: std::any::type_name::<E>(),
                inner,
            },
        }
    }

    /// Kind name of the wrapped error.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Borrow the wrapped error.
    pub fn get_ref(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Downcast the wrapped error to its concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Whether the wrapped error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: std::error::Error + 'static,
    {
        self.inner.is::<E>()
    }

    /// Consume and return the wrapped error.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("bad row {0}")]
    struct RowError(usize);

    #[test]
    fn test_not_supported_names_identifier_and_capability() {
        let err = FormatError::not_supported("xml", Capability::Composer);
        let message = err.to_string();
        assert!(message.contains("xml"));
        assert!(message.contains("composer"));
        assert_eq!(err.kind(), "NotSupported");
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let err = FormatError::from(CodecError::new(RowError(3)));
        assert_eq!(err.to_string(), "bad row 3");
        match &err {
            FormatError::Codec(codec) => {
                assert!(codec.is::<RowError>());
                assert_eq!(codec.downcast_ref::<RowError>().map(|e| e.0), Some(3));
            }
            other => panic!("Expected Codec error, got {other:?}"),
        }
    }

    #[test]
    fn test_codec_error_kind_is_type_name() {
        let err = CodecError::new(RowError(1));
        assert!(err.kind().ends_with("RowError"));
    }

    #[test]
    fn test_codec_error_is_not_wrapped_twice() {
        let err = CodecError::new(CodecError::new(RowError(2)));
        assert!(err.kind().ends_with("RowError"));
        assert!(err.is::<RowError>());
        assert_eq!(err.get_ref().to_string(), "bad row 2");

        let inner = err.into_inner();
        assert_eq!(inner.downcast_ref::<RowError>().map(|e| e.0), Some(2));
    }

    #[test]
    fn test_conversion_carries_kind_and_message() {
        let inner = FormatError::from(CodecError::new(RowError(7)));
        let err = FormatError::conversion("csv", "json", inner);
        match &err {
            FormatError::ConversionFailed {
                from,
                to,
                kind,
                message,
                source,
            } => {
                assert_eq!(from, "csv");
                assert_eq!(to, "json");
                assert!(kind.ends_with("RowError"));
                assert_eq!(message, "bad row 7");
                assert!(matches!(**source, FormatError::Codec(_)));
            }
            other => panic!("Expected ConversionFailed, got {other:?}"),
        }
        assert_eq!(err.kind(), "ConversionFailed");
        assert!(err.to_string().contains("'csv' to 'json'"));
    }

    #[test]
    fn test_conversion_of_not_supported() {
        let inner = FormatError::not_supported("yaml", Capability::Parser);
        let err = FormatError::conversion("yaml", "json", inner);
        assert!(err.to_string().contains("NotSupported"));
        assert!(err.to_string().contains("no parser registered for format 'yaml'"));
    }
}
