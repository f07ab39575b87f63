//! Error and status types for data encoding.
//!
//! Uses `thiserror` for typed variants. Every failure of the dispatcher is
//! returned as an [`EncodingError`]; none escapes as a panic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::domain::NodeId;

/// Status codes reported for data encoding requests.
///
/// The numeric values follow the OPC UA status code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    /// The operation succeeded.
    Good,
    /// Encoding halted because of invalid data in the objects being serialized.
    BadEncodingError,
    /// Decoding halted because of invalid data in the stream.
    BadDecodingError,
    /// The message encoding or decoding limits were exceeded.
    BadEncodingLimitsExceeded,
    /// The requested data encoding is not supported for the value.
    BadDataEncodingUnsupported,
    /// The value supplied does not have the expected type.
    BadTypeMismatch,
}

impl StatusCode {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::Good => 0,
            Self::BadEncodingError => 0x8006_0000,
            Self::BadDecodingError => 0x8007_0000,
            Self::BadEncodingLimitsExceeded => 0x8008_0000,
            Self::BadDataEncodingUnsupported => 0x8039_0000,
            Self::BadTypeMismatch => 0x8074_0000,
        }
    }

    /// Returns `true` for [`StatusCode::Good`].
    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }

    /// Returns the symbolic name of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::BadEncodingError => "BadEncodingError",
            Self::BadDecodingError => "BadDecodingError",
            Self::BadEncodingLimitsExceeded => "BadEncodingLimitsExceeded",
            Self::BadDataEncodingUnsupported => "BadDataEncodingUnsupported",
            Self::BadTypeMismatch => "BadTypeMismatch",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:08X})", self.as_str(), self.code())
    }
}

/// Errors returned by [`crate::encoding::services::DataEncodingService`].
///
/// Callers must treat any error as "value left unmodified; do not transmit".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// The requested encoding name or namespace is not recognised, or the
    /// value cannot be matched to an encodeable shape.
    #[error("data encoding unsupported: {reason}")]
    DataEncodingUnsupported {
        /// Description of what could not be matched.
        reason: String,
    },

    /// A list element holds a body that is not a decoded encodeable, or the
    /// codec failed while converting.
    #[error("type mismatch: {reason}")]
    TypeMismatch {
        /// Diagnostic text.
        reason: String,
    },
}

impl EncodingError {
    /// Creates a [`EncodingError::DataEncodingUnsupported`] error.
    #[must_use]
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::DataEncodingUnsupported {
            reason: reason.into(),
        }
    }

    /// Creates a [`EncodingError::TypeMismatch`] error.
    #[must_use]
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::TypeMismatch {
            reason: reason.into(),
        }
    }

    /// Returns the status code reported for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::DataEncodingUnsupported { .. } => StatusCode::BadDataEncodingUnsupported,
            Self::TypeMismatch { .. } => StatusCode::BadTypeMismatch,
        }
    }
}

/// Errors raised by encoder and decoder collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The value could not be written.
    #[error("encoding failed: {0}")]
    Encoding(String),

    /// The input could not be read.
    #[error("decoding failed: {0}")]
    Decoding(String),

    /// A configured size limit was exceeded.
    #[error("{what} length {actual} exceeds limit of {limit}")]
    LimitExceeded {
        /// The kind of value that was too large.
        what: &'static str,
        /// The offending length.
        actual: usize,
        /// The configured maximum.
        limit: usize,
    },
}

impl CodecError {
    /// Creates an encoding error.
    #[must_use]
    pub fn encoding(reason: impl Into<String>) -> Self {
        Self::Encoding(reason.into())
    }

    /// Creates a decoding error.
    #[must_use]
    pub fn decoding(reason: impl Into<String>) -> Self {
        Self::Decoding(reason.into())
    }

    /// Returns the status code describing this failure.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Encoding(_) => StatusCode::BadEncodingError,
            Self::Decoding(_) => StatusCode::BadDecodingError,
            Self::LimitExceeded { .. } => StatusCode::BadEncodingLimitsExceeded,
        }
    }
}

/// Errors returned while decoding a serialized payload body through a
/// [`crate::encoding::adapters::TypeCatalog`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No constructor is registered for the encoding id.
    #[error("no type registered for encoding id {0}")]
    UnknownEncoding(NodeId),

    /// The codec failed while decoding the body.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
