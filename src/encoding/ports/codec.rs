//! Codec ports: field-level encoder/decoder traits and the encoding context.
//!
//! The concrete wire formats live behind these traits. The dispatcher only
//! ever talks to an [`EncodingContext`].

use super::encodeable::Encodeable;
use crate::encoding::domain::{NodeId, QualifiedName, XmlElement};
use crate::encoding::error::CodecError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Field-level writer used by [`Encodeable::encode`].
///
/// `field` names the structure field being written. Binary encoders ignore
/// it; XML encoders use it as the element name.
pub trait Encoder {
    /// Writes a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_boolean(&mut self, field: &str, value: bool) -> CodecResult<()>;

    /// Writes a signed 32-bit integer field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_int32(&mut self, field: &str, value: i32) -> CodecResult<()>;

    /// Writes an unsigned 32-bit integer field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_uint32(&mut self, field: &str, value: u32) -> CodecResult<()>;

    /// Writes a double-precision field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_double(&mut self, field: &str, value: f64) -> CodecResult<()>;

    /// Writes a string field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitExceeded`] if the string is too long.
    fn write_string(&mut self, field: &str, value: &str) -> CodecResult<()>;

    /// Writes a byte string field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitExceeded`] if the byte string is too long.
    fn write_byte_string(&mut self, field: &str, value: &[u8]) -> CodecResult<()>;

    /// Writes a node identifier field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_node_id(&mut self, field: &str, value: &NodeId) -> CodecResult<()>;

    /// Writes a qualified name field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the value cannot be written.
    fn write_qualified_name(&mut self, field: &str, value: &QualifiedName) -> CodecResult<()>;

    /// Writes a nested encodeable structure.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the structure or any of its fields cannot be
    /// written, or the nesting limit is exceeded.
    fn write_encodeable(&mut self, field: &str, value: &dyn Encodeable) -> CodecResult<()>;
}

/// Field-level reader used by [`Encodeable::decode`].
pub trait Decoder {
    /// Reads a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_boolean(&mut self, field: &str) -> CodecResult<bool>;

    /// Reads a signed 32-bit integer field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_int32(&mut self, field: &str) -> CodecResult<i32>;

    /// Reads an unsigned 32-bit integer field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_uint32(&mut self, field: &str) -> CodecResult<u32>;

    /// Reads a double-precision field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_double(&mut self, field: &str) -> CodecResult<f64>;

    /// Reads a string field. A null string reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated, malformed or too long.
    fn read_string(&mut self, field: &str) -> CodecResult<String>;

    /// Reads a byte string field. A null byte string reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated, malformed or too long.
    fn read_byte_string(&mut self, field: &str) -> CodecResult<Vec<u8>>;

    /// Reads a node identifier field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_node_id(&mut self, field: &str) -> CodecResult<NodeId>;

    /// Reads a qualified name field.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is truncated or malformed.
    fn read_qualified_name(&mut self, field: &str) -> CodecResult<QualifiedName>;

    /// Reads a nested encodeable structure into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the structure cannot be read or the nesting
    /// limit is exceeded.
    fn read_encodeable(&mut self, field: &str, target: &mut dyn Encodeable) -> CodecResult<()>;
}

/// Shared encoding configuration and whole-value codec entry points.
///
/// This is the collaborator the dispatcher serialises through. Implementations
/// own whatever namespace tables and limits their concrete codecs need.
#[cfg_attr(test, mockall::automock)]
pub trait EncodingContext: Send + Sync {
    /// Serialises `value` with the binary encoding.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if any field cannot be encoded.
    fn encode_binary(&self, value: &dyn Encodeable) -> CodecResult<Vec<u8>>;

    /// Serialises `value` with the XML encoding.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if any field cannot be encoded.
    fn encode_xml(&self, value: &dyn Encodeable) -> CodecResult<XmlElement>;
}

/// Size limits enforced by the reference codecs.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::ports::EncodingLimits;
///
/// let limits = EncodingLimits::default();
/// assert_eq!(limits.max_nesting_depth, 100);
///
/// let strict = EncodingLimits::strict();
/// assert!(strict.max_string_length < limits.max_string_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingLimits {
    /// Maximum string length in bytes.
    pub max_string_length: usize,
    /// Maximum byte string length in bytes.
    pub max_byte_string_length: usize,
    /// Maximum depth of nested structures.
    pub max_nesting_depth: usize,
}

impl Default for EncodingLimits {
    fn default() -> Self {
        Self {
            max_string_length: 4 * 1024 * 1024, // 4 MiB
            max_byte_string_length: 16 * 1024 * 1024,
            max_nesting_depth: 100,
        }
    }
}

impl EncodingLimits {
    /// Creates a strict configuration with reduced limits.
    ///
    /// Useful for resource-constrained environments.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_string_length: 64 * 1024,
            max_byte_string_length: 256 * 1024,
            max_nesting_depth: 16,
        }
    }

    /// Creates a configuration with no practical limits.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_string_length: usize::MAX,
            max_byte_string_length: usize::MAX,
            max_nesting_depth: usize::MAX,
        }
    }

    /// Checks a string length against the limit.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitExceeded`] if `length` is too large.
    pub const fn check_string(&self, length: usize) -> CodecResult<()> {
        check("string", length, self.max_string_length)
    }

    /// Checks a byte string length against the limit.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitExceeded`] if `length` is too large.
    pub const fn check_byte_string(&self, length: usize) -> CodecResult<()> {
        check("byte string", length, self.max_byte_string_length)
    }

    /// Checks a nesting depth against the limit.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::LimitExceeded`] if `depth` is too large.
    pub const fn check_depth(&self, depth: usize) -> CodecResult<()> {
        check("nesting depth", depth, self.max_nesting_depth)
    }
}

const fn check(what: &'static str, actual: usize, limit: usize) -> CodecResult<()> {
    if actual > limit {
        Err(CodecError::LimitExceeded {
            what,
            actual,
            limit,
        })
    } else {
        Ok(())
    }
}
