//! Reference binary codec.
//!
//! Primitives are little-endian. Strings and byte strings carry an `i32`
//! length prefix where `-1` denotes null. Node identifiers use the compact
//! two-byte and four-byte forms when the value allows it.

use uuid::Uuid;

use crate::encoding::domain::{Identifier, NodeId, QualifiedName};
use crate::encoding::error::CodecError;
use crate::encoding::ports::{CodecResult, Decoder, Encodeable, Encoder, EncodingLimits};

const NODE_ID_TWO_BYTE: u8 = 0x00;
const NODE_ID_FOUR_BYTE: u8 = 0x01;
const NODE_ID_NUMERIC: u8 = 0x02;
const NODE_ID_STRING: u8 = 0x03;
const NODE_ID_GUID: u8 = 0x04;
const NODE_ID_OPAQUE: u8 = 0x05;

/// Writes encodeable fields into a byte buffer.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::adapters::BinaryEncoder;
/// use ua_dataencoding::encoding::ports::{Encoder, EncodingLimits};
///
/// let mut encoder = BinaryEncoder::new(EncodingLimits::default());
/// encoder.write_int32("Value", 1).expect("write should succeed");
/// assert_eq!(encoder.into_bytes(), vec![1, 0, 0, 0]);
/// ```
#[derive(Debug)]
pub struct BinaryEncoder {
    buffer: Vec<u8>,
    limits: EncodingLimits,
    depth: usize,
}

impl BinaryEncoder {
    /// Creates an encoder with an empty buffer.
    #[must_use]
    pub const fn new(limits: EncodingLimits) -> Self {
        Self {
            buffer: Vec::new(),
            limits,
            depth: 0,
        }
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Encodes a whole structure and returns its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if any field cannot be encoded.
    pub fn encode(value: &dyn Encodeable, limits: &EncodingLimits) -> CodecResult<Vec<u8>> {
        let mut encoder = Self::new(limits.clone());
        value.encode(&mut encoder)?;
        Ok(encoder.into_bytes())
    }

    fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn write_u16(&mut self, value: u16) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    fn write_length_prefixed(&mut self, bytes: &[u8]) -> CodecResult<()> {
        let length = i32::try_from(bytes.len())
            .map_err(|_| CodecError::encoding("length does not fit in an i32 prefix"))?;
        self.write_i32(length);
        self.buffer.extend_from_slice(bytes);
        Ok(())
    }
}

impl Encoder for BinaryEncoder {
    fn write_boolean(&mut self, _field: &str, value: bool) -> CodecResult<()> {
        self.write_u8(u8::from(value));
        Ok(())
    }

    fn write_int32(&mut self, _field: &str, value: i32) -> CodecResult<()> {
        self.write_i32(value);
        Ok(())
    }

    fn write_uint32(&mut self, _field: &str, value: u32) -> CodecResult<()> {
        self.write_u32(value);
        Ok(())
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn write_double(&mut self, _field: &str, value: f64) -> CodecResult<()> {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_string(&mut self, _field: &str, value: &str) -> CodecResult<()> {
        self.limits.check_string(value.len())?;
        self.write_length_prefixed(value.as_bytes())
    }

    fn write_byte_string(&mut self, _field: &str, value: &[u8]) -> CodecResult<()> {
        self.limits.check_byte_string(value.len())?;
        self.write_length_prefixed(value)
    }

    fn write_node_id(&mut self, field: &str, value: &NodeId) -> CodecResult<()> {
        let namespace = value.namespace_index;
        match &value.identifier {
            Identifier::Numeric(id) => {
                if let (0, Ok(short)) = (namespace, u8::try_from(*id)) {
                    self.write_u8(NODE_ID_TWO_BYTE);
                    self.write_u8(short);
                } else if let (Ok(ns), Ok(short)) = (u8::try_from(namespace), u16::try_from(*id)) {
                    self.write_u8(NODE_ID_FOUR_BYTE);
                    self.write_u8(ns);
                    self.write_u16(short);
                } else {
                    self.write_u8(NODE_ID_NUMERIC);
                    self.write_u16(namespace);
                    self.write_u32(*id);
                }
                Ok(())
            }
            Identifier::String(id) => {
                self.write_u8(NODE_ID_STRING);
                self.write_u16(namespace);
                self.write_string(field, id)
            }
            Identifier::Guid(id) => {
                self.write_u8(NODE_ID_GUID);
                self.write_u16(namespace);
                self.buffer.extend_from_slice(&id.to_bytes_le());
                Ok(())
            }
            Identifier::Opaque(id) => {
                self.write_u8(NODE_ID_OPAQUE);
                self.write_u16(namespace);
                self.write_byte_string(field, id)
            }
        }
    }

    fn write_qualified_name(&mut self, field: &str, value: &QualifiedName) -> CodecResult<()> {
        self.write_u16(value.namespace_index);
        self.write_string(field, &value.name)
    }

    fn write_encodeable(&mut self, _field: &str, value: &dyn Encodeable) -> CodecResult<()> {
        let depth = self.depth.saturating_add(1);
        self.limits.check_depth(depth)?;
        self.depth = depth;
        let result = value.encode(self);
        self.depth = self.depth.saturating_sub(1);
        result
    }
}

/// Reads encodeable fields from a byte slice.
#[derive(Debug)]
pub struct BinaryDecoder<'a> {
    input: &'a [u8],
    position: usize,
    limits: EncodingLimits,
    depth: usize,
}

impl<'a> BinaryDecoder<'a> {
    /// Creates a decoder over `input`.
    #[must_use]
    pub const fn new(input: &'a [u8], limits: EncodingLimits) -> Self {
        Self {
            input,
            position: 0,
            limits,
            depth: 0,
        }
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.position)
    }

    /// Decodes a whole structure from `input` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the input is malformed or has trailing bytes.
    pub fn decode(
        input: &'a [u8],
        target: &mut dyn Encodeable,
        limits: &EncodingLimits,
    ) -> CodecResult<()> {
        let mut decoder = Self::new(input, limits.clone());
        target.decode(&mut decoder)?;
        match decoder.remaining() {
            0 => Ok(()),
            extra => Err(CodecError::decoding(format!(
                "{extra} trailing bytes after structure"
            ))),
        }
    }

    fn take(&mut self, count: usize) -> CodecResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(count)
            .ok_or_else(|| CodecError::decoding("length overflow"))?;
        let bytes = self.input.get(self.position..end).ok_or_else(|| {
            CodecError::decoding(format!(
                "unexpected end of input: needed {count} bytes, {} left",
                self.remaining()
            ))
        })?;
        self.position = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> CodecResult<[u8; N]> {
        let bytes = self.take(N)?;
        <[u8; N]>::try_from(bytes).map_err(|_| CodecError::decoding("short read"))
    }

    fn read_u8(&mut self) -> CodecResult<u8> {
        let [byte] = self.take_array::<1>()?;
        Ok(byte)
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn read_u16(&mut self) -> CodecResult<u16> {
        Ok(u16::from_le_bytes(self.take_array()?))
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn read_u32(&mut self) -> CodecResult<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn read_i32(&mut self) -> CodecResult<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    /// Reads a length-prefixed block; a negative length reads as empty.
    fn read_length_prefixed(&mut self, limit: usize, what: &'static str) -> CodecResult<&'a [u8]> {
        let Ok(length) = usize::try_from(self.read_i32()?) else {
            return Ok(&[]);
        };
        if length > limit {
            return Err(CodecError::LimitExceeded {
                what,
                actual: length,
                limit,
            });
        }
        self.take(length)
    }
}

impl Decoder for BinaryDecoder<'_> {
    fn read_boolean(&mut self, _field: &str) -> CodecResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    fn read_int32(&mut self, _field: &str) -> CodecResult<i32> {
        self.read_i32()
    }

    fn read_uint32(&mut self, _field: &str) -> CodecResult<u32> {
        self.read_u32()
    }

    #[expect(
        clippy::little_endian_bytes,
        reason = "the binary encoding is little-endian on the wire"
    )]
    fn read_double(&mut self, _field: &str) -> CodecResult<f64> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    fn read_string(&mut self, _field: &str) -> CodecResult<String> {
        let bytes = self.read_length_prefixed(self.limits.max_string_length, "string")?;
        String::from_utf8(bytes.to_vec())
            .map_err(|error| CodecError::decoding(format!("invalid UTF-8 string: {error}")))
    }

    fn read_byte_string(&mut self, _field: &str) -> CodecResult<Vec<u8>> {
        let bytes =
            self.read_length_prefixed(self.limits.max_byte_string_length, "byte string")?;
        Ok(bytes.to_vec())
    }

    fn read_node_id(&mut self, field: &str) -> CodecResult<NodeId> {
        match self.read_u8()? {
            NODE_ID_TWO_BYTE => Ok(NodeId::numeric(0, u32::from(self.read_u8()?))),
            NODE_ID_FOUR_BYTE => {
                let namespace = u16::from(self.read_u8()?);
                Ok(NodeId::numeric(namespace, u32::from(self.read_u16()?)))
            }
            NODE_ID_NUMERIC => {
                let namespace = self.read_u16()?;
                Ok(NodeId::numeric(namespace, self.read_u32()?))
            }
            NODE_ID_STRING => {
                let namespace = self.read_u16()?;
                Ok(NodeId::string(namespace, self.read_string(field)?))
            }
            NODE_ID_GUID => {
                let namespace = self.read_u16()?;
                Ok(NodeId::guid(namespace, Uuid::from_bytes_le(self.take_array()?)))
            }
            NODE_ID_OPAQUE => {
                let namespace = self.read_u16()?;
                Ok(NodeId::opaque(namespace, self.read_byte_string(field)?))
            }
            other => Err(CodecError::decoding(format!(
                "unknown node id encoding byte 0x{other:02x}"
            ))),
        }
    }

    fn read_qualified_name(&mut self, field: &str) -> CodecResult<QualifiedName> {
        let namespace = self.read_u16()?;
        Ok(QualifiedName::new(namespace, self.read_string(field)?))
    }

    fn read_encodeable(&mut self, _field: &str, target: &mut dyn Encodeable) -> CodecResult<()> {
        let depth = self.depth.saturating_add(1);
        self.limits.check_depth(depth)?;
        self.depth = depth;
        let result = target.decode(self);
        self.depth = self.depth.saturating_sub(1);
        result
    }
}
