//! Encodeable port: the capability every structured value implements.

use std::any::Any;
use std::fmt;

use super::codec::{CodecResult, Decoder, Encoder};
use crate::encoding::domain::NodeId;

/// A self-describing value that can serialise itself through an [`Encoder`]
/// and restore itself from a [`Decoder`].
///
/// Each encodeable type is known by up to three identifiers: the abstract
/// data type id, plus one id per wire encoding it supports. Receivers pick a
/// decoder by the encoding-specific id, so a payload produced from this value
/// always carries [`Encodeable::binary_encoding_id`] or
/// [`Encodeable::xml_encoding_id`], never [`Encodeable::data_type_id`].
///
/// # Implementation Notes
///
/// - `encode` and `decode` must be symmetric.
/// - `clone_box` must return an independent deep copy.
/// - `is_equal` compares values, not identity.
pub trait Encodeable: fmt::Debug + Send + Sync + 'static {
    /// Returns the abstract data type identifier. Never null.
    fn data_type_id(&self) -> NodeId;

    /// Returns the identifier of the binary encoding, if the type has one.
    fn binary_encoding_id(&self) -> Option<NodeId>;

    /// Returns the identifier of the XML encoding, if the type has one.
    fn xml_encoding_id(&self) -> Option<NodeId>;

    /// Returns the type name used as the root element of XML bodies.
    fn type_name(&self) -> &'static str;

    /// Writes every field through `encoder`.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error if a field cannot be written.
    fn encode(&self, encoder: &mut dyn Encoder) -> CodecResult<()>;

    /// Reads every field from `decoder`, replacing the current state.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if a field cannot be read.
    fn decode(&mut self, decoder: &mut dyn Decoder) -> CodecResult<()>;

    /// Returns `true` if `other` is the same type with equal field values.
    fn is_equal(&self, other: &dyn Encodeable) -> bool;

    /// Returns a deep copy of this value.
    fn clone_box(&self) -> Box<dyn Encodeable>;

    /// Returns `self` as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Encodeable> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for dyn Encodeable {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}
