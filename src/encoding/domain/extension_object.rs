//! Extension objects: transport wrappers for encodeable values.
//!
//! An [`ExtensionObject`] pairs a type identifier with either a decoded
//! [`Encodeable`] or an opaque serialized body. It is how a structured value
//! travels when the receiver does not statically know its concrete type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NodeId;
use super::xml::XmlElement;
use crate::encoding::ports::Encodeable;

/// Which kind of body an [`ExtensionObject`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// No body; the object represents "no value".
    None,
    /// A decoded encodeable instance.
    Encodeable,
    /// A binary-encoded byte sequence.
    Binary,
    /// An XML-encoded fragment.
    Xml,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Encodeable => "encodeable",
            Self::Binary => "binary",
            Self::Xml => "xml",
        })
    }
}

/// The body of an [`ExtensionObject`].
///
/// The wrapper owns its body exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionObjectBody {
    /// No body.
    None,
    /// A decoded encodeable instance.
    Encodeable(Box<dyn Encodeable>),
    /// A binary-encoded byte sequence.
    Binary(Vec<u8>),
    /// An XML-encoded fragment.
    Xml(XmlElement),
}

impl ExtensionObjectBody {
    /// Returns the kind of this body.
    #[must_use]
    pub const fn kind(&self) -> BodyKind {
        match self {
            Self::None => BodyKind::None,
            Self::Encodeable(_) => BodyKind::Encodeable,
            Self::Binary(_) => BodyKind::Binary,
            Self::Xml(_) => BodyKind::Xml,
        }
    }
}

/// A type identifier paired with an encodeable or serialized body.
///
/// The body kind is derived from the body itself, so "kind is `None`" and
/// "body is absent" can never disagree.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::domain::{BodyKind, ExtensionObject, NodeId};
///
/// let null = ExtensionObject::null();
/// assert!(null.is_null());
///
/// let binary = ExtensionObject::from_binary(NodeId::numeric(0, 886), vec![1, 2, 3]);
/// assert_eq!(binary.body_kind(), BodyKind::Binary);
/// assert!(binary.encodeable().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionObject {
    type_id: NodeId,
    body: ExtensionObjectBody,
}

impl ExtensionObject {
    /// Creates an extension object from a type identifier and body.
    #[must_use]
    pub const fn new(type_id: NodeId, body: ExtensionObjectBody) -> Self {
        Self { type_id, body }
    }

    /// Creates the null extension object (null type id, no body).
    #[must_use]
    pub const fn null() -> Self {
        Self::new(NodeId::null(), ExtensionObjectBody::None)
    }

    /// Wraps a decoded encodeable, identified by its data type id.
    #[must_use]
    pub fn from_encodeable(value: Box<dyn Encodeable>) -> Self {
        Self::new(value.data_type_id(), ExtensionObjectBody::Encodeable(value))
    }

    /// Creates an extension object with a binary body.
    #[must_use]
    pub const fn from_binary(type_id: NodeId, bytes: Vec<u8>) -> Self {
        Self::new(type_id, ExtensionObjectBody::Binary(bytes))
    }

    /// Creates an extension object with an XML body.
    #[must_use]
    pub const fn from_xml(type_id: NodeId, fragment: XmlElement) -> Self {
        Self::new(type_id, ExtensionObjectBody::Xml(fragment))
    }

    /// Returns the type identifier.
    #[must_use]
    pub const fn type_id(&self) -> &NodeId {
        &self.type_id
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &ExtensionObjectBody {
        &self.body
    }

    /// Returns the kind of the body.
    #[must_use]
    pub const fn body_kind(&self) -> BodyKind {
        self.body.kind()
    }

    /// Returns `true` if the object carries no body.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.body, ExtensionObjectBody::None)
    }

    /// Returns the contained encodeable if the body is decoded.
    #[must_use]
    pub fn encodeable(&self) -> Option<&dyn Encodeable> {
        match &self.body {
            ExtensionObjectBody::Encodeable(value) => Some(value.as_ref()),
            ExtensionObjectBody::None
            | ExtensionObjectBody::Binary(_)
            | ExtensionObjectBody::Xml(_) => None,
        }
    }

    /// Returns the binary body, if any.
    #[must_use]
    pub fn binary(&self) -> Option<&[u8]> {
        match &self.body {
            ExtensionObjectBody::Binary(bytes) => Some(bytes.as_slice()),
            ExtensionObjectBody::None
            | ExtensionObjectBody::Encodeable(_)
            | ExtensionObjectBody::Xml(_) => None,
        }
    }

    /// Returns the XML body, if any.
    #[must_use]
    pub const fn xml(&self) -> Option<&XmlElement> {
        match &self.body {
            ExtensionObjectBody::Xml(fragment) => Some(fragment),
            ExtensionObjectBody::None
            | ExtensionObjectBody::Encodeable(_)
            | ExtensionObjectBody::Binary(_) => None,
        }
    }

    /// Consumes the object and returns the contained encodeable, if decoded.
    #[must_use]
    pub fn into_encodeable(self) -> Option<Box<dyn Encodeable>> {
        match self.body {
            ExtensionObjectBody::Encodeable(value) => Some(value),
            ExtensionObjectBody::None
            | ExtensionObjectBody::Binary(_)
            | ExtensionObjectBody::Xml(_) => None,
        }
    }

    /// Splits the object into its type identifier and body.
    #[must_use]
    pub fn into_parts(self) -> (NodeId, ExtensionObjectBody) {
        (self.type_id, self.body)
    }
}

impl Default for ExtensionObject {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Box<dyn Encodeable>> for ExtensionObject {
    fn from(value: Box<dyn Encodeable>) -> Self {
        Self::from_encodeable(value)
    }
}
