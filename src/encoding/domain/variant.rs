//! The runtime value a data encoding is applied to.

use super::extension_object::ExtensionObject;
use super::ids::NodeId;
use super::qualified_name::QualifiedName;
use crate::encoding::ports::Encodeable;

/// A runtime value of one of the supported shapes.
///
/// Only the structured shapes ([`Variant::Encodeable`],
/// [`Variant::ExtensionObject`] and their arrays) can be re-encoded; every
/// other shape is rejected by the dispatcher.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::domain::Variant;
///
/// assert!(Variant::Null.is_empty());
/// assert!(Variant::Int32Array(Vec::new()).is_empty());
/// assert!(!Variant::Int32(7).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Variant {
    /// No value.
    #[default]
    Null,
    /// A boolean.
    Boolean(bool),
    /// A signed 32-bit integer.
    Int32(i32),
    /// An unsigned 32-bit integer.
    UInt32(u32),
    /// A double-precision float.
    Double(f64),
    /// A string.
    String(String),
    /// A byte string.
    ByteString(Vec<u8>),
    /// A node identifier.
    NodeId(NodeId),
    /// A qualified name.
    QualifiedName(QualifiedName),
    /// An extension object.
    ExtensionObject(ExtensionObject),
    /// A decoded encodeable structure.
    Encodeable(Box<dyn Encodeable>),
    /// An array of signed 32-bit integers.
    Int32Array(Vec<i32>),
    /// An array of strings.
    StringArray(Vec<String>),
    /// An array of extension objects.
    ExtensionObjectArray(Vec<ExtensionObject>),
    /// An array of encodeable structures; `None` marks a null element.
    EncodeableArray(Vec<Option<Box<dyn Encodeable>>>),
}

impl Variant {
    /// Returns `true` for [`Variant::Null`] and for any zero-length array.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Int32Array(values) => values.is_empty(),
            Self::StringArray(values) => values.is_empty(),
            Self::ExtensionObjectArray(values) => values.is_empty(),
            Self::EncodeableArray(values) => values.is_empty(),
            Self::Boolean(_)
            | Self::Int32(_)
            | Self::UInt32(_)
            | Self::Double(_)
            | Self::String(_)
            | Self::ByteString(_)
            | Self::NodeId(_)
            | Self::QualifiedName(_)
            | Self::ExtensionObject(_)
            | Self::Encodeable(_) => false,
        }
    }

    /// Returns the name of the value's shape, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Int32(_) => "Int32",
            Self::UInt32(_) => "UInt32",
            Self::Double(_) => "Double",
            Self::String(_) => "String",
            Self::ByteString(_) => "ByteString",
            Self::NodeId(_) => "NodeId",
            Self::QualifiedName(_) => "QualifiedName",
            Self::ExtensionObject(_) => "ExtensionObject",
            Self::Encodeable(_) => "Encodeable",
            Self::Int32Array(_) => "Int32[]",
            Self::StringArray(_) => "String[]",
            Self::ExtensionObjectArray(_) => "ExtensionObject[]",
            Self::EncodeableArray(_) => "Encodeable[]",
        }
    }
}

impl From<ExtensionObject> for Variant {
    fn from(value: ExtensionObject) -> Self {
        Self::ExtensionObject(value)
    }
}

impl From<Box<dyn Encodeable>> for Variant {
    fn from(value: Box<dyn Encodeable>) -> Self {
        Self::Encodeable(value)
    }
}

impl From<Vec<ExtensionObject>> for Variant {
    fn from(values: Vec<ExtensionObject>) -> Self {
        Self::ExtensionObjectArray(values)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
