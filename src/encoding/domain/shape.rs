//! Classification of runtime values into the shapes the dispatcher handles.

use super::extension_object::ExtensionObject;
use super::variant::Variant;
use crate::encoding::ports::Encodeable;

/// The shape of a [`Variant`], as seen by the dispatcher.
///
/// Produced once per request by [`ValueShape::classify`] and then matched
/// exhaustively, so the order in which shapes are tried is explicit.
#[derive(Debug, Clone, Copy)]
pub enum ValueShape<'a> {
    /// Null, or an array with no elements.
    Empty,
    /// An array of encodeables; `None` entries are null placeholders.
    EncodeableList(&'a [Option<Box<dyn Encodeable>>]),
    /// An array of extension objects.
    ExtensionObjectList(&'a [ExtensionObject]),
    /// A single encodeable.
    Encodeable(&'a dyn Encodeable),
    /// A single extension object.
    ExtensionObject(&'a ExtensionObject),
    /// Any other value; carries the shape name for diagnostics.
    Other(&'static str),
}

impl<'a> ValueShape<'a> {
    /// Classifies `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ua_dataencoding::encoding::domain::{ValueShape, Variant};
    ///
    /// assert!(matches!(ValueShape::classify(&Variant::Null), ValueShape::Empty));
    /// assert!(matches!(
    ///     ValueShape::classify(&Variant::Int32(3)),
    ///     ValueShape::Other("Int32")
    /// ));
    /// ```
    #[must_use]
    pub fn classify(value: &'a Variant) -> Self {
        if value.is_empty() {
            return Self::Empty;
        }
        match value {
            Variant::EncodeableArray(items) => Self::EncodeableList(items),
            Variant::ExtensionObjectArray(items) => Self::ExtensionObjectList(items),
            Variant::Encodeable(item) => Self::Encodeable(item.as_ref()),
            Variant::ExtensionObject(item) => Self::ExtensionObject(item),
            other => Self::Other(other.type_name()),
        }
    }
}
