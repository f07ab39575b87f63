//! Data encoding dispatcher.
//!
//! Classifies a runtime value, resolves the requested encoding and converts
//! every structured element into an [`ExtensionObject`] carrying the
//! serialized body.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::encoding::domain::{
    DataEncodingTable, EncodingSelector, ExtensionObject, NodeId, QualifiedName, ValueShape,
    Variant,
};
use crate::encoding::error::{CodecError, EncodingError, StatusCode};
use crate::encoding::ports::{Encodeable, EncodingContext};

/// Result of a successful [`DataEncodingService::apply_data_encoding`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingOutcome {
    /// The encoding name was null; the value was left unchanged.
    NoEncodingRequested,
    /// The value was null or an empty array; it was left unchanged.
    EmptyValue,
    /// The value was replaced by its encoded form.
    Encoded(EncodingSelector),
}

impl EncodingOutcome {
    /// Returns the status code reported for the outcome, always
    /// [`StatusCode::Good`].
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        StatusCode::Good
    }

    /// Returns `true` if the value was replaced.
    #[must_use]
    pub const fn is_encoded(self) -> bool {
        matches!(self, Self::Encoded(_))
    }
}

/// Applies a requested data encoding to runtime values.
///
/// The service is stateless apart from its name table and may be shared
/// across threads.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::adapters::DefaultEncodingContext;
/// use ua_dataencoding::encoding::domain::{QualifiedName, Variant};
/// use ua_dataencoding::encoding::services::{DataEncodingService, EncodingOutcome};
///
/// let service = DataEncodingService::new();
/// let context = DefaultEncodingContext::new();
/// let mut value = Variant::Int32(42);
///
/// // A null encoding name is a no-op, whatever the value.
/// let outcome = service
///     .apply_data_encoding(&context, &QualifiedName::null(), &mut value)
///     .expect("no-op should succeed");
/// assert_eq!(outcome, EncodingOutcome::NoEncodingRequested);
/// assert_eq!(value, Variant::Int32(42));
///
/// // A plain number cannot be re-encoded.
/// let result = service.apply_data_encoding(
///     &context,
///     &QualifiedName::new(0, "Default Binary"),
///     &mut value,
/// );
/// assert!(result.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataEncodingService {
    table: DataEncodingTable,
}

impl DataEncodingService {
    /// Creates a service with the default encoding names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with a custom name table.
    #[must_use]
    pub const fn with_table(table: DataEncodingTable) -> Self {
        Self { table }
    }

    /// Returns the name table.
    #[must_use]
    pub const fn table(&self) -> &DataEncodingTable {
        &self.table
    }

    /// Converts `value` into the encoding named by `encoding_name`.
    ///
    /// Encodeables and extension objects holding a decoded encodeable, alone
    /// or in arrays, are replaced by extension objects carrying the encoded
    /// body. Null elements of arrays stay null. `value` is only written when
    /// the call succeeds.
    ///
    /// # Errors
    ///
    /// - [`EncodingError::DataEncodingUnsupported`] if the name is not
    ///   recognised, is outside namespace 0, or the value has no encodeable
    ///   shape.
    /// - [`EncodingError::TypeMismatch`] if an array element holds an already
    ///   serialized body, or the codec fails.
    pub fn apply_data_encoding(
        &self,
        context: &dyn EncodingContext,
        encoding_name: &QualifiedName,
        value: &mut Variant,
    ) -> Result<EncodingOutcome, EncodingError> {
        if encoding_name.is_null() {
            return Ok(EncodingOutcome::NoEncodingRequested);
        }
        if value.is_empty() {
            return Ok(EncodingOutcome::EmptyValue);
        }

        let Some(selector) = self.table.resolve(encoding_name)? else {
            return Ok(EncodingOutcome::NoEncodingRequested);
        };
        debug!(
            encoding = %encoding_name,
            %selector,
            shape = value.type_name(),
            "applying data encoding"
        );

        let encoded = match ValueShape::classify(value) {
            // Empty values returned above; the arm keeps the match exhaustive.
            ValueShape::Empty => return Ok(EncodingOutcome::EmptyValue),
            ValueShape::EncodeableList(items) => {
                let elements: Vec<_> = items.iter().map(Option::as_deref).collect();
                Variant::ExtensionObjectArray(convert_all(context, &elements, selector)?)
            }
            ValueShape::ExtensionObjectList(items) => {
                let elements = unwrap_all(items)?;
                Variant::ExtensionObjectArray(convert_all(context, &elements, selector)?)
            }
            ValueShape::Encodeable(item) => {
                Variant::ExtensionObject(convert(context, item, selector)?)
            }
            ValueShape::ExtensionObject(item) => {
                let contained = item.encodeable().ok_or_else(|| {
                    EncodingError::unsupported(format!(
                        "extension object {} has a {} body, not a decoded encodeable",
                        item.type_id(),
                        item.body_kind()
                    ))
                })?;
                Variant::ExtensionObject(convert(context, contained, selector)?)
            }
            ValueShape::Other(shape) => {
                return Err(EncodingError::unsupported(format!(
                    "a {shape} value cannot be encoded as {selector}"
                )));
            }
        };

        *value = encoded;
        Ok(EncodingOutcome::Encoded(selector))
    }
}

/// Applies a data encoding using the default encoding names.
///
/// # Errors
///
/// See [`DataEncodingService::apply_data_encoding`].
pub fn apply_data_encoding(
    context: &dyn EncodingContext,
    encoding_name: &QualifiedName,
    value: &mut Variant,
) -> Result<EncodingOutcome, EncodingError> {
    DataEncodingService::new().apply_data_encoding(context, encoding_name, value)
}

/// Serialises one encodeable into an extension object.
///
/// The result is identified by the encoding-specific id of the source type,
/// never by its data type id.
///
/// # Errors
///
/// - [`EncodingError::DataEncodingUnsupported`] if the type has no id for
///   the selected encoding.
/// - [`EncodingError::TypeMismatch`] if the codec fails or panics.
pub fn convert(
    context: &dyn EncodingContext,
    value: &dyn Encodeable,
    selector: EncodingSelector,
) -> Result<ExtensionObject, EncodingError> {
    let type_id = encoding_id(value, selector)?;
    match selector {
        EncodingSelector::Binary => {
            let bytes = guarded(value, selector, || context.encode_binary(value))?;
            Ok(ExtensionObject::from_binary(type_id, bytes))
        }
        EncodingSelector::Xml => {
            let fragment = guarded(value, selector, || context.encode_xml(value))?;
            Ok(ExtensionObject::from_xml(type_id, fragment))
        }
    }
}

fn encoding_id(value: &dyn Encodeable, selector: EncodingSelector) -> Result<NodeId, EncodingError> {
    let id = match selector {
        EncodingSelector::Binary => value.binary_encoding_id(),
        EncodingSelector::Xml => value.xml_encoding_id(),
    };
    id.filter(|candidate| !candidate.is_null()).ok_or_else(|| {
        EncodingError::unsupported(format!(
            "type {} ({}) has no {selector} encoding",
            value.type_name(),
            value.data_type_id()
        ))
    })
}

/// Takes the decoded encodeable out of every element; null objects become
/// `None` so positions are preserved.
fn unwrap_all(items: &[ExtensionObject]) -> Result<Vec<Option<&dyn Encodeable>>, EncodingError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.is_null() {
                return Ok(None);
            }
            item.encodeable().map(Some).ok_or_else(|| {
                EncodingError::type_mismatch(format!(
                    "element {index} ({}) has a {} body, not a decoded encodeable",
                    item.type_id(),
                    item.body_kind()
                ))
            })
        })
        .collect()
}

fn convert_all(
    context: &dyn EncodingContext,
    elements: &[Option<&dyn Encodeable>],
    selector: EncodingSelector,
) -> Result<Vec<ExtensionObject>, EncodingError> {
    elements
        .iter()
        .map(|element| match element {
            Some(value) => convert(context, *value, selector),
            None => Ok(ExtensionObject::null()),
        })
        .collect()
}

/// Runs one codec call, turning codec errors and panics into
/// [`EncodingError::TypeMismatch`].
fn guarded<T>(
    value: &dyn Encodeable,
    selector: EncodingSelector,
    encode: impl FnOnce() -> Result<T, CodecError>,
) -> Result<T, EncodingError> {
    let reason = match panic::catch_unwind(AssertUnwindSafe(encode)) {
        Ok(Ok(encoded)) => return Ok(encoded),
        Ok(Err(error)) => error.to_string(),
        Err(payload) => format!("codec panicked: {}", panic_message(&*payload)),
    };
    warn!(
        type_name = value.type_name(),
        %selector,
        %reason,
        "codec failed while applying data encoding"
    );
    Err(EncodingError::type_mismatch(format!(
        "could not encode {} as {selector}: {reason}",
        value.type_name()
    )))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic payload")
}
