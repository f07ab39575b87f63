//! In-memory catalog mapping type identifiers to encodeable constructors.

use std::collections::HashMap;

use super::binary::BinaryDecoder;
use super::xml::XmlDecoder;
use crate::encoding::domain::{ExtensionObject, ExtensionObjectBody, NodeId};
use crate::encoding::error::CatalogError;
use crate::encoding::ports::{Encodeable, EncodingLimits};

/// Constructs an empty instance of an encodeable type.
pub type EncodeableFactory = fn() -> Box<dyn Encodeable>;

/// Registry of encodeable types keyed by their identifiers.
///
/// A type is reachable by its data type id and by each of its encoding ids,
/// so a serialized body can be decoded from the id it was wrapped with.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    factories: HashMap<NodeId, EncodeableFactory>,
}

impl TypeCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type under every identifier its instances report.
    pub fn register(&mut self, factory: EncodeableFactory) {
        let prototype = factory();
        let ids = [
            Some(prototype.data_type_id()),
            prototype.binary_encoding_id(),
            prototype.xml_encoding_id(),
        ];
        for id in ids.into_iter().flatten() {
            self.factories.insert(id, factory);
        }
    }

    /// Registers a type and returns the catalog, for chained construction.
    #[must_use]
    pub fn with_type(mut self, factory: EncodeableFactory) -> Self {
        self.register(factory);
        self
    }

    /// Returns `true` if a type is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.factories.contains_key(id)
    }

    /// Creates an empty instance of the type registered under `id`.
    #[must_use]
    pub fn create(&self, id: &NodeId) -> Option<Box<dyn Encodeable>> {
        self.factories.get(id).map(|factory| factory())
    }

    /// Decodes the serialized body of `object` into an encodeable.
    ///
    /// Objects that are null or already decoded are returned unchanged. The
    /// decoded object is identified by its data type id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownEncoding`] if no type is registered for
    /// the object's type id, or [`CatalogError::Codec`] if the body is
    /// malformed.
    pub fn decode(
        &self,
        object: ExtensionObject,
        limits: &EncodingLimits,
    ) -> Result<ExtensionObject, CatalogError> {
        let (type_id, body) = object.into_parts();
        match body {
            ExtensionObjectBody::Binary(bytes) => {
                let mut instance = self.instantiate(&type_id)?;
                BinaryDecoder::decode(&bytes, instance.as_mut(), limits)?;
                Ok(ExtensionObject::from_encodeable(instance))
            }
            ExtensionObjectBody::Xml(fragment) => {
                let mut instance = self.instantiate(&type_id)?;
                XmlDecoder::decode(&fragment, instance.as_mut(), limits)?;
                Ok(ExtensionObject::from_encodeable(instance))
            }
            unchanged @ (ExtensionObjectBody::None | ExtensionObjectBody::Encodeable(_)) => {
                Ok(ExtensionObject::new(type_id, unchanged))
            }
        }
    }

    fn instantiate(&self, type_id: &NodeId) -> Result<Box<dyn Encodeable>, CatalogError> {
        self.create(type_id)
            .ok_or_else(|| CatalogError::UnknownEncoding(type_id.clone()))
    }
}
