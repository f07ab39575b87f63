//! Domain types for the encoding subsystem.
//!
//! Pure value types with no codec dependencies: identifiers, qualified
//! names, XML fragments, extension objects, runtime values and the encoding
//! selector table.

mod extension_object;
mod ids;
mod qualified_name;
mod selector;
mod shape;
mod variant;
mod xml;

pub use extension_object::{BodyKind, ExtensionObject, ExtensionObjectBody};
pub use ids::{Identifier, NodeId, ParseNodeIdError};
pub use qualified_name::{ParseQualifiedNameError, QualifiedName};
pub use selector::{DEFAULT_BINARY_NAME, DEFAULT_XML_NAME, DataEncodingTable, EncodingSelector};
pub use shape::ValueShape;
pub use variant::Variant;
pub use xml::XmlElement;
