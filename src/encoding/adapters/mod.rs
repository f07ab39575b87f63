//! Adapter implementations for the encoding ports.
//!
//! - [`binary`]: reference binary encoder/decoder
//! - [`xml`]: reference XML encoder/decoder
//! - [`context`]: [`DefaultEncodingContext`] combining both codecs
//! - [`catalog`]: [`TypeCatalog`] for decoding serialized bodies

pub mod binary;
pub mod catalog;
pub mod context;
pub mod xml;

pub use binary::{BinaryDecoder, BinaryEncoder};
pub use catalog::{EncodeableFactory, TypeCatalog};
pub use context::{DefaultEncodingContext, UA_NAMESPACE_URI};
pub use xml::{XmlDecoder, XmlEncoder};
