//! Type-directed data encoding for structured runtime values.
//!
//! Given a value that may be an encodeable structure, an extension object, or
//! an array of either, this module decides whether a requested wire encoding
//! is supported and, if so, converts the value into extension objects
//! carrying binary or XML bodies.
//!
//! # Architecture
//!
//! - **Domain**: identifiers, qualified names, XML fragments,
//!   [`domain::ExtensionObject`], [`domain::Variant`] and the encoding name table
//! - **Ports**: the [`ports::Encodeable`] capability and the codec traits
//!   ([`ports::Encoder`], [`ports::Decoder`], [`ports::EncodingContext`])
//! - **Adapters**: reference binary and XML codecs, [`adapters::DefaultEncodingContext`]
//!   and [`adapters::TypeCatalog`]
//! - **Services**: [`services::DataEncodingService`], the dispatcher
//!
//! # Example
//!
//! ```
//! use ua_dataencoding::encoding::adapters::DefaultEncodingContext;
//! use ua_dataencoding::encoding::domain::{QualifiedName, Variant};
//! use ua_dataencoding::encoding::services::apply_data_encoding;
//!
//! let context = DefaultEncodingContext::new();
//! let mut value = Variant::Null;
//! let outcome = apply_data_encoding(
//!     &context,
//!     &QualifiedName::new(0, "Default XML"),
//!     &mut value,
//! )
//! .expect("null values pass through");
//! assert!(!outcome.is_encoded());
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
