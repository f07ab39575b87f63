//! Type-directed data encoding for OPC UA style structured values.
//!
//! This crate converts runtime values holding structured data into extension
//! objects carrying a binary or XML body, selected by a requested data
//! encoding name. Failures are returned as typed errors, never raised.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no codec dependencies
//! - **Ports**: Abstract trait interfaces for encodeable types and codecs
//! - **Adapters**: Reference implementations of the codec ports
//! - **Services**: The dispatcher that applies a requested encoding
//!
//! # Modules
//!
//! - [`encoding`]: Value classification, encoding selection and conversion

pub mod encoding;
