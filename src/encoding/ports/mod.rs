//! Port definitions for the encoding subsystem.
//!
//! Ports are the abstract interfaces the dispatcher depends on. Concrete
//! codecs and generated data types implement them.

pub mod codec;
pub mod encodeable;

pub use codec::{CodecResult, Decoder, Encoder, EncodingContext, EncodingLimits};
pub use encodeable::Encodeable;

#[cfg(test)]
pub use codec::MockEncodingContext;
