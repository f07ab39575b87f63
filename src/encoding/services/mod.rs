//! Application services for the encoding subsystem.
//!
//! Services orchestrate domain values and ports; the dispatcher is the only
//! boundary surface callers need.

mod dispatcher;

pub use dispatcher::{DataEncodingService, EncodingOutcome, apply_data_encoding, convert};
