//! Unit tests for the encoding module.
//!
//! Tests are organised by layer: domain values, codec adapters and the
//! dispatcher service.

mod fixtures;
