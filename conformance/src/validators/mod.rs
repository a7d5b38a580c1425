//! Conformance validators.

pub mod schema;
