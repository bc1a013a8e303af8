//! Unit tests for the workflow registry module.
//!
//! Tests are organised by layer: domain values, the two-pass builder, and
//! the registry service lifecycle.
