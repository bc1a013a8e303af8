//! Adapter implementations for workflow registry ports.

pub mod manifest;
pub mod memory;

pub use manifest::{ManifestError, PoolManifest};
