//! Workflow registry construction for Trellis.
//!
//! At startup the registry inspects a pool of workflow and task components,
//! classifies each workflow from its declared metadata, links checker tasks
//! to the workflow they validate, and publishes the result as an immutable
//! snapshot. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
