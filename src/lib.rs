//! Trellis: workflow registry construction for a workflow engine.
//!
//! This crate discovers workflow and task components in a component pool,
//! classifies each workflow from declarative metadata, associates checker
//! tasks with the workflow they validate, and publishes the resulting
//! registry as an immutable snapshot for the execution engine.
//!
//! # Architecture
//!
//! Trellis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory pool, manifests)
//!
//! # Modules
//!
//! - [`registry`]: Component classification, registry builds, and publication

pub mod registry;
