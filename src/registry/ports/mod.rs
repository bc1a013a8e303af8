//! Port contracts for workflow registry construction.
//!
//! Ports define infrastructure-agnostic interfaces used by the registry
//! builder and service: the component pool it reads from, the definition
//! store it writes to, and the publisher that exposes finished builds.

mod pool;
mod publisher;
mod store;

pub use pool::ComponentPool;
pub use publisher::{RegistryPublishError, RegistryPublishResult, RegistryPublisher};
pub use store::{DefinitionStore, DefinitionStoreError, DefinitionStoreResult};
