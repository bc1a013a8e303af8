//! In-memory adapters for the component pool, staging, and publication ports.

mod pool;
mod publisher;
mod staging;

pub use pool::InMemoryComponentPool;
pub use publisher::InMemoryRegistryPublisher;
pub use staging::StagingArea;
