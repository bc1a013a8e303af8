//! Application services for building and serving the workflow registry.

mod builder;
mod classify;
mod config;
mod dependencies;
mod registry;

pub use builder::{BuildSummary, RegistryBuildError, RegistryBuildResult, RegistryBuilder};
pub use classify::ClassificationResolver;
pub use config::{OwnerSelectionPolicy, RegistryConfig};
pub use dependencies::DependencyResolver;
pub use registry::{RegistryServiceError, RegistryServiceResult, WorkflowRegistryService};
