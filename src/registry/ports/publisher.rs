//! Publisher port exposing the current registry snapshot to readers.

use crate::registry::domain::RegistrySnapshot;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registry publication operations.
pub type RegistryPublishResult<T> = Result<T, RegistryPublishError>;

/// Read path for completed registry builds.
///
/// Readers only ever observe whole snapshots: `publish` replaces the current
/// snapshot in a single swap, and snapshots are immutable once shared.
pub trait RegistryPublisher: Send + Sync {
    /// Publishes a snapshot, stamping it with the next generation.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryPublishError::Persistence`] when the swap fails.
    fn publish(&self, snapshot: RegistrySnapshot) -> RegistryPublishResult<Arc<RegistrySnapshot>>;

    /// Returns the currently published snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryPublishError::Persistence`] when the read path is
    /// unavailable.
    fn current(&self) -> RegistryPublishResult<Option<Arc<RegistrySnapshot>>>;
}

/// Errors returned by registry publisher implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistryPublishError {
    /// Persistence-layer failure.
    #[error("registry publication error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryPublishError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
