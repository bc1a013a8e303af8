//! Definition store port receiving the records of a build pass.

use crate::registry::domain::{CheckerAssociation, WorkflowDefinition};
use std::sync::Arc;
use thiserror::Error;

/// Result type for definition store operations.
pub type DefinitionStoreResult<T> = Result<T, DefinitionStoreError>;

/// Sink for finalized workflow definitions and checker associations.
///
/// Saving a record whose key already exists replaces it.
pub trait DefinitionStore: Send + Sync {
    /// Stores a workflow definition keyed by workflow name.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionStoreError::Persistence`] when the record cannot be
    /// stored.
    fn save_workflow_definition(
        &self,
        definition: &WorkflowDefinition,
    ) -> DefinitionStoreResult<()>;

    /// Stores a checker association keyed by task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionStoreError::Persistence`] when the record cannot be
    /// stored.
    fn save_checker_association(
        &self,
        association: &CheckerAssociation,
    ) -> DefinitionStoreResult<()>;
}

/// Errors returned by definition store implementations.
#[derive(Debug, Clone, Error)]
pub enum DefinitionStoreError {
    /// Persistence-layer failure.
    #[error("definition store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DefinitionStoreError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
