//! Scratch definition store holding the records of a single build pass.

use crate::registry::{
    domain::{CheckerAssociation, ComponentId, RegistrySnapshot, WorkflowDefinition},
    ports::{DefinitionStore, DefinitionStoreError, DefinitionStoreResult},
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Isolated store a build pass writes into before publication.
///
/// Nothing written here is visible to registry readers until the staged
/// records are frozen with [`StagingArea::into_snapshot`] and published.
#[derive(Debug, Default)]
pub struct StagingArea {
    records: Mutex<StagedRecords>,
}

#[derive(Debug, Default)]
struct StagedRecords {
    definitions: BTreeMap<ComponentId, WorkflowDefinition>,
    checkers: BTreeMap<ComponentId, CheckerAssociation>,
}

impl StagingArea {
    /// Creates an empty staging area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes the staged records into an unpublished snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionStoreError::Persistence`] when the staging lock
    /// is poisoned.
    pub fn into_snapshot(self, built_at: DateTime<Utc>) -> DefinitionStoreResult<RegistrySnapshot> {
        let records = self.records.into_inner().map_err(|err| {
            DefinitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(RegistrySnapshot::new(
            built_at,
            records.definitions,
            records.checkers,
        ))
    }
}

impl DefinitionStore for StagingArea {
    fn save_workflow_definition(
        &self,
        definition: &WorkflowDefinition,
    ) -> DefinitionStoreResult<()> {
        let mut records = self.records.lock().map_err(|err| {
            DefinitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records
            .definitions
            .insert(definition.name().clone(), definition.clone());
        Ok(())
    }

    fn save_checker_association(
        &self,
        association: &CheckerAssociation,
    ) -> DefinitionStoreResult<()> {
        let mut records = self.records.lock().map_err(|err| {
            DefinitionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        records
            .checkers
            .insert(association.task_id().clone(), association.clone());
        Ok(())
    }
}
