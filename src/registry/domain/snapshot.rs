//! Immutable result set of one registry build.

use super::{CheckerAssociation, ClassificationTag, ComponentId, WorkflowDefinition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete replacement set of definitions produced by one build pass.
///
/// Snapshots are frozen once built. Two snapshots built from the same pool
/// hold identical records even though their generation and timestamp differ;
/// use [`RegistrySnapshot::same_records`] to compare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    generation: u64,
    built_at: DateTime<Utc>,
    definitions: BTreeMap<ComponentId, WorkflowDefinition>,
    checkers: BTreeMap<ComponentId, CheckerAssociation>,
}

impl RegistrySnapshot {
    /// Creates an unpublished snapshot (generation `0`).
    #[must_use]
    pub const fn new(
        built_at: DateTime<Utc>,
        definitions: BTreeMap<ComponentId, WorkflowDefinition>,
        checkers: BTreeMap<ComponentId, CheckerAssociation>,
    ) -> Self {
        Self {
            generation: 0,
            built_at,
            definitions,
            checkers,
        }
    }

    /// Returns the snapshot stamped with a publication generation.
    #[must_use]
    pub const fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Returns the publication generation, `0` while unpublished.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns when the build pass finished.
    #[must_use]
    pub const fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// Returns the workflow definitions keyed by workflow name.
    #[must_use]
    pub const fn definitions(&self) -> &BTreeMap<ComponentId, WorkflowDefinition> {
        &self.definitions
    }

    /// Returns the checker associations keyed by task identifier.
    #[must_use]
    pub const fn checkers(&self) -> &BTreeMap<ComponentId, CheckerAssociation> {
        &self.checkers
    }

    /// Finds a workflow definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&WorkflowDefinition> {
        self.definitions.get(name)
    }

    /// Finds the checker association of a task.
    #[must_use]
    pub fn checker_for_task(&self, task: &str) -> Option<&CheckerAssociation> {
        self.checkers.get(task)
    }

    /// Returns the checkers validating a workflow, in task order.
    pub fn checkers_for_workflow<'a>(
        &'a self,
        workflow: &'a str,
    ) -> impl Iterator<Item = &'a CheckerAssociation> + 'a {
        self.checkers
            .values()
            .filter(move |association| association.owner_workflow().as_str() == workflow)
    }

    /// Returns the definitions of a given workflow type, in name order.
    pub fn workflows_of_type(
        &self,
        workflow_type: ClassificationTag,
    ) -> impl Iterator<Item = &WorkflowDefinition> + '_ {
        self.definitions
            .values()
            .filter(move |definition| definition.workflow_type() == workflow_type)
    }

    /// Returns whether both snapshots hold the same definitions and checkers.
    #[must_use]
    pub fn same_records(&self, other: &Self) -> bool {
        self.definitions == other.definitions && self.checkers == other.checkers
    }
}
