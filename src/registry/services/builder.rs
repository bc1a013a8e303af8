//! Two-pass construction of workflow definitions and checker associations.
//!
//! The first pass classifies every workflow of the pool and fails the whole
//! build when one cannot be classified. The second pass links checker tasks
//! to the workflow they depend on; tasks that do not qualify are skipped.

use super::{ClassificationResolver, DependencyResolver, OwnerSelectionPolicy, RegistryConfig};
use crate::registry::{
    adapters::memory::StagingArea,
    domain::{
        CheckerAssociation, ClassificationError, ClassificationTag, ComponentId, ComponentKind,
        RegistrySnapshot, WorkflowDefinition,
    },
    ports::{ComponentPool, DefinitionStore, DefinitionStoreError},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that abort a registry build.
#[derive(Debug, Clone, Error)]
pub enum RegistryBuildError {
    /// A workflow matched none of the workflow classification tags.
    #[error("workflow '{workflow}' cannot be registered: {source}")]
    UnclassifiedWorkflow {
        /// Workflow that failed classification.
        workflow: ComponentId,
        /// Whether metadata was missing or no tag matched.
        #[source]
        source: ClassificationError,
    },

    /// The definition store rejected a record.
    #[error(transparent)]
    Store(#[from] DefinitionStoreError),
}

/// Result type for registry builds.
pub type RegistryBuildResult<T> = Result<T, RegistryBuildError>;

/// Number of records written by a build pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Workflow definitions written.
    pub definitions: usize,
    /// Checker associations written.
    pub checkers: usize,
}

/// Builds registry records from the components of a pool.
#[derive(Debug)]
pub struct RegistryBuilder<P: ComponentPool> {
    pool: Arc<P>,
    config: RegistryConfig,
}

impl<P: ComponentPool> Clone for RegistryBuilder<P> {
    fn clone(&self) -> Self {
        Self {
            pool: Arc::clone(&self.pool),
            config: self.config.clone(),
        }
    }
}

impl<P: ComponentPool> RegistryBuilder<P> {
    /// Creates a builder over `pool`.
    #[must_use]
    pub const fn new(pool: Arc<P>, config: RegistryConfig) -> Self {
        Self { pool, config }
    }

    /// Runs both passes into a fresh staging area and freezes the result.
    ///
    /// The returned snapshot is unpublished and carries generation zero.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryBuildError::UnclassifiedWorkflow`] when a workflow
    /// cannot be classified and [`RegistryBuildError::Store`] when staging
    /// fails.
    pub fn build(&self, built_at: DateTime<Utc>) -> RegistryBuildResult<RegistrySnapshot> {
        let staging = StagingArea::new();
        self.build_into(&staging)?;
        Ok(staging.into_snapshot(built_at)?)
    }

    /// Runs both passes against `store`.
    ///
    /// Every workflow is classified before the first record is written, so
    /// a build that fails classification leaves `store` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryBuildError::UnclassifiedWorkflow`] when a workflow
    /// cannot be classified and [`RegistryBuildError::Store`] when `store`
    /// rejects a record.
    pub fn build_into<S>(&self, store: &S) -> RegistryBuildResult<BuildSummary>
    where
        S: DefinitionStore + ?Sized,
    {
        info!(
            owner_selection = self.config.owner_selection.as_str(),
            "building workflow registry"
        );

        let definitions = self.resolve_workflows()?;
        for definition in &definitions {
            store.save_workflow_definition(definition)?;
            debug!(
                workflow = %definition.name(),
                workflow_type = %definition.workflow_type(),
                tasks = definition.tasks().len(),
                "recorded workflow definition"
            );
        }

        let checkers = self.associate_checkers(store)?;
        let summary = BuildSummary {
            definitions: definitions.len(),
            checkers,
        };
        info!(
            definitions = summary.definitions,
            checkers = summary.checkers,
            "workflow registry built"
        );
        Ok(summary)
    }

    fn resolve_workflows(&self) -> RegistryBuildResult<Vec<WorkflowDefinition>> {
        let classifier = ClassificationResolver::new(&*self.pool);
        let dependencies = DependencyResolver::new(&*self.pool);

        self.pool
            .list_components(ComponentKind::Workflow)
            .into_iter()
            .map(|workflow| {
                let tasks = dependencies.dependencies_of_kind(&workflow, ComponentKind::Task);
                match classifier.classify(&workflow, &ClassificationTag::WORKFLOW_PRIORITY) {
                    Ok(resolved) => Ok(WorkflowDefinition::new(workflow, resolved.tag(), tasks)),
                    Err(source) => {
                        error!(
                            workflow = %workflow,
                            reason = source.kind(),
                            "workflow build aborted"
                        );
                        let failure = RegistryBuildError::UnclassifiedWorkflow { workflow, source };
                        Err(failure)
                    }
                }
            })
            .collect()
    }

    fn associate_checkers<S>(&self, store: &S) -> RegistryBuildResult<usize>
    where
        S: DefinitionStore + ?Sized,
    {
        let classifier = ClassificationResolver::new(&*self.pool);
        let mut recorded = 0;

        for task in self.pool.list_components(ComponentKind::Task) {
            let Some(owner) = self.select_owner(&task) else {
                continue;
            };

            match classifier.classify(&task, &ClassificationTag::CHECKER_PRIORITY) {
                Ok(classification) => {
                    let (_, attributes) = classification.into_parts();
                    let association = CheckerAssociation::new(task, owner, attributes);
                    store.save_checker_association(&association)?;
                    debug!(
                        task = %association.task_id(),
                        owner = %association.owner_workflow(),
                        "recorded checker association"
                    );
                    recorded += 1;
                }
                Err(reason) => {
                    info!(
                        task = %task,
                        owner = %owner,
                        reason = reason.kind(),
                        "task is not a checker"
                    );
                }
            }
        }

        Ok(recorded)
    }

    fn select_owner(&self, task: &ComponentId) -> Option<ComponentId> {
        let dependencies = DependencyResolver::new(&*self.pool);
        let mut owners = dependencies.dependencies_of_kind(task, ComponentKind::Workflow);

        if owners.len() > 1 {
            let candidates = owners
                .iter()
                .map(ComponentId::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            match self.config.owner_selection {
                OwnerSelectionPolicy::LowestIdentifier => {
                    warn!(
                        task = %task,
                        %candidates,
                        "ambiguous checker owner, choosing lowest identifier"
                    );
                }
                OwnerSelectionPolicy::RejectAmbiguous => {
                    warn!(task = %task, %candidates, "ambiguous checker owner, skipping task");
                    return None;
                }
            }
        }

        let owner = owners.pop_first();
        if owner.is_none() {
            debug!(task = %task, "task has no workflow dependency");
        }
        owner
    }
}
