//! Service layer owning the workflow registry lifecycle.
//!
//! Provides [`WorkflowRegistryService`] which runs builds, publishes their
//! snapshots, and answers lookups against the published registry.

use super::{RegistryBuildError, RegistryBuilder, RegistryConfig};
use crate::registry::{
    domain::{
        BuildState, CheckerAssociation, ClassificationTag, RegistryDomainError, RegistrySnapshot,
        WorkflowDefinition,
    },
    ports::{ComponentPool, RegistryPublishError, RegistryPublisher},
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for registry lifecycle operations.
#[derive(Debug, Error)]
pub enum RegistryServiceError {
    /// The build pass failed.
    #[error(transparent)]
    Build(#[from] RegistryBuildError),
    /// The publisher rejected or could not serve a snapshot.
    #[error(transparent)]
    Publish(#[from] RegistryPublishError),
    /// A lifecycle transition was rejected.
    #[error(transparent)]
    Domain(#[from] RegistryDomainError),
    /// Another build is still running.
    #[error("a registry build is already in progress")]
    BuildInProgress,
}

/// Result type for registry service operations.
pub type RegistryServiceResult<T> = Result<T, RegistryServiceError>;

/// Workflow registry orchestration service.
///
/// Builds never interleave, and readers only ever observe a fully published
/// snapshot. A failed rebuild keeps the previous snapshot visible.
pub struct WorkflowRegistryService<P, R, C>
where
    P: ComponentPool,
    R: RegistryPublisher,
    C: Clock + Send + Sync,
{
    builder: RegistryBuilder<P>,
    publisher: Arc<R>,
    clock: Arc<C>,
    state: Mutex<BuildState>,
}

impl<P, R, C> WorkflowRegistryService<P, R, C>
where
    P: ComponentPool,
    R: RegistryPublisher,
    C: Clock + Send + Sync,
{
    /// Creates a registry service that has not built anything yet.
    #[must_use]
    pub const fn new(
        pool: Arc<P>,
        publisher: Arc<R>,
        clock: Arc<C>,
        config: RegistryConfig,
    ) -> Self {
        Self {
            builder: RegistryBuilder::new(pool, config),
            publisher,
            clock,
            state: Mutex::new(BuildState::NotBuilt),
        }
    }

    /// Returns the current build state.
    #[must_use]
    pub fn state(&self) -> BuildState {
        *lock_state(&self.state)
    }

    /// Builds and publishes the registry unless it is already built.
    ///
    /// When a snapshot is already published and the registry is built or
    /// being rebuilt, that snapshot is returned without starting a build.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::BuildInProgress`] while the first
    /// build runs, [`RegistryServiceError::Build`] when the build fails, and
    /// [`RegistryServiceError::Publish`] when publication fails.
    pub fn initialize(&self) -> RegistryServiceResult<Arc<RegistrySnapshot>> {
        self.run_build(true)
    }

    /// Builds and publishes a replacement registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::BuildInProgress`] while another build
    /// runs, [`RegistryServiceError::Build`] when the build fails, and
    /// [`RegistryServiceError::Publish`] when publication fails.
    pub fn rebuild(&self) -> RegistryServiceResult<Arc<RegistrySnapshot>> {
        self.run_build(false)
    }

    /// Returns the published snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Publish`] when the publisher cannot be
    /// read.
    pub fn current(&self) -> RegistryServiceResult<Option<Arc<RegistrySnapshot>>> {
        Ok(self.publisher.current()?)
    }

    /// Finds a published workflow definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Publish`] when the publisher cannot be
    /// read.
    pub fn workflow_definition(
        &self,
        name: &str,
    ) -> RegistryServiceResult<Option<WorkflowDefinition>> {
        Ok(self
            .current()?
            .and_then(|snapshot| snapshot.definition(name).cloned()))
    }

    /// Finds the published checker association of a task.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Publish`] when the publisher cannot be
    /// read.
    pub fn checker_for_task(
        &self,
        task: &str,
    ) -> RegistryServiceResult<Option<CheckerAssociation>> {
        Ok(self
            .current()?
            .and_then(|snapshot| snapshot.checker_for_task(task).cloned()))
    }

    /// Returns the published checkers validating a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Publish`] when the publisher cannot be
    /// read.
    pub fn checkers_for_workflow(
        &self,
        workflow: &str,
    ) -> RegistryServiceResult<Vec<CheckerAssociation>> {
        Ok(self.current()?.map_or_else(Vec::new, |snapshot| {
            snapshot.checkers_for_workflow(workflow).cloned().collect()
        }))
    }

    /// Returns the published definitions of a workflow type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Publish`] when the publisher cannot be
    /// read.
    pub fn workflows_of_type(
        &self,
        workflow_type: ClassificationTag,
    ) -> RegistryServiceResult<Vec<WorkflowDefinition>> {
        Ok(self.current()?.map_or_else(Vec::new, |snapshot| {
            snapshot.workflows_of_type(workflow_type).cloned().collect()
        }))
    }

    fn run_build(&self, reuse_published: bool) -> RegistryServiceResult<Arc<RegistrySnapshot>> {
        let guard = {
            let mut state = lock_state(&self.state);
            if reuse_published
                && matches!(*state, BuildState::Built | BuildState::InProgress)
                && let Some(current) = self.publisher.current()?
            {
                return Ok(current);
            }
            if *state == BuildState::InProgress {
                return Err(RegistryServiceError::BuildInProgress);
            }
            *state = state.transition_to(BuildState::InProgress)?;
            BuildGuard {
                state: &self.state,
                finished: false,
            }
        };

        let outcome = self.build_and_publish();
        let target = if outcome.is_ok() {
            BuildState::Built
        } else {
            BuildState::Failed
        };
        guard.finish(target)?;

        if let Ok(snapshot) = &outcome {
            info!(
                generation = snapshot.generation(),
                "workflow registry published"
            );
        }
        outcome
    }

    fn build_and_publish(&self) -> RegistryServiceResult<Arc<RegistrySnapshot>> {
        let snapshot = self.builder.build(self.clock.utc())?;
        Ok(self.publisher.publish(snapshot)?)
    }
}

fn lock_state(state: &Mutex<BuildState>) -> MutexGuard<'_, BuildState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks the running build failed unless it is finished explicitly.
struct BuildGuard<'a> {
    state: &'a Mutex<BuildState>,
    finished: bool,
}

impl BuildGuard<'_> {
    fn finish(mut self, target: BuildState) -> RegistryServiceResult<()> {
        self.finished = true;
        let mut state = lock_state(self.state);
        *state = state.transition_to(target)?;
        Ok(())
    }
}

impl Drop for BuildGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        warn!("workflow registry build aborted before finishing");
        *lock_state(self.state) = BuildState::Failed;
    }
}
