//! Then steps for workflow registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::then;
use serde_json::json;
use trellis::registry::{
    domain::{BuildState, ClassificationError, ClassificationTag},
    services::{RegistryBuildError, RegistryServiceError},
};

#[then("the build succeeds")]
fn build_succeeds(world: &RegistryWorld) -> Result<(), eyre::Report> {
    match &world.last_build {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected build to succeed, got {err}")),
        None => Err(eyre::eyre!("no build was requested in scenario world")),
    }
}

#[then(r#"the build fails because workflow "{name}" has no metadata"#)]
fn build_fails_without_metadata(world: &RegistryWorld, name: String) -> Result<(), eyre::Report> {
    let result = world
        .last_build
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no build was requested in scenario world"))?;
    match result {
        Err(RegistryServiceError::Build(RegistryBuildError::UnclassifiedWorkflow {
            workflow,
            source: ClassificationError::NoMetadata { .. },
        })) if workflow.as_str() == name => Ok(()),
        other => Err(eyre::eyre!(
            "expected missing metadata failure for '{name}', got {other:?}"
        )),
    }
}

#[then("no registry is published")]
fn no_registry_published(world: &RegistryWorld) -> Result<(), eyre::Report> {
    if world.service.current()?.is_some() {
        return Err(eyre::eyre!("expected no published registry"));
    }
    Ok(())
}

#[then("the published registry is generation {generation:u64}")]
fn published_generation(world: &RegistryWorld, generation: u64) -> Result<(), eyre::Report> {
    let snapshot = world.published()?;
    if snapshot.generation() != generation {
        return Err(eyre::eyre!(
            "expected generation {generation}, found {}",
            snapshot.generation()
        ));
    }
    Ok(())
}

#[then(r#"the registry state is "{state}""#)]
fn registry_state_is(world: &RegistryWorld, state: String) -> Result<(), eyre::Report> {
    let expected = BuildState::try_from(state.as_str())?;
    let actual = world.service.state();
    if actual != expected {
        return Err(eyre::eyre!("expected state {expected}, found {actual}"));
    }
    Ok(())
}

#[then(r#"workflow "{name}" has type "{tag}""#)]
fn workflow_has_type(world: &RegistryWorld, name: String, tag: String) -> Result<(), eyre::Report> {
    let expected = ClassificationTag::try_from(tag.as_str())?;
    let definition = world
        .service
        .workflow_definition(&name)?
        .ok_or_else(|| eyre::eyre!("workflow '{name}' is not registered"))?;
    if definition.workflow_type() != expected {
        return Err(eyre::eyre!(
            "expected '{name}' to be {expected}, found {}",
            definition.workflow_type()
        ));
    }
    Ok(())
}

#[then(r#"workflow "{name}" has {count:usize} tasks"#)]
fn workflow_has_task_count(
    world: &RegistryWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let definition = world
        .service
        .workflow_definition(&name)?
        .ok_or_else(|| eyre::eyre!("workflow '{name}' is not registered"))?;
    if definition.tasks().len() != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in '{name}', found {}",
            definition.tasks().len()
        ));
    }
    Ok(())
}

#[then(r#"workflow "{name}" includes task "{task}""#)]
fn workflow_includes_task(
    world: &RegistryWorld,
    name: String,
    task: String,
) -> Result<(), eyre::Report> {
    let definition = world
        .service
        .workflow_definition(&name)?
        .ok_or_else(|| eyre::eyre!("workflow '{name}' is not registered"))?;
    if !definition.contains_task(&task) {
        return Err(eyre::eyre!("expected '{name}' to include task '{task}'"));
    }
    Ok(())
}

#[then(r#"task "{task}" checks workflow "{workflow}""#)]
fn task_checks_workflow(
    world: &RegistryWorld,
    task: String,
    workflow: String,
) -> Result<(), eyre::Report> {
    let association = world
        .service
        .checker_for_task(&task)?
        .ok_or_else(|| eyre::eyre!("task '{task}' has no checker association"))?;
    if association.owner_workflow().as_str() != workflow {
        return Err(eyre::eyre!(
            "expected '{task}' to check '{workflow}', found '{}'",
            association.owner_workflow()
        ));
    }
    Ok(())
}

#[then(r#"checker "{task}" is labelled "{label}""#)]
fn checker_is_labelled(
    world: &RegistryWorld,
    task: String,
    label: String,
) -> Result<(), eyre::Report> {
    let association = world
        .service
        .checker_for_task(&task)?
        .ok_or_else(|| eyre::eyre!("task '{task}' has no checker association"))?;
    if association.attributes().get("label") != Some(&json!(label)) {
        return Err(eyre::eyre!(
            "expected '{task}' to be labelled '{label}', found {:?}",
            association.attributes()
        ));
    }
    Ok(())
}

#[then(r#"task "{task}" has no checker association"#)]
fn task_has_no_checker(world: &RegistryWorld, task: String) -> Result<(), eyre::Report> {
    if world.service.checker_for_task(&task)?.is_some() {
        return Err(eyre::eyre!(
            "expected '{task}' to have no checker association"
        ));
    }
    Ok(())
}
