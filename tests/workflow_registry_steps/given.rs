//! Given steps for workflow registry BDD scenarios.

use super::world::{RegistryWorld, component_id};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use trellis::registry::domain::{ClassificationDescriptor, ClassificationTag, ComponentRegistration};

#[given(r#"a workflow "{name}" classified as "{tag}""#)]
fn a_classified_workflow(
    world: &mut RegistryWorld,
    name: String,
    tag: String,
) -> Result<(), eyre::Report> {
    let classification = ClassificationTag::try_from(tag.as_str())?;
    world.declare(
        ComponentRegistration::workflow(component_id(&name)?)
            .with_descriptor(ClassificationDescriptor::tagged(classification)),
    );
    Ok(())
}

#[given(r#"a workflow "{name}" without metadata"#)]
fn a_workflow_without_metadata(
    world: &mut RegistryWorld,
    name: String,
) -> Result<(), eyre::Report> {
    world.declare(ComponentRegistration::workflow(component_id(&name)?));
    Ok(())
}

#[given(r#"a task "{name}""#)]
fn a_plain_task(world: &mut RegistryWorld, name: String) -> Result<(), eyre::Report> {
    world.declare(ComponentRegistration::task(component_id(&name)?));
    Ok(())
}

#[given(r#"a checker task "{name}" labelled "{label}""#)]
fn a_checker_task(
    world: &mut RegistryWorld,
    name: String,
    label: String,
) -> Result<(), eyre::Report> {
    let descriptor = ClassificationDescriptor::new()
        .with_attribute(ClassificationTag::Checker, "label", json!(label));
    let task = ComponentRegistration::task(component_id(&name)?);
    world.declare(task.with_descriptor(descriptor));
    Ok(())
}

#[given(r#""{component}" depends on "{dependency}""#)]
fn component_depends_on(
    world: &mut RegistryWorld,
    component: String,
    dependency: String,
) -> Result<(), eyre::Report> {
    world.add_dependency(&component, &dependency)
}

#[given("the registry has been initialized")]
fn registry_initialized(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    world.register_pending()?;
    world
        .service
        .initialize()
        .wrap_err("initialize registry for scenario")?;
    Ok(())
}
