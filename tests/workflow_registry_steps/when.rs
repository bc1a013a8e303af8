//! When steps for workflow registry BDD scenarios.

use super::world::RegistryWorld;
use rstest_bdd_macros::when;

#[when("the registry is initialized")]
fn initialize_registry(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    world.register_pending()?;
    world.last_build = Some(world.service.initialize());
    Ok(())
}

#[when("the registry is rebuilt")]
fn rebuild_registry(world: &mut RegistryWorld) -> Result<(), eyre::Report> {
    world.register_pending()?;
    world.last_build = Some(world.service.rebuild());
    Ok(())
}
