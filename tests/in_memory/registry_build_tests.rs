//! Registry builds and publication through the public service API.

use super::helpers::{id, pool, service_for};
use rstest::rstest;
use std::sync::Arc;
use trellis::registry::{
    adapters::memory::InMemoryComponentPool,
    domain::{
        BuildState, ClassificationDescriptor, ClassificationTag, ComponentKind,
        ComponentRegistration,
    },
    ports::ComponentPool,
    services::{RegistryConfig, RegistryServiceError},
};

#[rstest]
fn initialize_publishes_classified_workflows(pool: Arc<InMemoryComponentPool>) {
    let service = service_for(&pool, RegistryConfig::default());

    let snapshot = service.initialize().expect("initialization should succeed");

    assert_eq!(snapshot.definitions().len(), 2);
    assert_eq!(
        snapshot
            .definition("triage")
            .map(|definition| definition.workflow_type()),
        Some(ClassificationTag::Assessment)
    );
    assert!(
        snapshot
            .definition("triage")
            .is_some_and(|definition| definition.tasks().is_empty())
    );
}

#[rstest]
fn checker_settings_are_exposed(pool: Arc<InMemoryComponentPool>) {
    let service = service_for(&pool, RegistryConfig::default());
    service.initialize().expect("initialization should succeed");

    let association = service
        .checker_for_task("approvalChecker")
        .expect("lookup should succeed")
        .expect("checker should be associated");

    let settings = association.settings();
    assert_eq!(settings.next_workflow_name(), Some("triage"));
    assert_eq!(settings.cron_expression(), Some("0 0/5 * * * ?"));
}

#[rstest]
fn rebuild_picks_up_new_components(pool: Arc<InMemoryComponentPool>) {
    let service = service_for(&pool, RegistryConfig::default());
    service.initialize().expect("initialization should succeed");
    let audit = ComponentRegistration::task(id("auditTask"));
    pool.register(audit.depends_on(id("onboarding")))
        .expect("task should register");

    let snapshot = service.rebuild().expect("rebuild should succeed");

    assert_eq!(snapshot.generation(), 2);
    assert!(snapshot.checker_for_task("auditTask").is_none());
    assert_eq!(pool.list_components(ComponentKind::Task).len(), 4);
}

#[rstest]
fn unclassified_workflow_reports_its_name(pool: Arc<InMemoryComponentPool>) {
    pool.register(ComponentRegistration::workflow(id("broken")))
        .expect("workflow should register");
    let service = service_for(&pool, RegistryConfig::strict());

    let err = service
        .initialize()
        .expect_err("initialization should fail");

    assert!(matches!(err, RegistryServiceError::Build(_)));
    assert!(err.to_string().contains("broken"));
    assert_eq!(service.state(), BuildState::Failed);
}

#[rstest]
#[case(RegistryConfig::default(), Some("billing"))]
#[case(RegistryConfig::strict(), None)]
fn owner_policy_decides_ambiguous_checkers(
    pool: Arc<InMemoryComponentPool>,
    #[case] config: RegistryConfig,
    #[case] expected_owner: Option<&str>,
) {
    pool.register(
        ComponentRegistration::workflow(id("billing"))
            .with_descriptor(ClassificationDescriptor::tagged(
                ClassificationTag::Infrastructure,
            )),
    )
    .expect("workflow should register");
    pool.register(
        ComponentRegistration::task(id("sharedChecker"))
            .with_dependencies([id("onboarding"), id("billing")])
            .with_descriptor(ClassificationDescriptor::tagged(ClassificationTag::Checker)),
    )
    .expect("task should register");
    let service = service_for(&pool, config);

    service.initialize().expect("initialization should succeed");

    let owner = service
        .checker_for_task("sharedChecker")
        .expect("lookup should succeed")
        .map(|association| association.owner_workflow().as_str().to_owned());
    assert_eq!(owner.as_deref(), expected_owner);
    assert_eq!(
        service
            .checkers_for_workflow("onboarding")
            .expect("lookup should succeed")
            .len(),
        1
    );
}
