//! In-memory component pool with explicit registration.

use crate::registry::{
    domain::{
        ClassificationDescriptor, ComponentId, ComponentKind, ComponentRegistration,
        RegistryDomainError,
    },
    ports::ComponentPool,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Thread-safe in-memory component pool.
///
/// Components declare their kind, dependency identifiers, and classification
/// descriptor when they are registered; the pool keeps them in a plain
/// adjacency map keyed by identifier.
///
/// # Examples
///
/// ```
/// use trellis::registry::adapters::memory::InMemoryComponentPool;
/// use trellis::registry::domain::{
///     ClassificationDescriptor, ClassificationTag, ComponentId, ComponentKind,
///     ComponentRegistration,
/// };
/// use trellis::registry::ports::ComponentPool;
///
/// let pool = InMemoryComponentPool::new();
/// let log_task = ComponentId::new("logTask").expect("valid id");
/// pool.register(ComponentRegistration::task(log_task.clone()))
///     .expect("first registration");
/// pool.register(
///     ComponentRegistration::workflow(ComponentId::new("onboarding").expect("valid id"))
///         .depends_on(log_task)
///         .with_descriptor(ClassificationDescriptor::tagged(ClassificationTag::Infrastructure)),
/// )
/// .expect("second registration");
///
/// assert_eq!(pool.list_components(ComponentKind::Workflow).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryComponentPool {
    state: Arc<RwLock<InMemoryPoolState>>,
}

#[derive(Debug, Default)]
struct InMemoryPoolState {
    components: BTreeMap<ComponentId, PoolEntry>,
}

#[derive(Debug)]
struct PoolEntry {
    kind: ComponentKind,
    dependencies: BTreeSet<ComponentId>,
    descriptor: Option<ClassificationDescriptor>,
}

impl InMemoryComponentPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pool from a set of registrations.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::DuplicateComponent`] when two
    /// registrations share an identifier.
    pub fn from_registrations(
        registrations: impl IntoIterator<Item = ComponentRegistration>,
    ) -> Result<Self, RegistryDomainError> {
        let pool = Self::new();
        for registration in registrations {
            pool.register(registration)?;
        }
        Ok(pool)
    }

    /// Registers a component.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::DuplicateComponent`] when the
    /// identifier is already registered.
    pub fn register(&self, registration: ComponentRegistration) -> Result<(), RegistryDomainError> {
        let (component, dependencies, descriptor) = registration.into_parts();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.components.contains_key(component.id()) {
            return Err(RegistryDomainError::DuplicateComponent(
                component.id().clone(),
            ));
        }

        state.components.insert(
            component.id().clone(),
            PoolEntry {
                kind: component.kind(),
                dependencies,
                descriptor,
            },
        );
        Ok(())
    }

    /// Returns the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().components.len()
    }

    /// Returns whether no component is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().components.is_empty()
    }

    /// Returns the kind of a registered component.
    #[must_use]
    pub fn kind_of(&self, id: &ComponentId) -> Option<ComponentKind> {
        self.read().components.get(id).map(|entry| entry.kind)
    }

    fn read(&self) -> RwLockReadGuard<'_, InMemoryPoolState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ComponentPool for InMemoryComponentPool {
    fn list_components(&self, kind: ComponentKind) -> BTreeSet<ComponentId> {
        self.read()
            .components
            .iter()
            .filter(|(_, entry)| entry.kind == kind)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn dependencies_of(&self, id: &ComponentId) -> BTreeSet<ComponentId> {
        self.read()
            .components
            .get(id)
            .map(|entry| entry.dependencies.clone())
            .unwrap_or_default()
    }

    fn metadata_of(&self, id: &ComponentId) -> Option<ClassificationDescriptor> {
        self.read()
            .components
            .get(id)
            .and_then(|entry| entry.descriptor.clone())
    }
}
