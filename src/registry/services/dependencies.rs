//! Dependency views over a component pool.

use crate::registry::{
    domain::{ComponentId, ComponentKind},
    ports::ComponentPool,
};
use std::collections::BTreeSet;

/// Answers dependency questions without instantiating components.
#[derive(Debug)]
pub struct DependencyResolver<'a, P: ComponentPool + ?Sized> {
    pool: &'a P,
}

impl<'a, P: ComponentPool + ?Sized> DependencyResolver<'a, P> {
    /// Creates a resolver reading from `pool`.
    #[must_use]
    pub const fn new(pool: &'a P) -> Self {
        Self { pool }
    }

    /// Returns the declared dependencies of a component.
    ///
    /// Unknown components have no dependencies.
    #[must_use]
    pub fn dependencies_of(&self, component: &ComponentId) -> BTreeSet<ComponentId> {
        self.pool.dependencies_of(component)
    }

    /// Returns the dependencies that are pool components of `kind`.
    ///
    /// Dependencies naming components absent from the pool are dropped.
    #[must_use]
    pub fn dependencies_of_kind(
        &self,
        component: &ComponentId,
        kind: ComponentKind,
    ) -> BTreeSet<ComponentId> {
        let known = self.pool.list_components(kind);
        self.pool
            .dependencies_of(component)
            .into_iter()
            .filter(|dependency| known.contains(dependency))
            .collect()
    }
}
