//! Component pool port: the static catalogue a registry is built from.

use crate::registry::domain::{ClassificationDescriptor, ComponentId, ComponentKind};
use std::collections::BTreeSet;

/// Read-only view of registered components and their dependency graph.
///
/// Every query is a static lookup; implementations must never instantiate or
/// execute a component to answer it. Unknown identifiers are not errors:
/// they have no dependencies, no metadata, and no kind.
pub trait ComponentPool: Send + Sync {
    /// Lists the identifiers of all components of the given kind.
    fn list_components(&self, kind: ComponentKind) -> BTreeSet<ComponentId>;

    /// Returns the identifiers a component statically depends on.
    fn dependencies_of(&self, id: &ComponentId) -> BTreeSet<ComponentId>;

    /// Returns the classification metadata declared by a component.
    ///
    /// `None` means the component carries no inspectable metadata at all.
    fn metadata_of(&self, id: &ComponentId) -> Option<ClassificationDescriptor>;
}
