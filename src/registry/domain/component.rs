//! Component identity, kind, and registration declarations.

use super::{ClassificationDescriptor, ComponentId, ParseComponentKindError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Role of a component inside the pool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// An orchestration unit composed of tasks.
    Workflow,
    /// A unit of work, possibly a checker for another workflow.
    Task,
}

impl ComponentKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ComponentKind {
    type Error = ParseComponentKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "workflow" => Ok(Self::Workflow),
            "task" => Ok(Self::Task),
            _ => Err(ParseComponentKindError(value.to_owned())),
        }
    }
}

/// A component known to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    kind: ComponentKind,
}

impl Component {
    /// Creates a component.
    #[must_use]
    pub const fn new(id: ComponentId, kind: ComponentKind) -> Self {
        Self { id, kind }
    }

    /// Returns the component identifier.
    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Returns the component kind.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }
}

/// Everything a component declares about itself when it joins a pool.
///
/// Dependencies are plain identifiers; they may name components that are
/// never registered, in which case they are ignored by the registry builder.
/// `descriptor` is `None` when the component carries no classification
/// metadata at all, which is distinct from an empty descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRegistration {
    component: Component,
    dependencies: BTreeSet<ComponentId>,
    descriptor: Option<ClassificationDescriptor>,
}

impl ComponentRegistration {
    /// Declares a workflow component with no dependencies or metadata.
    #[must_use]
    pub const fn workflow(id: ComponentId) -> Self {
        Self::new(Component::new(id, ComponentKind::Workflow))
    }

    /// Declares a task component with no dependencies or metadata.
    #[must_use]
    pub const fn task(id: ComponentId) -> Self {
        Self::new(Component::new(id, ComponentKind::Task))
    }

    /// Declares a component with no dependencies or metadata.
    #[must_use]
    pub const fn new(component: Component) -> Self {
        Self {
            component,
            dependencies: BTreeSet::new(),
            descriptor: None,
        }
    }

    /// Adds a single dependency.
    #[must_use]
    pub fn depends_on(mut self, dependency: ComponentId) -> Self {
        self.dependencies.insert(dependency);
        self
    }

    /// Adds several dependencies.
    #[must_use]
    pub fn with_dependencies(
        mut self,
        dependencies: impl IntoIterator<Item = ComponentId>,
    ) -> Self {
        self.dependencies.extend(dependencies);
        self
    }

    /// Attaches a classification descriptor.
    #[must_use]
    pub fn with_descriptor(mut self, descriptor: ClassificationDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Returns the declared component.
    #[must_use]
    pub const fn component(&self) -> &Component {
        &self.component
    }

    /// Returns the declared dependencies.
    #[must_use]
    pub const fn dependencies(&self) -> &BTreeSet<ComponentId> {
        &self.dependencies
    }

    /// Returns the classification descriptor, if any.
    #[must_use]
    pub const fn descriptor(&self) -> Option<&ClassificationDescriptor> {
        self.descriptor.as_ref()
    }

    /// Splits the registration into its parts.
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Component,
        BTreeSet<ComponentId>,
        Option<ClassificationDescriptor>,
    ) {
        (self.component, self.dependencies, self.descriptor)
    }
}
