//! Domain model for workflow registry construction.
//!
//! The registry domain models components and their declared classification
//! metadata, the workflow definitions and checker associations derived from
//! them, and the immutable snapshot a build pass produces. Infrastructure
//! concerns remain outside this boundary.

mod classification;
mod component;
mod definition;
mod error;
mod ids;
mod snapshot;
mod state;

pub use classification::{
    Classification, ClassificationDescriptor, ClassificationTag, TagAttributes,
};
pub use component::{Component, ComponentKind, ComponentRegistration};
pub use definition::{CheckerAssociation, CheckerSettings, WorkflowDefinition};
pub use error::{
    ClassificationError, ParseBuildStateError, ParseClassificationTagError,
    ParseComponentKindError, RegistryDomainError,
};
pub use ids::ComponentId;
pub use snapshot::RegistrySnapshot;
pub use state::BuildState;
