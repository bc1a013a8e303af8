//! Error types for workflow registry domain validation and parsing.

use super::{ClassificationTag, ComponentId};
use thiserror::Error;

/// Errors returned while constructing workflow registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryDomainError {
    /// The component identifier is empty after trimming.
    #[error("component identifier must not be empty")]
    EmptyComponentId,

    /// The component identifier contains whitespace or control characters.
    #[error("component identifier '{0}' contains whitespace or control characters")]
    InvalidComponentId(String),

    /// The component identifier exceeds the 255-character limit.
    #[error("component identifier exceeds 255 character limit: {0}")]
    ComponentIdTooLong(String),

    /// A component with the same identifier is already registered.
    #[error("component '{0}' is already registered")]
    DuplicateComponent(ComponentId),

    /// Transitioning between two build states is invalid.
    #[error("invalid registry build transition: {from} -> {to}")]
    InvalidBuildTransition {
        /// Current build state.
        from: String,
        /// Requested target build state.
        to: String,
    },
}

/// Errors returned by classification lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassificationError {
    /// The component carries no classification metadata at all.
    #[error("component '{component}' has no classification metadata")]
    NoMetadata {
        /// Component that was inspected.
        component: ComponentId,
    },

    /// The component has metadata but none of the candidate tags matched.
    #[error(
        "component '{component}' matches none of the candidate tags [{}]",
        join_tags(.candidates)
    )]
    NoClassification {
        /// Component that was inspected.
        component: ComponentId,
        /// Candidate tags in the order they were tried.
        candidates: Vec<ClassificationTag>,
    },
}

impl ClassificationError {
    /// Returns the component the lookup failed for.
    #[must_use]
    pub const fn component(&self) -> &ComponentId {
        match self {
            Self::NoMetadata { component } | Self::NoClassification { component, .. } => component,
        }
    }

    /// Returns a stable label for the failure, without the component.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoMetadata { .. } => "no_metadata",
            Self::NoClassification { .. } => "no_classification",
        }
    }
}

fn join_tags(tags: &[ClassificationTag]) -> String {
    tags.iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned while parsing a classification tag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown classification tag: {0}")]
pub struct ParseClassificationTagError(pub String);

/// Error returned while parsing a component kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown component kind: {0}")]
pub struct ParseComponentKindError(pub String);

/// Error returned while parsing a registry build state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown registry build state: {0}")]
pub struct ParseBuildStateError(pub String);
