//! Build lifecycle state of a workflow registry.

use super::{ParseBuildStateError, RegistryDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the registry build.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// No build has been attempted.
    #[default]
    NotBuilt,
    /// A build pass is running.
    InProgress,
    /// The last build completed and was published.
    Built,
    /// The last build aborted on a fatal workflow error.
    Failed,
}

impl BuildState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotBuilt => "not_built",
            Self::InProgress => "in_progress",
            Self::Built => "built",
            Self::Failed => "failed",
        }
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::NotBuilt | Self::Built | Self::Failed, Self::InProgress)
                | (Self::InProgress, Self::Built | Self::Failed)
        )
    }

    /// Returns the next state or an error when the transition is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError::InvalidBuildTransition`] when the
    /// transition is not allowed.
    pub fn transition_to(self, target: Self) -> Result<Self, RegistryDomainError> {
        if self.can_transition_to(target) {
            return Ok(target);
        }

        Err(RegistryDomainError::InvalidBuildTransition {
            from: self.as_str().to_owned(),
            to: target.as_str().to_owned(),
        })
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for BuildState {
    type Error = ParseBuildStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_built" => Ok(Self::NotBuilt),
            "in_progress" => Ok(Self::InProgress),
            "built" => Ok(Self::Built),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseBuildStateError(value.to_owned())),
        }
    }
}
