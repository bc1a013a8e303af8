//! Validated component identifier.

use super::RegistryDomainError;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for a component identifier.
const MAX_COMPONENT_ID_LENGTH: usize = 255;

/// Unique name of a workflow or task component within a pool.
///
/// Identifiers are trimmed but otherwise case-preserving, so `logTask` and
/// `logtask` are distinct components. Ordering is plain string ordering, which
/// is what every deterministic tie-break in the registry relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Creates a validated component identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError`] when the identifier is empty, longer
    /// than 255 characters, or contains whitespace or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let normalized = value.into().trim().to_owned();

        if normalized.is_empty() {
            return Err(RegistryDomainError::EmptyComponentId);
        }

        if normalized
            .chars()
            .any(|character| character.is_whitespace() || character.is_control())
        {
            return Err(RegistryDomainError::InvalidComponentId(normalized));
        }

        if normalized.chars().count() > MAX_COMPONENT_ID_LENGTH {
            return Err(RegistryDomainError::ComponentIdTooLong(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<&str> for ComponentId {
    type Error = RegistryDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
