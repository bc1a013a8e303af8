//! Build configuration for the workflow registry.

/// How a checker task with several owning workflows is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnerSelectionPolicy {
    /// Choose the workflow with the lowest identifier and log a warning.
    #[default]
    LowestIdentifier,
    /// Log a warning and record no association for the task.
    RejectAmbiguous,
}

impl OwnerSelectionPolicy {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowestIdentifier => "lowest_identifier",
            Self::RejectAmbiguous => "reject_ambiguous",
        }
    }
}

/// Options applied to every registry build pass.
///
/// # Examples
///
/// ```
/// use trellis::registry::services::{OwnerSelectionPolicy, RegistryConfig};
///
/// let config = RegistryConfig::default();
/// assert_eq!(config.owner_selection, OwnerSelectionPolicy::LowestIdentifier);
///
/// let strict = RegistryConfig::strict();
/// assert_eq!(strict.owner_selection, OwnerSelectionPolicy::RejectAmbiguous);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Resolution applied when a task depends on several workflows.
    pub owner_selection: OwnerSelectionPolicy,
}

impl RegistryConfig {
    /// Creates a configuration that skips tasks with ambiguous owners.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            owner_selection: OwnerSelectionPolicy::RejectAmbiguous,
        }
    }
}
