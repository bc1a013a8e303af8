//! In-memory copy-on-write publisher for registry snapshots.

use crate::registry::{
    domain::RegistrySnapshot,
    ports::{RegistryPublishError, RegistryPublishResult, RegistryPublisher},
};
use std::sync::{Arc, RwLock};

/// Holds the current registry snapshot behind a single swappable pointer.
///
/// Readers clone the `Arc` and keep reading their snapshot even if a newer
/// one is published in the meantime.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistryPublisher {
    state: Arc<RwLock<PublishedState>>,
}

#[derive(Debug, Default)]
struct PublishedState {
    current: Option<Arc<RegistrySnapshot>>,
    last_generation: u64,
}

impl InMemoryRegistryPublisher {
    /// Creates a publisher with nothing published.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryPublisher for InMemoryRegistryPublisher {
    fn publish(&self, snapshot: RegistrySnapshot) -> RegistryPublishResult<Arc<RegistrySnapshot>> {
        let mut state = self.state.write().map_err(|err| {
            RegistryPublishError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let generation = state.last_generation.saturating_add(1);
        let published = Arc::new(snapshot.with_generation(generation));
        state.last_generation = generation;
        state.current = Some(Arc::clone(&published));
        Ok(published)
    }

    fn current(&self) -> RegistryPublishResult<Option<Arc<RegistrySnapshot>>> {
        let state = self.state.read().map_err(|err| {
            RegistryPublishError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.current.clone())
    }
}
