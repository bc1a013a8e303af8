//! Resolution of a component's classification from pool metadata.

use crate::registry::{
    domain::{Classification, ClassificationError, ClassificationTag, ComponentId},
    ports::ComponentPool,
};

/// Looks up classifications against a component pool.
#[derive(Debug)]
pub struct ClassificationResolver<'a, P: ComponentPool + ?Sized> {
    pool: &'a P,
}

impl<'a, P: ComponentPool + ?Sized> ClassificationResolver<'a, P> {
    /// Creates a resolver reading from `pool`.
    #[must_use]
    pub const fn new(pool: &'a P) -> Self {
        Self { pool }
    }

    /// Returns the first candidate tag present on the component.
    ///
    /// Candidates are tried in the order given and the search stops at the
    /// first match.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::NoMetadata`] when the component has no
    /// descriptor and [`ClassificationError::NoClassification`] when none of
    /// the candidates is present.
    pub fn classify(
        &self,
        component: &ComponentId,
        candidates: &[ClassificationTag],
    ) -> Result<Classification, ClassificationError> {
        let descriptor = self
            .pool
            .metadata_of(component)
            .ok_or_else(|| ClassificationError::NoMetadata {
                component: component.clone(),
            })?;

        candidates
            .iter()
            .find_map(|tag| {
                descriptor
                    .attributes(*tag)
                    .map(|attributes| Classification::new(*tag, attributes.clone()))
            })
            .ok_or_else(|| ClassificationError::NoClassification {
                component: component.clone(),
                candidates: candidates.to_vec(),
            })
    }
}
