//! JSON pool manifests declaring components and their dependencies.
//!
//! A manifest lists every component of a pool:
//!
//! ```json
//! {
//!   "components": [
//!     {
//!       "id": "onboarding",
//!       "kind": "workflow",
//!       "dependencies": ["logTask", "httpTask"],
//!       "classification": { "infrastructure": {} }
//!     },
//!     { "id": "logTask", "kind": "task" }
//!   ]
//! }
//! ```
//!
//! Omitting `classification` declares a component without metadata; an empty
//! object declares metadata without any tag.

use super::memory::InMemoryComponentPool;
use crate::registry::domain::{
    ClassificationDescriptor, Component, ComponentId, ComponentKind, ComponentRegistration,
    RegistryDomainError,
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading or applying a pool manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest path does not name a file.
    #[error("manifest path '{0}' must include a file name")]
    MissingFileName(Utf8PathBuf),

    /// The manifest file could not be read.
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        /// Manifest location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for the expected shape.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A declared component was rejected by the pool.
    #[error(transparent)]
    Domain(#[from] RegistryDomainError),
}

/// Parsed pool manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolManifest {
    components: Vec<ManifestComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestComponent {
    id: ComponentId,
    kind: ComponentKind,
    #[serde(default)]
    dependencies: Vec<ComponentId>,
    #[serde(default)]
    classification: Option<ClassificationDescriptor>,
}

impl PoolManifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] when the JSON is malformed, names an
    /// unknown kind or classification tag, or carries an invalid identifier.
    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] when the file cannot be read and
    /// [`ManifestError::Parse`] when its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ManifestError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ManifestError::MissingFileName(path.to_path_buf()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let read_error = |source: std::io::Error| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let contents = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&contents)
    }

    /// Returns the number of declared components.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns whether the manifest declares no components.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Converts the manifest into component registrations, in file order.
    #[must_use]
    pub fn into_registrations(self) -> Vec<ComponentRegistration> {
        self.components
            .into_iter()
            .map(|declared| {
                let component = Component::new(declared.id, declared.kind);
                let registration = ComponentRegistration::new(component)
                    .with_dependencies(declared.dependencies);
                match declared.classification {
                    Some(descriptor) => registration.with_descriptor(descriptor),
                    None => registration,
                }
            })
            .collect()
    }

    /// Builds an in-memory pool holding every declared component.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Domain`] when two components share an
    /// identifier.
    pub fn into_pool(self) -> Result<InMemoryComponentPool, ManifestError> {
        Ok(InMemoryComponentPool::from_registrations(
            self.into_registrations(),
        )?)
    }
}
