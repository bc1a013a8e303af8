//! Pool manifests read from disk.

use super::helpers::{ONBOARDING_MANIFEST, onboarding_registrations, service_for};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tempfile::TempDir;
use trellis::registry::{
    adapters::{ManifestError, PoolManifest, memory::InMemoryComponentPool},
    services::{RegistryBuilder, RegistryConfig},
};

struct ManifestDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl ManifestDir {
    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("manifest should be written");
        path
    }
}

#[fixture]
fn manifest_dir() -> ManifestDir {
    let dir = TempDir::new().expect("temporary directory should be created");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .expect("temporary directory should be UTF-8");
    ManifestDir { _dir: dir, root }
}

#[rstest]
fn loaded_manifest_builds_same_records_as_registrations(manifest_dir: ManifestDir) {
    let path = manifest_dir.write("pool.json", ONBOARDING_MANIFEST);
    let manifest = PoolManifest::load(&path).expect("manifest should load");
    assert_eq!(manifest.len(), 5);
    let from_manifest = Arc::new(manifest.into_pool().expect("pool should build"));
    let programmatic = Arc::new(
        InMemoryComponentPool::from_registrations(onboarding_registrations())
            .expect("pool should build"),
    );

    let loaded = service_for(&from_manifest, RegistryConfig::default())
        .initialize()
        .expect("manifest build should succeed");
    let expected = RegistryBuilder::new(programmatic, RegistryConfig::default())
        .build(loaded.built_at())
        .expect("programmatic build should succeed");

    assert!(loaded.same_records(&expected));
}

#[rstest]
fn missing_manifest_reports_read_error(manifest_dir: ManifestDir) {
    let path = manifest_dir.root.join("absent.json");

    let result = PoolManifest::load(&path);

    assert!(matches!(result, Err(ManifestError::Read { .. })));
}

#[rstest]
fn malformed_manifest_reports_parse_error(manifest_dir: ManifestDir) {
    let path = manifest_dir.write("pool.json", r#"{"components": [{"id": "x"}]}"#);

    let result = PoolManifest::load(&path);

    assert!(matches!(result, Err(ManifestError::Parse(_))));
}

#[rstest]
fn empty_manifest_builds_empty_registry(manifest_dir: ManifestDir) {
    let path = manifest_dir.write("empty.json", r#"{"components": []}"#);
    let manifest = PoolManifest::load(&path).expect("manifest should load");
    assert!(manifest.is_empty());
    let pool = Arc::new(manifest.into_pool().expect("pool should build"));

    let snapshot = service_for(&pool, RegistryConfig::default())
        .initialize()
        .expect("empty build should succeed");

    assert!(snapshot.definitions().is_empty());
    assert!(snapshot.checkers().is_empty());
}
