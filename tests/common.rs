//! Shared test helpers for the hostprobe crate integration tests.

use hostprobe::{BackendConfig, LocalBackend};

/// Backend with default (empty) settings.
pub fn backend() -> LocalBackend {
    LocalBackend::new(BackendConfig::default())
}

/// Create a temporary directory to build fixture trees in.
pub fn with_temp_root() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}
