#![allow(clippy::module_name_repetitions)]
//! Canonical location of the shelter dataset.
//!
//! Resolution order: an explicit path, then the `SHELTER_MAP_DATASET`
//! environment variable, then `data/shelters.csv` under the project root.

use std::path::{Path, PathBuf};

/// Environment variable overriding the dataset location.
pub const DATASET_ENV_VAR: &str = "SHELTER_MAP_DATASET";

/// File name of the bundled dataset inside [`data_dir`].
pub const DEFAULT_DATASET_FILE: &str = "shelters.csv";

/// Returns the workspace root directory.
///
/// Resolved at compile time from `CARGO_MANIFEST_DIR`.
#[must_use]
pub fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Returns the `data/` directory path.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_root().join("data")
}

/// Returns the bundled dataset path.
#[must_use]
pub fn default_dataset_path() -> PathBuf {
    data_dir().join(DEFAULT_DATASET_FILE)
}

/// Resolves the dataset path to load.
#[must_use]
pub fn dataset_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match std::env::var(DATASET_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => default_dataset_path(),
    }
}
