//! Shared helpers for the cross-crate scenario tests.

use std::path::PathBuf;

/// Path of a fixture under `tests/testdata/`.
#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

/// Raw bytes of a fixture.
///
/// # Panics
///
/// Panics if the fixture cannot be read; fixtures are part of the repository.
#[must_use]
pub fn read_fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
