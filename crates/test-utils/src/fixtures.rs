//! Common test fixtures for topographic background tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Seed used by the reference end-to-end scenarios.
pub const REFERENCE_SEED: u32 = 42;

/// Common viewport sizes as `(width, height)`.
pub mod viewports {
    /// Smallest viewport giving a 4x4 lattice with 25px cells
    pub const GRID_4X4: (u32, u32) = (75, 75);

    /// Typical phone portrait viewport
    pub const MOBILE: (u32, u32) = (390, 844);

    /// Typical laptop viewport
    pub const DESKTOP: (u32, u32) = (1280, 720);

    /// Full HD
    pub const FULL_HD: (u32, u32) = (1920, 1080);

    /// Degenerate, nothing to draw
    pub const EMPTY: (u32, u32) = (0, 0);
}

/// A scratch directory with a file path inside it.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_output_path(file_name: &str) -> (TempDir, PathBuf) {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => panic!("failed to create temp dir: {}", e),
    };
    let path = dir.path().join(file_name);
    (dir, path)
}
