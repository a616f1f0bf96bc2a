//! Shared test utilities for the topo-background workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic height field generators
//! - Reference seeds, viewports and scratch output paths
//! - Approximate float assertions
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_approx_eq, create_peak_grid, REFERENCE_SEED};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(level.threshold, 0.34, 1e-9);
/// assert_approx_eq!(point.x, 12.5, 1e-9);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro asserting that a point-like value (anything with `x` and `y`
/// fields) lies within `epsilon` of the expected coordinates on both axes.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_point_near;
///
/// assert_point_near!(segment.start, (12.5, 0.0), 1e-9);
/// ```
#[macro_export]
macro_rules! assert_point_near {
    ($point:expr, ($x:expr, $y:expr), $epsilon:expr) => {{
        let point = $point;
        $crate::assert_approx_eq!(point.x, $x, $epsilon);
        $crate::assert_approx_eq!(point.y, $y, $epsilon);
    }};
}
