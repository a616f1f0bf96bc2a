//! Test data generators for synthetic height fields.
//!
//! Every generator returns row-major `Vec<f64>` data with values in `[0, 1]`
//! so it can be wrapped with `HeightField::from_vec` in tests.

/// Creates a grid filled with a constant value.
///
/// A uniform field never crosses any threshold, so it is the base case for
/// "no contour" tests.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a left-to-right ramp from 0.0 in the first column to 1.0 in the
/// last.
///
/// Every threshold strictly between 0 and 1 crosses each row exactly once,
/// producing one vertical contour.
pub fn create_ramp_grid(width: usize, height: usize) -> Vec<f64> {
    let span = width.saturating_sub(1).max(1) as f64;
    let mut data = Vec::with_capacity(width * height);
    for _row in 0..height {
        for col in 0..width {
            data.push(col as f64 / span);
        }
    }
    data
}

/// Creates a single smooth hill centered in the grid.
///
/// Values fall off from 1.0 at the center to roughly 0.0 at the corners,
/// so mid-range thresholds produce closed rings.
pub fn create_peak_grid(width: usize, height: usize) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt().max(1.0);

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let dx = col as f64 - cx;
            let dy = row as f64 - cy;
            let d = (dx * dx + dy * dy).sqrt() / max_dist;
            data.push((1.0 - d).clamp(0.0, 1.0));
        }
    }
    data
}

/// Creates a checkerboard of 0.0 and 1.0.
///
/// Every interior cell is a saddle (marching squares state 5 or 10).
pub fn create_checkerboard_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (row + col) % 2 == 0 { 1.0 } else { 0.0 });
        }
    }
    data
}

/// Creates a grid of reproducible pseudo-random values in `[0, 1]`.
///
/// Uses a 31-bit linear congruential generator so the same seed always
/// yields the same grid.
pub fn create_random_grid(width: usize, height: usize, seed: u32) -> Vec<f64> {
    let mut rng = Lcg::new(seed);
    (0..width * height).map(|_| rng.next_unit()).collect()
}

/// Minimal seeded generator for test data.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 1]`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345)) & 0x7fff_ffff;
        self.state as f64 / 0x7fff_ffff as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_grid() {
        let grid = create_constant_grid(4, 3, 0.9);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|&v| v == 0.9));
    }

    #[test]
    fn test_ramp_grid_endpoints() {
        let grid = create_ramp_grid(5, 2);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[4], 1.0);
        assert_eq!(grid[5], 0.0);
    }

    #[test]
    fn test_peak_grid_center_is_max() {
        let grid = create_peak_grid(5, 5);
        let center = grid[2 * 5 + 2];
        assert_eq!(center, 1.0);
        assert!(grid.iter().all(|&v| v <= center));
    }

    #[test]
    fn test_random_grid_reproducible() {
        let a = create_random_grid(8, 8, 99);
        let b = create_random_grid(8, 8, 99);
        let c = create_random_grid(8, 8, 100);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
