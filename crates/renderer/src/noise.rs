//! Height field synthesis using fractal value noise.
//!
//! Each integer lattice point gets a pseudo-random value from a sine hash of
//! its coordinates and the seed. Values between lattice points are blended
//! bilinearly with a smootherstep ease, and several octaves are summed
//! (fractal Brownian motion) to give terrain-like variation in `[0, 1]`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parameters for the fractal noise sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// Number of octaves to sum
    pub octaves: u32,
    /// Grid-index to noise-space scale factor
    pub scale: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            scale: 0.08,
        }
    }
}

/// A 2D scalar grid in row-major order.
///
/// Immutable once built; a render pass owns its field exclusively.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    cols: usize,
    rows: usize,
    data: Vec<f64>,
}

impl HeightField {
    /// Build a field by evaluating `f(col, row)` at every grid point.
    pub fn from_fn(cols: usize, rows: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(col, row));
            }
        }
        Self { cols, rows, data }
    }

    /// Wrap existing row-major data. Returns `None` if the length does not
    /// match `cols * rows`.
    pub fn from_vec(cols: usize, rows: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == cols * rows).then_some(Self { cols, rows, data })
    }

    /// A field with every cell set to `value`.
    pub fn uniform(cols: usize, rows: usize, value: f64) -> Self {
        Self {
            cols,
            rows,
            data: vec![value; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Value at (row, col). Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Minimum and maximum values, or `None` for an empty field.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.data.is_empty() {
            return None;
        }
        Some(
            self.data
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                    (min.min(v), max.max(v))
                }),
        )
    }
}

/// Value noise sampler with a per-instance lattice cache.
///
/// The cache is keyed by lattice coordinates and lives only as long as the
/// sampler, which is created for a single field generation.
pub struct ValueNoise {
    seed: f64,
    lattice: HashMap<(i64, i64), f64>,
}

impl ValueNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            seed: seed as f64,
            lattice: HashMap::new(),
        }
    }

    /// Pseudo-random value in `[0, 1)` for lattice point `(ix, iy)`.
    pub fn lattice_value(&mut self, ix: i64, iy: i64) -> f64 {
        let seed = self.seed;
        *self
            .lattice
            .entry((ix, iy))
            .or_insert_with(|| hash_lattice(ix, iy, seed))
    }

    /// Smoothly interpolated noise at a continuous position.
    pub fn sample(&mut self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let sx = smootherstep(x - x0);
        let sy = smootherstep(y - y0);

        let (ix, iy) = (x0 as i64, y0 as i64);
        let n00 = self.lattice_value(ix, iy);
        let n10 = self.lattice_value(ix + 1, iy);
        let n01 = self.lattice_value(ix, iy + 1);
        let n11 = self.lattice_value(ix + 1, iy + 1);

        let nx0 = lerp(n00, n10, sx);
        let nx1 = lerp(n01, n11, sx);
        lerp(nx0, nx1, sy)
    }

    /// Fractal sum of `params.octaves` octaves, normalized to `[0, 1]`.
    pub fn fbm(&mut self, x: f64, y: f64, params: &NoiseParams) -> f64 {
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..params.octaves {
            value += self.sample(x * frequency * params.scale, y * frequency * params.scale)
                * amplitude;
            max_value += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        if max_value > 0.0 {
            value / max_value
        } else {
            0.0
        }
    }

    /// Number of lattice points evaluated so far.
    pub fn cached_points(&self) -> usize {
        self.lattice.len()
    }
}

/// Generate a `cols` x `rows` height field for `seed`.
///
/// Identical arguments always produce a bit-identical field.
pub fn generate_height_field(
    cols: usize,
    rows: usize,
    seed: u32,
    params: &NoiseParams,
) -> HeightField {
    let mut noise = ValueNoise::new(seed);
    let field = HeightField::from_fn(cols, rows, |col, row| {
        noise.fbm(col as f64, row as f64, params)
    });

    tracing::trace!(
        cols = cols,
        rows = rows,
        seed = seed,
        lattice_points = noise.cached_points(),
        "Generated height field"
    );

    field
}

/// Sine hash of a lattice coordinate, reduced to its fractional part.
fn hash_lattice(ix: i64, iy: i64, seed: f64) -> f64 {
    let h = (ix as f64 * 12.9898 + iy as f64 * 78.233 + seed).sin() * 43758.5453123;
    h - h.floor()
}

/// Quintic ease `t³(t(6t − 15) + 10)`.
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lattice_value_is_cached() {
        let mut noise = ValueNoise::new(7);
        let a = noise.lattice_value(3, -2);
        let b = noise.lattice_value(3, -2);
        assert_eq!(a, b);
        assert_eq!(noise.cached_points(), 1);
    }

    #[test]
    fn test_sample_hits_lattice_values() {
        let mut noise = ValueNoise::new(11);
        let corner = noise.lattice_value(2, 5);
        assert_eq!(noise.sample(2.0, 5.0), corner);
    }

    #[test]
    fn test_zero_octaves_is_flat() {
        let params = NoiseParams {
            octaves: 0,
            scale: 0.08,
        };
        let mut noise = ValueNoise::new(1);
        assert_eq!(noise.fbm(3.0, 4.0, &params), 0.0);
    }
}
