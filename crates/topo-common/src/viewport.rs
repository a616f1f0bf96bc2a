//! Viewport dimensions and the contour grid derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{TopoError, TopoResult};

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a `WIDTHxHEIGHT` string, e.g. `"1280x720"`.
    pub fn parse(s: &str) -> TopoResult<Self> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| TopoError::InvalidViewport(s.to_string()))?;

        let width = w
            .trim()
            .parse()
            .map_err(|_| TopoError::InvalidViewport(format!("bad width '{}'", w)))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| TopoError::InvalidViewport(format!("bad height '{}'", h)))?;

        Ok(Self { width, height })
    }

    /// Number of lattice columns and rows needed to cover the viewport with
    /// cells of `cell_size` pixels, including the closing edge.
    pub fn grid_dimensions(&self, cell_size: f64) -> (usize, usize) {
        if cell_size <= 0.0 {
            return (0, 0);
        }
        let cols = (self.width as f64 / cell_size).ceil() as usize + 1;
        let rows = (self.height as f64 / cell_size).ceil() as usize + 1;
        (cols, rows)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = TopoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
