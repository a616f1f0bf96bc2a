//! Style configuration for the topographic background.

use serde::{Deserialize, Serialize};
use topo_common::{Rgb, Theme, TopoError, TopoResult};

use crate::noise::NoiseParams;

/// Threshold and stroke opacity for one contour level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStyle {
    pub index: usize,
    pub threshold: f64,
    pub opacity: f64,
}

/// Linear spacing of contour levels.
///
/// Level `i` of `count` sits at `threshold_min + (i / count) * threshold_span`
/// and is drawn with `opacity_min + (i / count) * opacity_span`, so the upper
/// bound of each range is never reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSpec {
    pub count: usize,
    pub threshold_min: f64,
    pub threshold_span: f64,
    pub opacity_min: f64,
    pub opacity_span: f64,
}

impl Default for LevelSpec {
    fn default() -> Self {
        Self {
            count: 10,
            threshold_min: 0.3,
            threshold_span: 0.4,
            opacity_min: 0.08,
            opacity_span: 0.12,
        }
    }
}

impl LevelSpec {
    /// Expand into per-level thresholds and opacities, lowest first.
    pub fn levels(&self) -> Vec<LevelStyle> {
        (0..self.count)
            .map(|i| {
                let t = i as f64 / self.count as f64;
                LevelStyle {
                    index: i,
                    threshold: self.threshold_min + t * self.threshold_span,
                    opacity: self.opacity_min + t * self.opacity_span,
                }
            })
            .collect()
    }
}

/// Stroke appearance shared by every contour path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: 1.2 }
    }
}

/// Stroke color per theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub light: Rgb,
    pub dark: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: Rgb::new(0xa3, 0xb8, 0xa0),
            dark: Rgb::new(0x5c, 0x73, 0x58),
        }
    }
}

impl Palette {
    pub fn color_for(&self, theme: Theme) -> Rgb {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }
}

/// Everything that shapes a render pass apart from viewport, seed and theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundStyle {
    /// Pixel size of one grid cell
    pub cell_size: f64,
    pub noise: NoiseParams,
    pub levels: LevelSpec,
    pub stroke: StrokeStyle,
    pub palette: Palette,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        Self {
            cell_size: 25.0,
            noise: NoiseParams::default(),
            levels: LevelSpec::default(),
            stroke: StrokeStyle::default(),
            palette: Palette::default(),
        }
    }
}

impl BackgroundStyle {
    pub fn validate(&self) -> TopoResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(TopoError::ConfigError(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !(self.noise.scale.is_finite() && self.noise.scale > 0.0) {
            return Err(TopoError::ConfigError(format!(
                "noise.scale must be positive, got {}",
                self.noise.scale
            )));
        }
        if self.noise.octaves == 0 {
            return Err(TopoError::ConfigError(
                "noise.octaves must be at least 1".to_string(),
            ));
        }
        if self.levels.count == 0 {
            return Err(TopoError::ConfigError(
                "levels.count must be at least 1".to_string(),
            ));
        }
        let max_opacity = self.levels.opacity_min + self.levels.opacity_span;
        if self.levels.opacity_min < 0.0 || max_opacity > 1.0 {
            return Err(TopoError::ConfigError(format!(
                "level opacities must stay within [0, 1], got {}..{}",
                self.levels.opacity_min, max_opacity
            )));
        }
        if !(self.stroke.width.is_finite() && self.stroke.width > 0.0) {
            return Err(TopoError::ConfigError(format!(
                "stroke.width must be positive, got {}",
                self.stroke.width
            )));
        }
        Ok(())
    }
}
