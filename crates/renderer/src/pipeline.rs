//! One full render pass: noise field, contours, stitching and smoothing.
//!
//! A pass is pure compute over data it owns. The same viewport, seed and
//! style always produce the same field and polylines.

use topo_common::Viewport;

use crate::contour::{connect_segments, march_squares, Polyline};
use crate::noise::{generate_height_field, HeightField};
use crate::smooth::{path_data, smooth_polyline};
use crate::style::{BackgroundStyle, LevelStyle};
use crate::surface::{ContourPath, Surface};

/// Stitched contours for a single level.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourLayer {
    pub level: LevelStyle,
    /// Raw segment count before stitching
    pub segment_count: usize,
    pub polylines: Vec<Polyline>,
}

/// Counts describing a finished pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub levels: usize,
    pub segments: usize,
    pub polylines: usize,
    pub points: usize,
}

#[derive(Debug, Clone)]
pub struct RenderPass {
    pub viewport: Viewport,
    pub seed: u32,
    pub field: HeightField,
    pub layers: Vec<ContourLayer>,
}

impl RenderPass {
    pub fn stats(&self) -> PassStats {
        PassStats {
            levels: self.layers.len(),
            segments: self.layers.iter().map(|l| l.segment_count).sum(),
            polylines: self.layers.iter().map(|l| l.polylines.len()).sum(),
            points: self
                .layers
                .iter()
                .flat_map(|l| &l.polylines)
                .map(|p| p.len())
                .sum(),
        }
    }

    /// Clear `surface` and draw every level's curves onto it.
    ///
    /// Returns the number of paths drawn.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &BackgroundStyle) -> usize {
        surface.clear();
        surface.set_view_box(self.viewport);

        let mut drawn = 0;
        for layer in &self.layers {
            for polyline in &layer.polylines {
                let commands = smooth_polyline(&polyline.points);
                if commands.is_empty() {
                    continue;
                }
                surface.draw_path(ContourPath {
                    level: layer.level.index,
                    data: path_data(&commands),
                    opacity: layer.level.opacity,
                    stroke_width: style.stroke.width,
                });
                drawn += 1;
            }
        }
        drawn
    }
}

/// Run the pipeline for `viewport` with `seed`.
pub fn render_pass(viewport: Viewport, seed: u32, style: &BackgroundStyle) -> RenderPass {
    let (cols, rows) = viewport.grid_dimensions(style.cell_size);
    let field = generate_height_field(cols, rows, seed, &style.noise);

    let layers: Vec<ContourLayer> = style
        .levels
        .levels()
        .into_iter()
        .map(|level| {
            let segments = march_squares(&field, level.threshold, style.cell_size);
            let segment_count = segments.len();
            let polylines = connect_segments(segments);

            tracing::trace!(
                level = level.index,
                threshold = level.threshold,
                segments = segment_count,
                polylines = polylines.len(),
                "Extracted contour level"
            );

            ContourLayer {
                level,
                segment_count,
                polylines,
            }
        })
        .collect();

    let pass = RenderPass {
        viewport,
        seed,
        field,
        layers,
    };

    let stats = pass.stats();
    tracing::debug!(
        width = viewport.width,
        height = viewport.height,
        cols = cols,
        rows = rows,
        seed = seed,
        levels = stats.levels,
        segments = stats.segments,
        polylines = stats.polylines,
        points = stats.points,
        "Render pass complete"
    );

    pass
}
