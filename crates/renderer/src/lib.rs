//! Procedural topographic contour rendering.
//!
//! Pipeline stages, each consuming the previous stage's output:
//! - Height field synthesis (fractal value noise)
//! - Contour extraction (marching squares)
//! - Segment stitching into polylines
//! - Curve smoothing into cubic Béziers
//! - Drawing onto a surface (SVG, optionally rasterized to PNG)

pub mod contour;
pub mod noise;
pub mod pipeline;
pub mod raster;
pub mod smooth;
pub mod style;
pub mod surface;
pub mod svg;

pub use contour::{Point, Polyline, Segment};
pub use noise::{HeightField, NoiseParams};
pub use pipeline::{render_pass, ContourLayer, PassStats, RenderPass};
pub use style::{BackgroundStyle, LevelStyle};
pub use surface::{ContourPath, Surface};
pub use svg::SvgSurface;
