//! Drawing surfaces that receive finished contour paths.

use topo_common::{Rgb, TopoResult, Viewport};

/// One stroked contour curve, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ContourPath {
    /// Index of the contour level the path belongs to
    pub level: usize,
    /// SVG path data
    pub data: String,
    /// Stroke opacity in `[0, 1]`
    pub opacity: f64,
    /// Stroke width in pixels
    pub stroke_width: f64,
}

/// A target the render pass draws into.
///
/// A pass clears the surface, sets its coordinate space, then appends paths.
/// Paths are stroked with the surface's current color, so a theme change only
/// needs [`Surface::set_stroke_color`].
pub trait Surface {
    /// Resize the coordinate space to cover `viewport`.
    fn set_view_box(&mut self, viewport: Viewport);

    /// Remove every drawn path.
    fn clear(&mut self);

    fn draw_path(&mut self, path: ContourPath);

    fn set_stroke_color(&mut self, color: Rgb);

    /// Called once all paths of a pass are drawn.
    fn present(&mut self) -> TopoResult<()> {
        Ok(())
    }
}
