//! PNG export of the background by rasterizing its SVG document.

use topo_common::{TopoError, TopoResult};

use crate::svg::SvgSurface;

/// Render an SVG document to PNG bytes at its intrinsic size.
pub fn rasterize_svg(svg_content: &str) -> TopoResult<Vec<u8>> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &opt)
        .map_err(|e| TopoError::RasterError(format!("SVG parse failed: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        TopoError::RasterError(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;

    // Transparent background; only the strokes are painted
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| TopoError::RasterError(format!("PNG encode failed: {}", e)))
}

/// Rasterize the current contents of an SVG surface.
pub fn render_png(surface: &SvgSurface) -> TopoResult<Vec<u8>> {
    rasterize_svg(&surface.to_svg_string())
}
