//! Surface that mirrors every pass to disk.

use std::path::{Path, PathBuf};

use renderer::raster::render_png;
use renderer::{ContourPath, Surface, SvgSurface};
use topo_common::{Rgb, TopoResult, Viewport};
use tracing::debug;

/// An [`SvgSurface`] that writes its document (and optionally a PNG
/// rendering) each time it is presented.
#[derive(Debug, Clone)]
pub struct FileSurface {
    svg: SvgSurface,
    svg_path: PathBuf,
    png_path: Option<PathBuf>,
}

impl FileSurface {
    pub fn new(color: Rgb, svg_path: impl Into<PathBuf>) -> Self {
        Self {
            svg: SvgSurface::new(color),
            svg_path: svg_path.into(),
            png_path: None,
        }
    }

    /// Also write a PNG rendering to `path`.
    pub fn with_png(mut self, path: impl Into<PathBuf>) -> Self {
        self.png_path = Some(path.into());
        self
    }

    pub fn svg(&self) -> &SvgSurface {
        &self.svg
    }

    pub fn svg_path(&self) -> &Path {
        &self.svg_path
    }

    pub fn png_path(&self) -> Option<&Path> {
        self.png_path.as_deref()
    }
}

impl Surface for FileSurface {
    fn set_view_box(&mut self, viewport: Viewport) {
        self.svg.set_view_box(viewport);
    }

    fn clear(&mut self) {
        self.svg.clear();
    }

    fn draw_path(&mut self, path: ContourPath) {
        self.svg.draw_path(path);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.svg.set_stroke_color(color);
    }

    fn present(&mut self) -> TopoResult<()> {
        let document = self.svg.to_svg_string();
        std::fs::write(&self.svg_path, &document)?;
        debug!(path = %self.svg_path.display(), bytes = document.len(), "Wrote SVG");

        if let Some(png_path) = &self.png_path {
            let png = render_png(&self.svg)?;
            std::fs::write(png_path, &png)?;
            debug!(path = %png_path.display(), bytes = png.len(), "Wrote PNG");
        }
        Ok(())
    }
}
