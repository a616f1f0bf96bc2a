//! In-memory SVG surface.
//!
//! Holds the drawn paths of the current pass and serializes them as a
//! standalone SVG document that fills the viewport and ignores pointer input.

use std::fmt::Write as _;

use topo_common::{Rgb, Viewport};

use crate::surface::{ContourPath, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone)]
pub struct SvgSurface {
    viewport: Option<Viewport>,
    color: Rgb,
    paths: Vec<ContourPath>,
}

impl SvgSurface {
    pub fn new(color: Rgb) -> Self {
        Self {
            viewport: None,
            color,
            paths: Vec::new(),
        }
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn paths(&self) -> &[ContourPath] {
        &self.paths
    }

    /// Serialize the surface as an SVG document.
    ///
    /// Paths stroke with `currentColor`; the theme color sits on the root
    /// element so recoloring never touches path data.
    pub fn to_svg_string(&self) -> String {
        let Viewport { width, height } = self.viewport.unwrap_or(Viewport::new(0, 0));
        let path_bytes: usize = self.paths.iter().map(|p| p.data.len() + 160).sum();
        let mut svg = String::with_capacity(256 + path_bytes);

        // Writing to a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid slice" aria-hidden="true" color="{}" style="pointer-events:none">"#,
            SVG_NS, width, height, width, height, self.color
        );

        for path in &self.paths {
            let _ = writeln!(
                svg,
                r#"  <path d="{}" fill="none" stroke="currentColor" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                path.data, path.stroke_width, path.opacity
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn set_view_box(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    fn clear(&mut self) {
        self.paths.clear();
    }

    fn draw_path(&mut self, path: ContourPath) {
        self.paths.push(path);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.color = color;
    }
}
