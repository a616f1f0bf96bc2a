//! Owns the background's lifetime state and runs render passes.

use std::time::{Duration, Instant};

use rand::Rng;
use renderer::{render_pass, BackgroundStyle, PassStats, Surface};
use topo_common::{Theme, Viewport};
use tracing::{debug, info, warn};

use crate::metrics;

/// Seeds are drawn from `0..SEED_RANGE` when none is supplied.
pub const SEED_RANGE: u32 = 100_000;

/// Summary of one finished pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassReport {
    pub viewport: Viewport,
    pub seed: u32,
    pub stats: PassStats,
    /// Paths handed to the surface
    pub paths: usize,
    pub duration: Duration,
}

/// Background state for one mounted surface.
///
/// The seed is fixed for the controller's lifetime, so every resize
/// regenerates the same terrain at the new size. The theme only changes the
/// stroke color.
#[derive(Debug)]
pub struct BackgroundController<S: Surface> {
    seed: u32,
    theme: Theme,
    style: BackgroundStyle,
    viewport: Option<Viewport>,
    surface: Option<S>,
    passes: u64,
}

impl<S: Surface> BackgroundController<S> {
    /// Create a controller with a random seed.
    pub fn new(style: BackgroundStyle, theme: Theme) -> Self {
        let seed = rand::thread_rng().gen_range(0..SEED_RANGE);
        Self::with_seed(style, theme, seed)
    }

    pub fn with_seed(style: BackgroundStyle, theme: Theme, seed: u32) -> Self {
        Self {
            seed,
            theme,
            style,
            viewport: None,
            surface: None,
            passes: 0,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn style(&self) -> &BackgroundStyle {
        &self.style
    }

    /// Viewport of the most recent regeneration request.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Number of passes drawn so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Attach a surface and draw the first pass at `viewport`.
    pub fn mount(&mut self, mut surface: S, viewport: Viewport) -> Option<PassReport> {
        surface.set_stroke_color(self.style.palette.color_for(self.theme));
        self.surface = Some(surface);
        debug!(seed = self.seed, theme = %self.theme, "Background mounted");
        self.regenerate(viewport)
    }

    /// Detach and return the surface. Later passes are no-ops.
    pub fn unmount(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            debug!(passes = self.passes, "Background unmounted");
        }
        surface
    }

    /// Run one pass at `viewport` and draw it.
    ///
    /// Returns `None` without doing any work when no surface is mounted.
    pub fn regenerate(&mut self, viewport: Viewport) -> Option<PassReport> {
        self.viewport = Some(viewport);
        let Some(surface) = self.surface.as_mut() else {
            debug!(viewport = %viewport, "No surface mounted, skipping pass");
            return None;
        };

        let start = Instant::now();
        let pass = render_pass(viewport, self.seed, &self.style);
        let paths = pass.draw(surface, &self.style);

        // The drawn pass stands even if presenting it fails
        if let Err(e) = surface.present() {
            metrics::record_present_failure();
            warn!(error = %e, viewport = %viewport, "Failed to present background");
        }

        let duration = start.elapsed();
        self.passes += 1;
        metrics::record_pass(duration, paths);

        let report = PassReport {
            viewport,
            seed: self.seed,
            stats: pass.stats(),
            paths,
            duration,
        };

        info!(
            viewport = %viewport,
            seed = self.seed,
            pass = self.passes,
            paths = paths,
            segments = report.stats.segments,
            duration_ms = duration.as_millis() as u64,
            "Background regenerated"
        );

        Some(report)
    }

    /// Switch theme by recoloring the drawn paths in place.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.theme {
            return;
        }
        self.theme = theme;

        let color = self.style.palette.color_for(theme);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_stroke_color(color);
            if let Err(e) = surface.present() {
                metrics::record_present_failure();
                warn!(error = %e, theme = %theme, "Failed to present recolored background");
            }
        }
        info!(theme = %theme, color = %color, "Theme changed");
    }

    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggle());
    }
}
