//! Tests for the background controller lifecycle.

mod common;

use common::RecordingSurface;
use renderer::{BackgroundStyle, SvgSurface};
use test_utils::{viewports, REFERENCE_SEED};
use topo_background::controller::SEED_RANGE;
use topo_background::BackgroundController;
use topo_common::{Rgb, Theme, Viewport};

fn viewport((w, h): (u32, u32)) -> Viewport {
    Viewport::new(w, h)
}

fn controller(theme: Theme) -> BackgroundController<RecordingSurface> {
    BackgroundController::with_seed(BackgroundStyle::default(), theme, REFERENCE_SEED)
}

#[test]
fn test_random_seed_in_range() {
    for _ in 0..50 {
        let c: BackgroundController<SvgSurface> =
            BackgroundController::new(BackgroundStyle::default(), Theme::Light);
        assert!(c.seed() < SEED_RANGE);
    }
}

#[test]
fn test_unmounted_regenerate_is_noop() {
    let mut c = controller(Theme::Light);
    assert!(!c.is_mounted());
    assert!(c.regenerate(viewport(viewports::DESKTOP)).is_none());
    assert_eq!(c.passes(), 0);
    // The requested size is still remembered
    assert_eq!(c.viewport(), Some(viewport(viewports::DESKTOP)));
}

#[test]
fn test_mount_draws_first_pass() {
    let surface = RecordingSurface::new();
    let mut c = controller(Theme::Light);

    let report = c.mount(surface.clone(), viewport(viewports::DESKTOP)).unwrap();
    assert_eq!(c.passes(), 1);
    assert_eq!(report.seed, REFERENCE_SEED);
    assert_eq!(report.viewport, viewport(viewports::DESKTOP));
    assert_eq!(report.stats.levels, 10);
    assert_eq!(report.paths, report.stats.polylines);

    let log = surface.log.lock().unwrap();
    assert_eq!(log.view_boxes, vec![viewport(viewports::DESKTOP)]);
    assert_eq!(log.clears, 1);
    assert_eq!(log.paths, report.paths);
    assert_eq!(log.presents, 1);
    assert_eq!(log.colors, vec![BackgroundStyle::default().palette.light]);
}

#[test]
fn test_seed_stable_across_resizes() {
    let mut c: BackgroundController<SvgSurface> =
        BackgroundController::with_seed(BackgroundStyle::default(), Theme::Light, 321);
    let first = c
        .mount(SvgSurface::new(Rgb::new(0, 0, 0)), viewport(viewports::DESKTOP))
        .unwrap();
    let svg_before = c.surface().unwrap().to_svg_string();

    c.regenerate(viewport(viewports::MOBILE)).unwrap();
    let back = c.regenerate(viewport(viewports::DESKTOP)).unwrap();

    assert_eq!(c.seed(), 321);
    assert_eq!(back.stats, first.stats);
    assert_eq!(c.surface().unwrap().to_svg_string(), svg_before);
    assert_eq!(c.passes(), 3);
}

#[test]
fn test_theme_change_recolors_without_regenerating() {
    let surface = RecordingSurface::new();
    let mut c = controller(Theme::Light);
    c.mount(surface.clone(), viewport(viewports::MOBILE));

    c.set_theme(Theme::Dark);
    assert_eq!(c.theme(), Theme::Dark);
    assert_eq!(c.passes(), 1);

    let palette = BackgroundStyle::default().palette;
    assert_eq!(surface.colors(), vec![palette.light, palette.dark]);
    // Geometry untouched: still only the mount pass
    assert_eq!(surface.view_boxes().len(), 1);
}

#[test]
fn test_same_theme_is_ignored() {
    let surface = RecordingSurface::new();
    let mut c = controller(Theme::Dark);
    c.mount(surface.clone(), viewport(viewports::MOBILE));

    c.set_theme(Theme::Dark);
    assert_eq!(surface.colors().len(), 1);
}

#[test]
fn test_toggle_theme() {
    let mut c = controller(Theme::Light);
    c.toggle_theme();
    assert_eq!(c.theme(), Theme::Dark);
    c.toggle_theme();
    assert_eq!(c.theme(), Theme::Light);
}

#[test]
fn test_present_failure_does_not_abort() {
    let surface = RecordingSurface::failing();
    let mut c = controller(Theme::Light);

    assert!(c.mount(surface.clone(), viewport(viewports::GRID_4X4)).is_some());
    assert!(c.regenerate(viewport(viewports::DESKTOP)).is_some());
    assert_eq!(c.passes(), 2);
    assert_eq!(surface.log.lock().unwrap().presents, 2);
}

#[test]
fn test_unmount_stops_passes() {
    let mut c = controller(Theme::Light);
    c.mount(RecordingSurface::new(), viewport(viewports::DESKTOP));

    assert!(c.unmount().is_some());
    assert!(c.unmount().is_none());
    assert!(c.regenerate(viewport(viewports::MOBILE)).is_none());
    assert_eq!(c.passes(), 1);
}
