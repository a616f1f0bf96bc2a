//! Tests for the file-backed surface.

use renderer::BackgroundStyle;
use test_utils::{temp_output_path, viewports};
use topo_background::{BackgroundController, FileSurface};
use topo_common::{Rgb, Theme, Viewport};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_pass_writes_svg() {
    let (_dir, svg_path) = temp_output_path("bg.svg");
    let surface = FileSurface::new(Rgb::new(0, 0, 0), &svg_path);

    let mut controller =
        BackgroundController::with_seed(BackgroundStyle::default(), Theme::Light, 5);
    controller.mount(surface, Viewport::new(640, 480)).unwrap();

    let written = std::fs::read_to_string(&svg_path).unwrap();
    assert!(written.contains("viewBox=\"0 0 640 480\""));
    assert!(written.contains("color=\"#a3b8a0\""));
    assert_eq!(written, controller.surface().unwrap().svg().to_svg_string());
}

#[test]
fn test_theme_change_rewrites_color_only() {
    let (_dir, svg_path) = temp_output_path("bg.svg");
    let mut controller =
        BackgroundController::with_seed(BackgroundStyle::default(), Theme::Light, 5);
    controller.mount(
        FileSurface::new(Rgb::new(0, 0, 0), &svg_path),
        Viewport::new(640, 480),
    );
    let light = std::fs::read_to_string(&svg_path).unwrap();

    controller.set_theme(Theme::Dark);
    let dark = std::fs::read_to_string(&svg_path).unwrap();

    assert!(dark.contains("color=\"#5c7358\""));
    assert_eq!(light.replace("#a3b8a0", "#5c7358"), dark);
}

#[test]
fn test_pass_writes_png() {
    let (dir, svg_path) = temp_output_path("bg.svg");
    let png_path = dir.path().join("bg.png");
    let surface = FileSurface::new(Rgb::new(0, 0, 0), &svg_path).with_png(&png_path);
    assert_eq!(surface.png_path(), Some(png_path.as_path()));

    let (w, h) = viewports::GRID_4X4;
    let mut controller =
        BackgroundController::with_seed(BackgroundStyle::default(), Theme::Dark, 9);
    controller.mount(surface, Viewport::new(w, h));

    let png = std::fs::read(&png_path).unwrap();
    assert_eq!(&png[..8], &PNG_SIGNATURE);
}

#[test]
fn test_unwritable_path_keeps_controller_running() {
    let (dir, _) = temp_output_path("unused");
    let svg_path = dir.path().join("no-such-dir").join("bg.svg");

    let mut controller =
        BackgroundController::with_seed(BackgroundStyle::default(), Theme::Light, 5);
    let report = controller.mount(
        FileSurface::new(Rgb::new(0, 0, 0), &svg_path),
        Viewport::new(100, 100),
    );

    assert!(report.is_some());
    assert_eq!(controller.passes(), 1);
    assert!(!svg_path.exists());
}
