//! Tests for polyline smoothing and SVG path serialization.

use renderer::contour::Point;
use renderer::smooth::{path_data, smooth_polyline, PathCommand, TENSION};
use test_utils::{assert_approx_eq, assert_point_near};

fn zigzag(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64 * 10.0, if i % 2 == 0 { 0.0 } else { 5.0 }))
        .collect()
}

#[test]
fn test_smooth_too_few_points() {
    assert!(smooth_polyline(&[]).is_empty());
    assert!(smooth_polyline(&[Point::new(1.0, 1.0)]).is_empty());
}

#[test]
fn test_smooth_two_points_is_straight() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 20.0);
    let commands = smooth_polyline(&[a, b]);
    assert_eq!(commands, vec![PathCommand::MoveTo(a), PathCommand::LineTo(b)]);
}

#[test]
fn test_smooth_command_counts() {
    for n in 3..12 {
        let commands = smooth_polyline(&zigzag(n));
        assert_eq!(commands.len(), n);
        assert!(matches!(commands[0], PathCommand::MoveTo(_)));
        let curves = commands
            .iter()
            .filter(|c| matches!(c, PathCommand::CubicTo { .. }))
            .count();
        assert_eq!(curves, n - 1);
    }
}

#[test]
fn test_smooth_curves_pass_through_points() {
    let points = zigzag(6);
    let commands = smooth_polyline(&points);
    for (i, cmd) in commands.iter().enumerate().skip(1) {
        match cmd {
            PathCommand::CubicTo { end, .. } => assert_eq!(*end, points[i]),
            other => panic!("unexpected command {:?}", other),
        }
    }
}

#[test]
fn test_smooth_control_points_three_points() {
    let p = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(20.0, 10.0)];
    let commands = smooth_polyline(&p);

    // First curve: p0 clamps to p[0], p3 = p[2]
    match commands[1] {
        PathCommand::CubicTo { c1, c2, end } => {
            assert_point_near!(c1, (0.0 + 10.0 * TENSION, 0.0), 1e-12);
            assert_point_near!(c2, (10.0 - 20.0 * TENSION, 0.0 - 10.0 * TENSION), 1e-12);
            assert_eq!(end, p[1]);
        }
        _ => panic!("expected a cubic"),
    }

    // Second curve: p3 clamps to the last point
    match commands[2] {
        PathCommand::CubicTo { c1, c2, end } => {
            assert_point_near!(c1, (10.0 + 20.0 * TENSION, 10.0 * TENSION), 1e-12);
            assert_point_near!(c2, (20.0 - 10.0 * TENSION, 10.0 - 10.0 * TENSION), 1e-12);
            assert_eq!(end, p[2]);
        }
        _ => panic!("expected a cubic"),
    }
}

#[test]
fn test_smooth_tangent_continuity() {
    // Incoming and outgoing handles at an interior point are collinear
    let points = zigzag(5);
    let commands = smooth_polyline(&points);
    for i in 1..commands.len() - 1 {
        let PathCommand::CubicTo {
            c2: incoming, end, ..
        } = commands[i]
        else {
            panic!("expected a cubic at {}", i);
        };
        let PathCommand::CubicTo { c1: outgoing, .. } = commands[i + 1] else {
            panic!("expected a cubic at {}", i + 1);
        };
        let (ax, ay) = (end.x - incoming.x, end.y - incoming.y);
        let (bx, by) = (outgoing.x - end.x, outgoing.y - end.y);
        assert_approx_eq!(ax * by - ay * bx, 0.0, 1e-9);
    }
}

#[test]
fn test_path_data_format() {
    let commands = smooth_polyline(&[
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
    ]);
    assert_eq!(
        path_data(&commands),
        "M 0.0 0.0 C 3.0 0.0, 4.0 0.0, 10.0 0.0 C 16.0 0.0, 17.0 0.0, 20.0 0.0"
    );
}
