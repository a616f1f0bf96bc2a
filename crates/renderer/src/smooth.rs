//! Polyline smoothing into cubic Bézier curves.
//!
//! Each pair of consecutive points is joined by a cubic whose control points
//! follow a Catmull-Rom style tangent estimated from the neighbouring points.
//! The result is C¹-continuous without storing tangents.

use std::fmt::Write as _;

use crate::contour::Point;

/// Scale applied to the neighbour-difference tangent.
pub const TENSION: f64 = 0.3;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, end: Point },
}

/// Convert a polyline into draw commands.
///
/// Fewer than two points yields nothing, two points a straight line, and
/// `n >= 3` points one move followed by `n - 1` cubic curves.
pub fn smooth_polyline(points: &[Point]) -> Vec<PathCommand> {
    match points.len() {
        0 | 1 => vec![],
        2 => vec![PathCommand::MoveTo(points[0]), PathCommand::LineTo(points[1])],
        n => {
            let mut commands = Vec::with_capacity(n);
            commands.push(PathCommand::MoveTo(points[0]));

            for i in 0..n - 1 {
                let p0 = points[i.saturating_sub(1)];
                let p1 = points[i];
                let p2 = points[i + 1];
                let p3 = points[(i + 2).min(n - 1)];

                let c1 = Point::new(
                    p1.x + (p2.x - p0.x) * TENSION,
                    p1.y + (p2.y - p0.y) * TENSION,
                );
                let c2 = Point::new(
                    p2.x - (p3.x - p1.x) * TENSION,
                    p2.y - (p3.y - p1.y) * TENSION,
                );

                commands.push(PathCommand::CubicTo { c1, c2, end: p2 });
            }

            commands
        }
    }
}

/// Serialize commands as SVG path data with one decimal place.
pub fn path_data(commands: &[PathCommand]) -> String {
    let mut d = String::with_capacity(commands.len() * 40);

    for (i, cmd) in commands.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        // Writing to a String cannot fail
        let _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M {:.1} {:.1}", p.x, p.y),
            PathCommand::LineTo(p) => write!(d, "L {:.1} {:.1}", p.x, p.y),
            PathCommand::CubicTo { c1, c2, end } => write!(
                d,
                "C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
                c1.x, c1.y, c2.x, c2.y, end.x, end.y
            ),
        };
    }

    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data_line() {
        let cmds = smooth_polyline(&[Point::new(0.0, 0.0), Point::new(10.26, 3.0)]);
        assert_eq!(path_data(&cmds), "M 0.0 0.0 L 10.3 3.0");
    }

    #[test]
    fn test_path_data_empty() {
        assert_eq!(path_data(&[]), "");
    }
}
