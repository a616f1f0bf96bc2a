//! Contour line (isoline) extraction using the marching squares algorithm.
//!
//! [`march_squares`] scans a height field one 2x2 block at a time and emits
//! unconnected line segments where the field crosses a threshold.
//! [`connect_segments`] then stitches those fragments into polylines by
//! matching endpoints within a small tolerance.

use std::collections::VecDeque;

use crate::noise::HeightField;

/// Two points closer than this (Manhattan distance) are treated as the same
/// crossing. Adjacent cells compute shared crossings independently, so their
/// endpoints can drift apart by rounding error.
pub const JOIN_EPSILON: f64 = 0.5;

/// Polylines with fewer points than this are dropped after stitching.
pub const MIN_POLYLINE_POINTS: usize = 4;

/// A point in output (pixel) coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    #[inline]
    fn near(&self, other: &Point) -> bool {
        self.manhattan(other) < JOIN_EPSILON
    }
}

/// A line segment crossing one grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// A stitched contour path at a single threshold
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the path ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 2 => first.near(last),
            _ => false,
        }
    }

    /// Total length along the path.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| ((w[1].x - w[0].x).powi(2) + (w[1].y - w[0].y).powi(2)).sqrt())
            .sum()
    }
}

/// Classify a cell's four corners against `threshold`.
///
/// Corners at or above the threshold set their bit: top-left = 1,
/// top-right = 2, bottom-right = 4, bottom-left = 8. The result is always in
/// `0..=15`.
#[inline]
pub fn cell_state(tl: f64, tr: f64, br: f64, bl: f64, threshold: f64) -> u8 {
    let mut state = 0;
    if tl >= threshold {
        state |= 1;
    }
    if tr >= threshold {
        state |= 2;
    }
    if br >= threshold {
        state |= 4;
    }
    if bl >= threshold {
        state |= 8;
    }
    state
}

/// Marching squares over a height field.
///
/// # Arguments
/// * `field` - Height field to contour
/// * `threshold` - Iso-value to extract
/// * `cell_size` - Pixel size of one grid cell; output points are scaled by it
///
/// # Returns
/// Unconnected segments in row-major cell order
pub fn march_squares(field: &HeightField, threshold: f64, cell_size: f64) -> Vec<Segment> {
    let (cols, rows) = (field.cols(), field.rows());
    if cols < 2 || rows < 2 {
        return vec![];
    }

    let mut segments = Vec::new();

    for y in 0..(rows - 1) {
        for x in 0..(cols - 1) {
            let tl = field.get(y, x);
            let tr = field.get(y, x + 1);
            let bl = field.get(y + 1, x);
            let br = field.get(y + 1, x + 1);

            let state = cell_state(tl, tr, br, bl, threshold);
            if state == 0 || state == 15 {
                continue;
            }

            let px = x as f64 * cell_size;
            let py = y as f64 * cell_size;

            let top = Point::new(px + edge_offset(tl, tr, threshold, cell_size), py);
            let bottom = Point::new(px + edge_offset(bl, br, threshold, cell_size), py + cell_size);
            let left = Point::new(px, py + edge_offset(tl, bl, threshold, cell_size));
            let right = Point::new(px + cell_size, py + edge_offset(tr, br, threshold, cell_size));

            push_cell_segments(&mut segments, state, top, right, bottom, left);
        }
    }

    segments
}

/// Distance along an edge from its start to the threshold crossing.
///
/// Equal corner values fall back to the edge start instead of dividing by
/// zero.
#[inline]
fn edge_offset(start: f64, end: f64, threshold: f64, cell_size: f64) -> f64 {
    if start == end {
        return 0.0;
    }
    cell_size * ((threshold - start) / (end - start))
}

/// Append the segments for one cell according to the lookup table.
///
/// Saddles (5 and 10) always pair the same diagonal; they are never
/// disambiguated with a center sample.
fn push_cell_segments(
    out: &mut Vec<Segment>,
    state: u8,
    top: Point,
    right: Point,
    bottom: Point,
    left: Point,
) {
    let mut seg = |a: Point, b: Point| out.push(Segment::new(a, b));

    match state {
        1 => seg(top, left),
        2 => seg(right, top),
        3 => seg(right, left),
        4 => seg(bottom, right),
        5 => {
            seg(top, left);
            seg(bottom, right);
        }
        6 => seg(bottom, top),
        7 => seg(bottom, left),
        8 => seg(left, bottom),
        9 => seg(top, bottom),
        10 => {
            seg(left, top);
            seg(right, bottom);
        }
        11 => seg(right, bottom),
        12 => seg(left, right),
        13 => seg(top, right),
        14 => seg(left, top),
        _ => {} // 0 and 15: no crossing
    }
}

/// Connect line segments into continuous polylines
///
/// Each polyline is seeded with the next unused segment and grown at both
/// ends by repeated full scans over the remaining segments until a scan adds
/// nothing. Segments arrive in scan order rather than connectivity order, so
/// a single pass is not enough. Polylines shorter than
/// [`MIN_POLYLINE_POINTS`] are discarded.
pub fn connect_segments(segments: Vec<Segment>) -> Vec<Polyline> {
    if segments.is_empty() {
        return vec![];
    }

    let mut polylines = Vec::new();
    let mut used = vec![false; segments.len()];

    for start_idx in 0..segments.len() {
        if used[start_idx] {
            continue;
        }
        used[start_idx] = true;

        let mut points: VecDeque<Point> =
            VecDeque::from([segments[start_idx].start, segments[start_idx].end]);

        let mut changed = true;
        while changed {
            changed = false;
            for (i, seg) in segments.iter().enumerate() {
                if used[i] {
                    continue;
                }

                // Non-empty: seeded with two points and only ever grows
                let head = points[0];
                let tail = points[points.len() - 1];

                if tail.near(&seg.start) {
                    points.push_back(seg.end);
                } else if tail.near(&seg.end) {
                    points.push_back(seg.start);
                } else if head.near(&seg.end) {
                    points.push_front(seg.start);
                } else if head.near(&seg.start) {
                    points.push_front(seg.end);
                } else {
                    continue;
                }

                used[i] = true;
                changed = true;
            }
        }

        if points.len() >= MIN_POLYLINE_POINTS {
            polylines.push(Polyline {
                points: points.into(),
            });
        }
    }

    polylines
}

/// Extract and stitch the contour at one threshold.
pub fn extract_polylines(field: &HeightField, threshold: f64, cell_size: f64) -> Vec<Polyline> {
    connect_segments(march_squares(field, threshold, cell_size))
}
