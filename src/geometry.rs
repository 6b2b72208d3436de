//! Hexagon geometry for cell drawing and hit-testing.
//!
//! Pure functions over plain `f64` points. A cell's hexagon is inscribed in
//! its bounding box with a vertex at the top and bottom, so the width of a
//! regular hexagon is `height * sin(60°)`.

use std::f64::consts::FRAC_PI_3;

/// Width-to-height ratio of a regular hexagon standing on a vertex.
///
/// Rounded to three places; board geometry uses this exact constant.
pub const HEX_WIDTH_RATIO: f64 = 0.866;

/// A point in cell-local coordinates, origin at the bounding box's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Computes the six vertices of the hexagon inscribed in a `width` x `height` box.
///
/// Order: top, upper-right, lower-right, bottom, lower-left, upper-left. The
/// path closes from the last vertex back to the first. Zero or negative
/// dimensions give a degenerate polygon rather than an error.
pub fn hex_vertices(width: f64, height: f64) -> [Point; 6] {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let line_length = height / 2.0;
    let offset_x = line_length * FRAC_PI_3.sin();
    let offset_y = height / 4.0;

    [
        Point::new(center_x, 0.0),
        Point::new(center_x + offset_x, offset_y),
        Point::new(center_x + offset_x, center_y + offset_y),
        Point::new(center_x, height),
        Point::new(center_x - offset_x, center_y + offset_y),
        Point::new(center_x - offset_x, offset_y),
    ]
}

/// Returns true if `point` lies inside the closed `polygon`.
///
/// Even-odd ray casting toward +x. Points exactly on an edge may land on
/// either side. Polygons with fewer than three vertices contain nothing.
pub fn contains(polygon: &[Point], point: Point) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > point.y) != (b.y > point.y) {
            let cross_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
