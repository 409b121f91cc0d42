//! Symbol outline rendering for live scanning feedback
//!
//! Decoders report either a clean quadrilateral or a finer contour of a
//! detected symbol. Contours with more than four points are regularized to
//! their convex hull before drawing. Either way the outline is drawn as a
//! closed loop of `n` segments.

use crate::frame::Frame;
use crate::models::Point;
use crate::utils::geometry::convex_hull;

/// Point count above which a polygon is hulled before drawing
pub const MAX_RAW_POINTS: usize = 4;

/// Line presentation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineStyle {
    /// Line color as RGB
    pub color: [u8; 3],
    /// Line thickness in pixels
    pub thickness: u32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            thickness: 3,
        }
    }
}

/// One drawn line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
}

/// What [`draw_outline`] drew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// Ordered points the loop was drawn through
    pub points: Vec<Point>,
    /// Whether the points came from a convex hull
    pub hulled: bool,
    /// Segments in drawing order; the last one closes the loop
    pub segments: Vec<Segment>,
}

/// Points to draw through: the hull for fine contours, the input otherwise
pub fn outline_points(polygon: &[Point]) -> (Vec<Point>, bool) {
    if polygon.len() > MAX_RAW_POINTS {
        (convex_hull(polygon), true)
    } else {
        (polygon.to_vec(), false)
    }
}

/// Closed loop over `points`: segment `i` joins `i` to `(i + 1) % n`
pub fn closed_segments(points: &[Point]) -> Vec<Segment> {
    let n = points.len();
    (0..n)
        .map(|i| Segment {
            from: points[i],
            to: points[(i + 1) % n],
        })
        .collect()
}

/// Draw a closed outline of `polygon` onto `frame`
///
/// Degenerate shapes (collinear points, hulls with fewer than three points)
/// are drawn as-is. Pixels outside the frame are clipped.
pub fn draw_outline(frame: &mut Frame, polygon: &[Point], style: &OutlineStyle) -> Outline {
    let (points, hulled) = outline_points(polygon);
    let segments = closed_segments(&points);
    for segment in &segments {
        draw_line(frame, segment.from, segment.to, style);
    }
    Outline {
        points,
        hulled,
        segments,
    }
}

/// Draw a thick line with Bresenham stepping and a square brush
pub fn draw_line(frame: &mut Frame, from: Point, to: Point, style: &OutlineStyle) {
    let (mut x, mut y) = (from.x as i64, from.y as i64);
    let (x1, y1) = (to.x as i64, to.y as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        stamp(frame, x, y, style);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

fn stamp(frame: &mut Frame, cx: i64, cy: i64, style: &OutlineStyle) {
    let thickness = style.thickness.max(1) as i64;
    let lo = -(thickness - 1) / 2;
    let hi = thickness / 2;
    for oy in lo..=hi {
        for ox in lo..=hi {
            frame.put_pixel(cx + ox, cy + oy, style.color);
        }
    }
}
