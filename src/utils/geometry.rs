/// Geometry utilities for symbol outlines
use crate::models::Point;

/// Z component of (a - o) x (b - o); positive for a counter-clockwise turn
#[inline]
pub fn cross(o: &Point, a: &Point, b: &Point) -> i64 {
    let (ox, oy) = (o.x as i64, o.y as i64);
    (a.x as i64 - ox) * (b.y as i64 - oy) - (a.y as i64 - oy) * (b.x as i64 - ox)
}

/// Convex hull of a point set (Andrew's monotone chain)
///
/// Returns the hull vertices in counter-clockwise order (y axis pointing up),
/// starting from the lowest-x point. Duplicate and collinear points are
/// dropped, so a degenerate input yields fewer than 3 points: a single point
/// for coincident input, the two extremes for collinear input.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }

    let mut hull: Vec<Point> = Vec::with_capacity(pts.len() * 2);

    // Lower hull
    for p in &pts {
        while hull.len() >= 2 && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0 {
            hull.pop();
        }
        hull.push(*p);
    }

    // Upper hull
    let lower_len = hull.len() + 1;
    for p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0
        {
            hull.pop();
        }
        hull.push(*p);
    }

    // Last point repeats the first
    hull.pop();
    hull
}

/// Twice the signed area of a polygon (shoelace formula)
pub fn signed_area2(polygon: &[Point]) -> i64 {
    let n = polygon.len();
    (0..n)
        .map(|i| {
            let a = &polygon[i];
            let b = &polygon[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

/// Check that every vertex of a closed polygon turns the same way
pub fn is_convex(polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0i64;
    for i in 0..n {
        let c = cross(&polygon[i], &polygon[(i + 1) % n], &polygon[(i + 2) % n]);
        if c == 0 {
            continue;
        }
        if sign == 0 {
            sign = c.signum();
        } else if c.signum() != sign {
            return false;
        }
    }
    sign != 0
}
