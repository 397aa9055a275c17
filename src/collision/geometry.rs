//! Projection and closest-point primitives shared by the pair tests and the contact pass.
//!
//! Everything here returns plain values on the stack.

use crate::math::vec2::Vec2;

/// Interval covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Projects a vertex set onto `axis`. `vertices` must not be empty.
    pub fn of_vertices(vertices: &[Vec2], axis: Vec2) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in vertices {
            let proj = v.dot(axis);
            min = min.min(proj);
            max = max.max(proj);
        }
        Self { min, max }
    }

    /// Projects a circle onto a unit `axis`.
    pub fn of_circle(center: Vec2, radius: f64, axis: Vec2) -> Self {
        let proj = center.dot(axis);
        Self {
            min: proj - radius,
            max: proj + radius,
        }
    }

    /// Projects a capsule (segment swept by `radius`) onto a unit `axis`.
    pub fn of_capsule(a: Vec2, b: Vec2, radius: f64, axis: Vec2) -> Self {
        let segment = Self::of_vertices(&[a, b], axis);
        Self {
            min: segment.min - radius,
            max: segment.max + radius,
        }
    }

    /// True when the intervals share no interior. Touching counts as separated.
    pub fn is_separated_from(&self, other: &Self) -> bool {
        self.min >= other.max || other.min >= self.max
    }

    /// Depth of the overlap, assuming the intervals are not separated.
    pub fn overlap(&self, other: &Self) -> f64 {
        (other.max - self.min).min(self.max - other.min)
    }
}

/// Result of a point-to-segment query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPoint {
    pub point: Vec2,
    pub distance_squared: f64,
}

/// Closest point on segment `[a, b]` to `point`.
///
/// A zero-length segment is not guarded and yields NaN.
pub fn closest_point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> SegmentPoint {
    let ab = b - a;
    let t = ((point - a).dot(ab) / ab.magnitude_squared()).clamp(0.0, 1.0);
    let closest = a + ab * t;
    SegmentPoint {
        point: closest,
        distance_squared: point.distance_squared(closest),
    }
}

/// Closest pair of points between segments `[p1, q1]` and `[p2, q2]`.
///
/// Returns `(on_first, on_second)`. Parallel segments fall back to clamping
/// the endpoints, which still yields a valid closest pair.
pub fn closest_points_between_segments(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> (Vec2, Vec2) {
    let d1 = q1 - p1;
    let d2 = q2 - p2;
    let r = p1 - p2;
    let a = d1.magnitude_squared();
    let e = d2.magnitude_squared();
    let f = d2.dot(r);
    let c = d1.dot(r);
    let b = d1.dot(d2);
    let denom = a * e - b * b;

    // Parallel segments make the first parameter arbitrary, start from p1.
    let mut s = if denom > 1e-12 * a * e {
        ((b * f - c * e) / denom).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut t = (b * s + f) / e;
    if t < 0.0 {
        t = 0.0;
        s = (-c / a).clamp(0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = ((b - c) / a).clamp(0.0, 1.0);
    }

    (p1 + d1 * s, p2 + d2 * t)
}

/// Index of the vertex closest to `point`.
pub fn closest_vertex(vertices: &[Vec2], point: Vec2) -> usize {
    let mut best = 0;
    let mut best_dist_sq = f64::INFINITY;
    for (i, v) in vertices.iter().enumerate() {
        let dist_sq = v.distance_squared(point);
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = i;
        }
    }
    best
}

/// Iterates over the closed edges `(v[i], v[i + 1])` of a polygon.
///
/// A two-vertex slice yields its single edge once.
pub fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    let count = if n == 2 { 1 } else { n };
    (0..count).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}
