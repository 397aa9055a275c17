//! Pairwise overlap tests based on the separating axis theorem.
//!
//! Every routine returns `None` as soon as one axis separates the shapes, and
//! otherwise the axis of minimum overlap. The routines leave the sign of the
//! normal arbitrary; [`test_pair`] orients it from A towards B.

use log::debug;

use super::collider::Collider;
use super::geometry::{closest_point_on_segment, closest_points_between_segments, closest_vertex, edges, Projection};
use crate::config::NarrowPhaseConfig;
use crate::math::vec2::Vec2;

/// Separating axis and depth of an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit axis of minimum overlap.
    pub normal: Vec2,
    pub depth: f64,
}

impl Penetration {
    fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }

    /// Flips the normal if it points against `direction`.
    fn oriented_along(self, direction: Vec2) -> Self {
        if direction.dot(self.normal) < 0.0 {
            self.flipped()
        } else {
            self
        }
    }
}

/// Tracks the minimum overlap seen over a series of candidate axes.
struct AxisSearch {
    best: Penetration,
}

impl AxisSearch {
    fn new() -> Self {
        Self {
            best: Penetration {
                normal: Vec2::ZERO,
                depth: f64::INFINITY,
            },
        }
    }

    /// Projects both shapes onto `axis`. Returns false if the axis separates them.
    fn test_axis(
        &mut self,
        axis: Vec2,
        project_a: impl Fn(Vec2) -> Projection,
        project_b: impl Fn(Vec2) -> Projection,
    ) -> bool {
        // Zero axes come from coincident reference points and carry no information.
        if axis == Vec2::ZERO {
            return true;
        }
        let proj_a = project_a(axis);
        let proj_b = project_b(axis);
        if proj_a.is_separated_from(&proj_b) {
            return false;
        }
        let overlap = proj_a.overlap(&proj_b);
        if overlap < self.best.depth {
            self.best = Penetration { normal: axis, depth: overlap };
        }
        true
    }

    fn finish(self) -> Option<Penetration> {
        Some(self.best)
    }
}

/// Outward unit normals of every edge of a clockwise polygon.
fn edge_axes(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    edges(vertices).map(|(v1, v2)| (v2 - v1).perpendicular().normalize())
}

fn vertex_average(vertices: &[Vec2]) -> Vec2 {
    Collider::Polygon { vertices }.center()
}

/// Polygon against polygon over the edge normals of both.
pub fn polygon_polygon(a: &[Vec2], b: &[Vec2]) -> Option<Penetration> {
    let mut search = AxisSearch::new();
    let project_a = |axis| Projection::of_vertices(a, axis);
    let project_b = |axis| Projection::of_vertices(b, axis);

    for axis in edge_axes(a).chain(edge_axes(b)) {
        if !search.test_axis(axis, project_a, project_b) {
            return None;
        }
    }
    search.finish()
}

/// Circle against polygon.
///
/// Besides the polygon's edge normals this tests the axis from the polygon
/// center to the circle center and the axis from the nearest polygon vertex to
/// the circle center; the edge normals alone miss a circle resting on a corner.
pub fn circle_polygon(center: Vec2, radius: f64, vertices: &[Vec2]) -> Option<Penetration> {
    let mut search = AxisSearch::new();
    let project_circle = |axis| Projection::of_circle(center, radius, axis);
    let project_polygon = |axis| Projection::of_vertices(vertices, axis);

    let nearest = vertices[closest_vertex(vertices, center)];
    let extra_axes = [
        (center - vertex_average(vertices)).normalize(),
        (center - nearest).normalize(),
    ];

    for axis in edge_axes(vertices).chain(extra_axes) {
        if !search.test_axis(axis, project_circle, project_polygon) {
            return None;
        }
    }
    search.finish()
}

/// Closed-form circle test. Circles exactly `radius_a + radius_b` apart do not intersect.
pub fn circle_circle(center_a: Vec2, radius_a: f64, center_b: Vec2, radius_b: f64) -> Option<Penetration> {
    let distance = center_a.distance(center_b);
    let radii = radius_a + radius_b;
    if distance >= radii {
        return None;
    }

    let normal = if distance > 0.0 {
        (center_b - center_a) / distance
    } else {
        // Coincident centers, any direction separates them equally well.
        Vec2::UP
    };
    Some(Penetration {
        normal,
        depth: radii - distance,
    })
}

/// Capsule against polygon.
///
/// The segment contributes its own perpendicular; the axis from the polygon
/// vertex nearest to the segment covers the rounded caps. With a zero radius
/// this is the polygon test with the segment as a two-vertex polygon.
pub fn capsule_polygon(a: Vec2, b: Vec2, radius: f64, vertices: &[Vec2]) -> Option<Penetration> {
    let mut search = AxisSearch::new();
    let project_capsule = |axis| Projection::of_capsule(a, b, radius, axis);
    let project_polygon = |axis| Projection::of_vertices(vertices, axis);

    let mut cap_axis = Vec2::ZERO;
    let mut nearest_dist_sq = f64::INFINITY;
    for &v in vertices {
        let on_segment = closest_point_on_segment(v, a, b);
        if on_segment.distance_squared < nearest_dist_sq {
            nearest_dist_sq = on_segment.distance_squared;
            cap_axis = (v - on_segment.point).normalize();
        }
    }
    let extra_axes = [(b - a).perpendicular().normalize(), cap_axis];

    for axis in edge_axes(vertices).chain(extra_axes) {
        if !search.test_axis(axis, project_capsule, project_polygon) {
            return None;
        }
    }
    search.finish()
}

/// Capsule against circle through the closest point on the segment.
///
/// Touching (distance equal to the summed radii) counts as intersecting with zero depth.
pub fn capsule_circle(a: Vec2, b: Vec2, capsule_radius: f64, center: Vec2, radius: f64) -> Option<Penetration> {
    let closest = closest_point_on_segment(center, a, b);
    let radii = capsule_radius + radius;
    if closest.distance_squared > radii * radii {
        return None;
    }

    let distance = closest.distance_squared.sqrt();
    let normal = if distance > 0.0 {
        (center - closest.point) / distance
    } else {
        (b - a).perpendicular().normalize()
    };
    Some(Penetration {
        normal,
        depth: radii - distance,
    })
}

/// Capsule against capsule.
///
/// Separated segments are handled through their closest points. Crossing
/// segments have no meaningful closest-point direction, so the two segment
/// perpendiculars are tested as separating axes instead.
pub fn capsule_capsule(
    (a1, b1, radius_1): (Vec2, Vec2, f64),
    (a2, b2, radius_2): (Vec2, Vec2, f64),
) -> Option<Penetration> {
    let (p, q) = closest_points_between_segments(a1, b1, a2, b2);
    let distance = p.distance(q);
    if distance > 1e-9 {
        let radii = radius_1 + radius_2;
        if distance >= radii {
            return None;
        }
        return Some(Penetration {
            normal: (q - p) / distance,
            depth: radii - distance,
        });
    }

    let mut search = AxisSearch::new();
    let project_first = |axis| Projection::of_capsule(a1, b1, radius_1, axis);
    let project_second = |axis| Projection::of_capsule(a2, b2, radius_2, axis);
    let axes = [
        (b1 - a1).perpendicular().normalize(),
        (b2 - a2).perpendicular().normalize(),
    ];
    for axis in axes {
        if !search.test_axis(axis, project_first, project_second) {
            return None;
        }
    }
    search.finish()
}

/// Runs the pair routine matching the two shape kinds.
///
/// Pairs are evaluated in canonical kind order (circle, capsule, polygon); a
/// swapped pair reuses the canonical result with the normal negated. The
/// returned normal always points from `a` towards `b`.
pub fn test_pair(a: Collider<'_>, b: Collider<'_>, config: &NarrowPhaseConfig) -> Option<Penetration> {
    if a.kind() > b.kind() {
        return test_pair(b, a, config).map(Penetration::flipped);
    }

    let penetration = match (a, b) {
        (Collider::Circle { center: ca, radius: ra }, Collider::Circle { center: cb, radius: rb }) => {
            circle_circle(ca, ra, cb, rb)
        }
        (Collider::Circle { center, radius }, Collider::Capsule { a: sa, b: sb, radius: rs }) => {
            capsule_circle(sa, sb, rs, center, radius)
        }
        (Collider::Circle { center, radius }, Collider::Polygon { vertices }) => {
            circle_polygon(center, radius, vertices)
        }
        (Collider::Capsule { a: a1, b: b1, radius: r1 }, Collider::Capsule { a: a2, b: b2, radius: r2 }) => {
            if !config.capsule_pairs {
                debug!("capsule-capsule pair skipped, disabled in config");
                return None;
            }
            capsule_capsule((a1, b1, r1), (a2, b2, r2))
        }
        (Collider::Capsule { a: sa, b: sb, radius }, Collider::Polygon { vertices }) => {
            capsule_polygon(sa, sb, radius, vertices)
        }
        (Collider::Polygon { vertices: va }, Collider::Polygon { vertices: vb }) => polygon_polygon(va, vb),
        _ => unreachable!("pair kinds are in canonical order"),
    };

    penetration.map(|p| p.oriented_along(b.center() - a.center()))
}
