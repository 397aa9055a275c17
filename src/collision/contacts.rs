//! Contact point generation for pairs already known to intersect.

use log::warn;

use super::collider::Collider;
use super::geometry::{closest_point_on_segment, closest_points_between_segments, edges};
use super::manifold::ContactManifold;
use crate::math::vec2::Vec2;

/// Sine of the angle below which two capsule segments count as parallel.
const PARALLEL_SINE: f64 = 1e-6;

/// Fills `contact1`, `contact2` and `contact_count` of an intersecting manifold.
///
/// Pairs with a circle always get one point. Polygon and capsule pairs get one
/// point for a corner contact and two when features lie flush against each
/// other. The normal already stored in the manifold must point from `a` to `b`.
pub fn find_contact_points(a: Collider<'_>, b: Collider<'_>, epsilon: f64, manifold: &mut ContactManifold) {
    manifold.clear_contacts();
    if !manifold.is_intersecting {
        warn!(
            "contact points requested for non-intersecting pair {:?}/{:?}",
            manifold.body_a, manifold.body_b
        );
        return;
    }

    match (a, b) {
        (Collider::Circle { center, radius }, Collider::Circle { .. }) => {
            manifold.push_contact(center + manifold.normal * radius);
        }
        (Collider::Circle { center, .. }, Collider::Polygon { vertices })
        | (Collider::Polygon { vertices }, Collider::Circle { center, .. }) => {
            manifold.push_contact(closest_point_on_polygon(center, vertices));
        }
        (Collider::Circle { center, .. }, Collider::Capsule { a: sa, b: sb, radius })
        | (Collider::Capsule { a: sa, b: sb, radius }, Collider::Circle { center, .. }) => {
            manifold.push_contact(capsule_surface_point(center, sa, sb, radius));
        }
        (Collider::Capsule { a: a1, b: b1, radius: r1 }, Collider::Capsule { a: a2, b: b2, radius: r2 }) => {
            capsule_capsule_contacts((a1, b1, r1), (a2, b2, r2), epsilon, manifold);
        }
        (Collider::Capsule { a: sa, b: sb, .. }, Collider::Polygon { vertices })
        | (Collider::Polygon { vertices }, Collider::Capsule { a: sa, b: sb, .. }) => {
            feature_contacts(&[sa, sb], vertices, epsilon, manifold);
        }
        (Collider::Polygon { vertices: va }, Collider::Polygon { vertices: vb }) => {
            feature_contacts(va, vb, epsilon, manifold);
        }
    }
}

fn closest_point_on_polygon(point: Vec2, vertices: &[Vec2]) -> Vec2 {
    let mut best = Vec2::ZERO;
    let mut best_dist_sq = f64::INFINITY;
    for (e1, e2) in edges(vertices) {
        let candidate = closest_point_on_segment(point, e1, e2);
        if candidate.distance_squared < best_dist_sq {
            best_dist_sq = candidate.distance_squared;
            best = candidate.point;
        }
    }
    best
}

/// Point of the capsule surface closest to `point`.
fn capsule_surface_point(point: Vec2, a: Vec2, b: Vec2, radius: f64) -> Vec2 {
    let on_segment = closest_point_on_segment(point, a, b).point;
    on_segment + (point - on_segment).normalize() * radius
}

fn capsule_capsule_contacts(
    (a1, b1, r1): (Vec2, Vec2, f64),
    (a2, b2, r2): (Vec2, Vec2, f64),
    epsilon: f64,
    manifold: &mut ContactManifold,
) {
    let normal = manifold.normal;
    // Midway between the two surfaces along the normal.
    let midway = |on_first: Vec2, on_second: Vec2| ((on_first + normal * r1) + (on_second - normal * r2)) / 2.0;

    let d1 = (b1 - a1).normalize();
    let d2 = (b2 - a2).normalize();
    if d1.cross(d2).abs() < PARALLEL_SINE {
        // Parallel segments can rest flush against each other.
        feature_contacts(&[a1, b1], &[a2, b2], epsilon, manifold);
        let core_points = manifold.contacts();
        manifold.clear_contacts();
        for point in core_points {
            let on_first = closest_point_on_segment(point, a1, b1).point;
            let on_second = closest_point_on_segment(point, a2, b2).point;
            manifold.push_contact(midway(on_first, on_second));
        }
        return;
    }

    let (p, q) = closest_points_between_segments(a1, b1, a2, b2);
    manifold.push_contact(midway(p, q));
}

/// Closest vertex-to-edge points in both directions.
///
/// Each vertex of one shape is projected onto every edge of the other. The
/// first point at the minimum distance becomes `contact1`; a second point at
/// the same distance (within `epsilon`) and not coincident with the first
/// becomes `contact2`.
fn feature_contacts(vertices_a: &[Vec2], vertices_b: &[Vec2], epsilon: f64, manifold: &mut ContactManifold) {
    let mut min_dist_sq = f64::INFINITY;
    let mut contact1 = Vec2::ZERO;
    let mut contact2 = Vec2::ZERO;
    let mut contact_count = 0;

    for (points, other) in [(vertices_a, vertices_b), (vertices_b, vertices_a)] {
        for &p in points {
            for (e1, e2) in edges(other) {
                let candidate = closest_point_on_segment(p, e1, e2);

                if (candidate.distance_squared - min_dist_sq).abs() < epsilon {
                    if !candidate.point.nearly_equal(contact1, epsilon) {
                        contact2 = candidate.point;
                        contact_count = 2;
                    }
                } else if candidate.distance_squared < min_dist_sq {
                    min_dist_sq = candidate.distance_squared;
                    contact1 = candidate.point;
                    contact_count = 1;
                }
            }
        }
    }

    manifold.push_contact(contact1);
    if contact_count == 2 {
        manifold.push_contact(contact2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BodyHandle;
    const EPSILON: f64 = 1e-9;

    fn rect(center: Vec2, width: f64, height: f64) -> [Vec2; 4] {
        let (hw, hh) = (width / 2.0, height / 2.0);
        [
            center + Vec2::new(-hw, hh),
            center + Vec2::new(hw, hh),
            center + Vec2::new(hw, -hh),
            center + Vec2::new(-hw, -hh),
        ]
    }

    fn intersecting(normal: Vec2) -> ContactManifold {
        let mut m = ContactManifold::new(BodyHandle(0), BodyHandle(1));
        m.is_intersecting = true;
        m.normal = normal;
        m
    }

    #[test]
    fn test_flush_rectangles_give_two_points() {
        let a = rect(Vec2::ZERO, 4.0, 2.0);
        let b = rect(Vec2::new(0.0, 1.5), 2.0, 2.0);
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(Collider::Polygon { vertices: &a }, Collider::Polygon { vertices: &b }, 0.0005, &mut m);

        assert_eq!(m.contact_count, 2);
        let mut xs = [m.contact1.x, m.contact2.x];
        xs.sort_by(f64::total_cmp);
        assert!((xs[0] + 1.0).abs() < EPSILON);
        assert!((xs[1] - 1.0).abs() < EPSILON);
        assert!((m.contact1.y - 1.0).abs() < EPSILON);
        assert!((m.contact2.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_corner_into_face_gives_one_point() {
        let a = rect(Vec2::ZERO, 4.0, 2.0);
        let diamond = [
            Vec2::new(0.0, 2.8),
            Vec2::new(1.0, 1.8),
            Vec2::new(0.0, 0.8),
            Vec2::new(-1.0, 1.8),
        ];
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(Collider::Polygon { vertices: &a }, Collider::Polygon { vertices: &diamond }, 0.0005, &mut m);

        assert_eq!(m.contact_count, 1);
        assert!(m.contact1.nearly_equal(Vec2::new(0.0, 1.0), EPSILON));
    }

    #[test]
    fn test_circle_circle_point_on_surface_of_a() {
        let mut m = intersecting(Vec2::new(1.0, 0.0));
        find_contact_points(
            Collider::Circle { center: Vec2::ZERO, radius: 5.0 },
            Collider::Circle { center: Vec2::new(8.0, 0.0), radius: 4.0 },
            0.0005,
            &mut m,
        );
        assert_eq!(m.contact_count, 1);
        assert!(m.contact1.nearly_equal(Vec2::new(5.0, 0.0), EPSILON));
    }

    #[test]
    fn test_circle_polygon_closest_boundary_point() {
        let square = rect(Vec2::ZERO, 2.0, 2.0);
        let circle = Collider::Circle { center: Vec2::new(1.5, 0.3), radius: 1.0 };
        let polygon = Collider::Polygon { vertices: &square };

        let mut m = intersecting(Vec2::new(-1.0, 0.0));
        find_contact_points(circle, polygon, 0.0005, &mut m);
        assert_eq!(m.contact_count, 1);
        assert!(m.contact1.nearly_equal(Vec2::new(1.0, 0.3), EPSILON));

        let mut swapped = intersecting(Vec2::new(1.0, 0.0));
        find_contact_points(polygon, circle, 0.0005, &mut swapped);
        assert_eq!(swapped.contacts().as_slice(), m.contacts().as_slice());
    }

    #[test]
    fn test_capsule_circle_point_on_capsule_surface() {
        let capsule = Collider::Capsule { a: Vec2::new(-2.0, 0.0), b: Vec2::new(2.0, 0.0), radius: 0.5 };
        let circle = Collider::Circle { center: Vec2::new(1.0, 1.5), radius: 1.5 };
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(capsule, circle, 0.0005, &mut m);
        assert_eq!(m.contact_count, 1);
        assert!(m.contact1.nearly_equal(Vec2::new(1.0, 0.5), EPSILON));
    }

    #[test]
    fn test_capsule_polygon_flush_segment() {
        let square = rect(Vec2::ZERO, 2.0, 2.0);
        let capsule = Collider::Capsule { a: Vec2::new(-0.5, 0.75), b: Vec2::new(0.5, 0.75), radius: 0.0 };
        let mut m = intersecting(Vec2::new(0.0, -1.0));
        find_contact_points(capsule, Collider::Polygon { vertices: &square }, 0.0005, &mut m);
        assert_eq!(m.contact_count, 2);
        assert!((m.contact1.y - 1.0).abs() < EPSILON);
        assert!((m.contact2.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_capsule_capsule_crossing_single_point() {
        let a = Collider::Capsule { a: Vec2::new(-2.0, 0.0), b: Vec2::new(2.0, 0.0), radius: 0.1 };
        let b = Collider::Capsule { a: Vec2::new(0.0, -1.0), b: Vec2::new(0.0, 1.0), radius: 0.1 };
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(a, b, 0.0005, &mut m);
        assert_eq!(m.contact_count, 1);
        assert!(m.contact1.nearly_equal(Vec2::ZERO, EPSILON));
    }

    #[test]
    fn test_capsule_capsule_parallel_two_points() {
        let a = Collider::Capsule { a: Vec2::new(0.0, 0.0), b: Vec2::new(4.0, 0.0), radius: 0.5 };
        let b = Collider::Capsule { a: Vec2::new(1.0, 0.8), b: Vec2::new(3.0, 0.8), radius: 0.5 };
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(a, b, 0.0005, &mut m);
        assert_eq!(m.contact_count, 2);
        // Surfaces at y = 0.5 and y = 0.3, overlap spans x in [1, 3].
        let mut xs = [m.contact1.x, m.contact2.x];
        xs.sort_by(f64::total_cmp);
        assert!((xs[0] - 1.0).abs() < EPSILON);
        assert!((xs[1] - 3.0).abs() < EPSILON);
        assert!((m.contact1.y - 0.4).abs() < EPSILON);
        assert!((m.contact2.y - 0.4).abs() < EPSILON);
    }

    #[test]
    fn test_capsule_capsule_parallel_and_crossing_agree_on_depth_midpoint() {
        // Unequal radii: points sit halfway through the overlap, not on a core segment.
        let a = Collider::Capsule { a: Vec2::new(0.0, 0.0), b: Vec2::new(4.0, 0.0), radius: 1.0 };
        let b = Collider::Capsule { a: Vec2::new(1.0, 1.0), b: Vec2::new(3.0, 1.0), radius: 0.2 };
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(a, b, 0.0005, &mut m);
        assert_eq!(m.contact_count, 2);
        assert!((m.contact1.y - 0.9).abs() < EPSILON);
        assert!((m.contact2.y - 0.9).abs() < EPSILON);

        // A slight tilt well above the distance tolerance is not parallel.
        let tilted = Collider::Capsule { a: Vec2::new(1.0, 1.0), b: Vec2::new(3.0, 1.01), radius: 0.2 };
        let mut m = intersecting(Vec2::new(0.0, 1.0));
        find_contact_points(a, tilted, 0.0005, &mut m);
        assert_eq!(m.contact_count, 1);
        assert!((m.contact1.x - 1.0).abs() < EPSILON);
        assert!((m.contact1.y - 0.9).abs() < EPSILON);
    }

    #[test]
    fn test_non_intersecting_manifold_gets_no_points() {
        let mut m = ContactManifold::new(BodyHandle(0), BodyHandle(1));
        m.contact_count = 2;
        find_contact_points(
            Collider::Circle { center: Vec2::ZERO, radius: 1.0 },
            Collider::Circle { center: Vec2::new(5.0, 0.0), radius: 1.0 },
            0.0005,
            &mut m,
        );
        assert_eq!(m.contact_count, 0);
    }
}
