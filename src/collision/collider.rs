//! The boundary between body providers and the narrow phase.

use crate::math::vec2::Vec2;
use crate::shapes::ShapeKind;

/// Borrowed world-space geometry of one body, ready for pair tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider<'a> {
    Circle { center: Vec2, radius: f64 },
    Capsule { a: Vec2, b: Vec2, radius: f64 },
    /// Clockwise, convex, at least 3 vertices.
    Polygon { vertices: &'a [Vec2] },
}

impl Collider<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Collider::Circle { .. } => ShapeKind::Circle,
            Collider::Capsule { .. } => ShapeKind::Capsule,
            Collider::Polygon { .. } => ShapeKind::Polygon,
        }
    }

    /// Reference point used to orient collision normals from one body to the other.
    ///
    /// Circle center, capsule midpoint or polygon vertex average.
    pub fn center(&self) -> Vec2 {
        match *self {
            Collider::Circle { center, .. } => center,
            Collider::Capsule { a, b, .. } => (a + b) / 2.0,
            Collider::Polygon { vertices } => {
                let mut sum = Vec2::ZERO;
                for &v in vertices {
                    sum += v;
                }
                sum / vertices.len() as f64
            }
        }
    }
}

/// Anything that can hand the narrow phase its current world-space geometry.
///
/// Implementors own transform caching; the narrow phase never rotates or
/// translates vertices itself.
pub trait CollisionBody {
    fn collider(&self) -> Collider<'_>;

    fn shape_kind(&self) -> ShapeKind {
        self.collider().kind()
    }
}

impl CollisionBody for Collider<'_> {
    fn collider(&self) -> Collider<'_> {
        *self
    }
}
