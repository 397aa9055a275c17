use crate::collision::collider::{Collider, CollisionBody};
use crate::math::{Transform, Vec2};
use crate::shapes::{Shape, VertexArray};

/// Index of a body in the caller's body storage.
///
/// Manifolds refer to their bodies through handles so they can be pooled
/// while the bodies themselves keep moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyHandle(pub usize);

/// A shape placed in the world.
///
/// World-space vertices are recomputed whenever the transform changes, so the
/// narrow phase can borrow them without transforming anything per test.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    shape: Shape,
    transform: Transform,
    world_vertices: VertexArray,
}

impl RigidBody {
    pub fn new(shape: impl Into<Shape>, position: Vec2, rotation: f64) -> Self {
        let mut body = Self {
            shape: shape.into(),
            transform: Transform::new(position, rotation),
            world_vertices: VertexArray::new(),
        };
        body.refresh_world_vertices();
        body
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    /// Cached world-space vertices. Empty for circles, the two endpoints for capsules.
    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world_vertices
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.refresh_world_vertices();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.set_transform(Transform::new(position, self.transform.rotation));
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.set_transform(Transform::new(self.transform.position, rotation));
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.transform.position + delta);
    }

    fn refresh_world_vertices(&mut self) {
        self.world_vertices.clear();
        match &self.shape {
            Shape::Circle(_) => {}
            Shape::Capsule(capsule) => {
                self.transform.apply_all(&capsule.endpoints(), &mut self.world_vertices);
            }
            Shape::Polygon(polygon) => {
                self.transform.apply_all(polygon.vertices(), &mut self.world_vertices);
            }
        }
    }
}

impl CollisionBody for RigidBody {
    fn collider(&self) -> Collider<'_> {
        match &self.shape {
            Shape::Circle(circle) => Collider::Circle {
                center: self.transform.position,
                radius: circle.radius,
            },
            Shape::Capsule(capsule) => Collider::Capsule {
                a: self.world_vertices[0],
                b: self.world_vertices[1],
                radius: capsule.radius,
            },
            Shape::Polygon(_) => Collider::Polygon {
                vertices: &self.world_vertices,
            },
        }
    }
}
