pub mod capsule;
pub mod circle;
pub mod polygon;

pub use capsule::Capsule;
pub use circle::Circle;
pub use polygon::{Polygon, VertexArray};

/// Upper bound on polygon vertex count.
///
/// Contact generation is quadratic in the vertex count, so the bound is
/// enforced at construction.
pub const MAX_POLYGON_VERTICES: usize = 16;

/// Geometry of a body in its local frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Circle(Circle),
    Capsule(Capsule),
    Polygon(Polygon),
}

/// Shape tag used to dispatch pair routines.
///
/// The declaration order is the canonical argument order of the pair routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    Circle,
    Capsule,
    Polygon,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Capsule(_) => ShapeKind::Capsule,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Capsule> for Shape {
    fn from(capsule: Capsule) -> Self {
        Shape::Capsule(capsule)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
