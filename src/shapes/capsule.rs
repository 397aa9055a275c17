use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// A line segment swept by a radius (stadium shape).
///
/// A radius of zero is allowed and describes a bare segment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CapsuleData")
)]
pub struct Capsule {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f64,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Deserialize)]
struct CapsuleData {
    a: Vec2,
    b: Vec2,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CapsuleData> for Capsule {
    type Error = ShapeError;

    fn try_from(data: CapsuleData) -> Result<Self, Self::Error> {
        Self::new(data.a, data.b, data.radius)
    }
}

impl Capsule {
    pub fn new(a: Vec2, b: Vec2, radius: f64) -> Result<Self, ShapeError> {
        if let Some(i) = [a, b].iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteVertex(i));
        }
        if a.distance_squared(b) < 1e-12 {
            return Err(ShapeError::DegenerateSegment);
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self { a, b, radius })
    }

    /// A bare segment with no thickness.
    pub fn segment(a: Vec2, b: Vec2) -> Result<Self, ShapeError> {
        Self::new(a, b, 0.0)
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Direction from `a` to `b`, not normalized.
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.a + self.b) / 2.0
    }

    pub fn endpoints(&self) -> [Vec2; 2] {
        [self.a, self.b]
    }
}
