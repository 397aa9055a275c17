use crate::error::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CircleData")
)]
pub struct Circle {
    pub radius: f64,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Deserialize)]
struct CircleData {
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<CircleData> for Circle {
    type Error = ShapeError;

    fn try_from(data: CircleData) -> Result<Self, Self::Error> {
        Self::new(data.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }
}
