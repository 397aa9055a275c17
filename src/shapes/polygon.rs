use arrayvec::ArrayVec;

use super::MAX_POLYGON_VERTICES;
use crate::error::ShapeError;
use crate::math::vec2::Vec2;

/// Fixed-capacity vertex storage shared by polygons and cached world vertices.
pub type VertexArray = ArrayVec<Vec2, MAX_POLYGON_VERTICES>;

/// A strictly convex polygon in local space, stored in clockwise order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PolygonData")
)]
pub struct Polygon {
    vertices: VertexArray,
}

/// Unchecked wire form; deserialization goes through [`Polygon::new`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Deserialize)]
struct PolygonData {
    vertices: Vec<Vec2>,
}

#[cfg(feature = "serde")]
impl TryFrom<PolygonData> for Polygon {
    type Error = ShapeError;

    fn try_from(data: PolygonData) -> Result<Self, Self::Error> {
        Self::new(&data.vertices)
    }
}

impl Polygon {
    /// Builds a polygon from its vertices.
    ///
    /// Either winding is accepted; counter-clockwise input is reversed so the
    /// stored order is always clockwise. Fails on fewer than 3 or more than
    /// [`MAX_POLYGON_VERTICES`] vertices, non-finite coordinates, zero-length
    /// edges and outlines that are not strictly convex. Collinear corners and
    /// self-intersecting stars count as non-convex.
    pub fn new(vertices: &[Vec2]) -> Result<Self, ShapeError> {
        let n = vertices.len();
        if n < 3 {
            return Err(ShapeError::TooFewVertices(n));
        }
        if n > MAX_POLYGON_VERTICES {
            return Err(ShapeError::TooManyVertices(n));
        }

        if let Some(i) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteVertex(i));
        }

        let mut stored: VertexArray = vertices.iter().copied().collect();

        for i in 0..n {
            if stored[i].distance_squared(stored[(i + 1) % n]) < 1e-12 {
                return Err(ShapeError::DegenerateEdge(i));
            }
        }

        if signed_area(&stored) > 0.0 {
            stored.reverse();
        }

        // Clockwise means every corner turns right, and the turns add up to
        // exactly one revolution. A star turns right everywhere but winds twice.
        let mut turning = 0.0_f64;
        for i in 0..n {
            let incoming = stored[(i + 1) % n] - stored[i];
            let outgoing = stored[(i + 2) % n] - stored[(i + 1) % n];
            let cross = incoming.cross(outgoing);
            if cross >= -1e-12 {
                return Err(ShapeError::NotConvex((i + 1) % n));
            }
            turning += cross.atan2(incoming.dot(outgoing));
        }
        if (turning + std::f64::consts::TAU).abs() > 1e-6 {
            return Err(ShapeError::NotConvex(0));
        }

        Ok(Self { vertices: stored })
    }

    /// Axis-aligned rectangle centered on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, ShapeError> {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(&[
            Vec2::new(-hw, hh),
            Vec2::new(hw, hh),
            Vec2::new(hw, -hh),
            Vec2::new(-hw, -hh),
        ])
    }

    /// Regular polygon with `sides` corners on a circle of `radius`.
    pub fn regular(sides: usize, radius: f64) -> Result<Self, ShapeError> {
        if sides > MAX_POLYGON_VERTICES {
            return Err(ShapeError::TooManyVertices(sides));
        }
        let step = std::f64::consts::TAU / sides as f64;
        let vertices: VertexArray = (0..sides)
            .map(|i| Vec2::new(radius, 0.0).rotate(-step * i as f64))
            .collect();
        Self::new(&vertices)
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false, a valid polygon has at least 3 vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Area using the shoelace formula.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Area-weighted centroid.
    pub fn centroid(&self) -> Vec2 {
        let origin = self.vertices[0];
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;

        for i in 1..(self.vertices.len() - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];

            let triangle_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_area;
        }

        centroid / signed_area_sum
    }

    /// Outward unit normal of every edge `(v[i], v[i + 1])`.
    pub fn edge_normals(&self) -> VertexArray {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).perpendicular().normalize())
            .collect()
    }
}

fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    area / 2.0
}
