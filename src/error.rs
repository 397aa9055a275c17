//! Errors raised while building shapes.
//!
//! The narrow phase itself is infallible; every invariant it depends on is
//! checked here, once, when the geometry is constructed.

use thiserror::Error;

use crate::shapes::MAX_POLYGON_VERTICES;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("polygon has {0} vertices, the limit is {max}", max = MAX_POLYGON_VERTICES)]
    TooManyVertices(usize),
    #[error("vertex {0} is not finite")]
    NonFiniteVertex(usize),
    #[error("polygon edge starting at vertex {0} has zero length")]
    DegenerateEdge(usize),
    #[error("polygon is not convex at vertex {0}")]
    NotConvex(usize),
    #[error("invalid radius {0}, circles need a finite positive radius and capsules a finite non-negative one")]
    InvalidRadius(f64),
    #[error("segment endpoints coincide")]
    DegenerateSegment,
}
