//! Narrow-phase collision detection and contact generation for 2D convex shapes.
//!
//! Pairs suspected to overlap by a broad phase are tested with the separating
//! axis theorem. Overlapping pairs get a unit normal pointing from the first
//! body to the second, the penetration depth along it, and one or two contact
//! points for an impulse solver.
//!
//! ```
//! use sat_narrowphase::{test_intersection, find_contact_points, BodyHandle, Circle, ContactManifold, RigidBody, Vec2};
//!
//! let a = RigidBody::new(Circle::new(5.0)?, Vec2::ZERO, 0.0);
//! let b = RigidBody::new(Circle::new(4.0)?, Vec2::new(8.0, 0.0), 0.0);
//! let mut manifold = ContactManifold::new(BodyHandle(0), BodyHandle(1));
//!
//! if test_intersection(&a, &b, &mut manifold) {
//!     find_contact_points(&a, &b, &mut manifold);
//! }
//! assert!((manifold.depth - 1.0).abs() < 1e-9);
//! assert_eq!(manifold.contact_count, 1);
//! # Ok::<(), sat_narrowphase::ShapeError>(())
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;

// Re-export key types for easier use
pub use collision::{
    find_contact_points, test_intersection, Collider, CollisionBody, ContactManifold, NarrowPhase,
};
pub use config::NarrowPhaseConfig;
pub use error::ShapeError;
pub use math::{Transform, Vec2};
pub use objects::{BodyHandle, RigidBody};
pub use shapes::{Capsule, Circle, Polygon, Shape, ShapeKind, MAX_POLYGON_VERTICES};
