pub mod collider;
pub mod contacts;
pub mod geometry;
pub mod intersection;
pub mod manifold;
pub mod narrow_phase;

// Re-export key types
pub use collider::{Collider, CollisionBody};
pub use intersection::{test_pair, Penetration};
pub use manifold::ContactManifold;
pub use narrow_phase::{find_contact_points, test_intersection, NarrowPhase};
