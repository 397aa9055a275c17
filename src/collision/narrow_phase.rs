use log::{trace, warn};

use super::collider::CollisionBody;
use super::contacts::find_contact_points as fill_contacts;
use super::intersection::test_pair;
use super::manifold::ContactManifold;
use crate::config::NarrowPhaseConfig;

/// Entry point for the narrow phase: exact overlap test and contact generation
/// for pairs handed over by a broad phase.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NarrowPhase {
    pub config: NarrowPhaseConfig,
}

impl NarrowPhase {
    pub fn new(config: NarrowPhaseConfig) -> Self {
        Self { config }
    }

    /// Tests `a` against `b` and records the outcome in `manifold`.
    ///
    /// On overlap `is_intersecting`, `normal` (unit, from A towards B) and
    /// `depth` are set. Contact points are cleared in both cases; fill them with
    /// [`NarrowPhase::fill_contact_points`].
    pub fn test<A, B>(&self, a: &A, b: &B, manifold: &mut ContactManifold) -> bool
    where
        A: CollisionBody + ?Sized,
        B: CollisionBody + ?Sized,
    {
        manifold.clear();

        let Some(penetration) = test_pair(a.collider(), b.collider(), &self.config) else {
            return false;
        };

        if !penetration.normal.is_finite() || !penetration.depth.is_finite() {
            warn!(
                "non-finite penetration between {:?} and {:?}: {:?}",
                manifold.body_a, manifold.body_b, penetration
            );
        }
        trace!(
            "{:?}/{:?} intersect: normal {:?}, depth {}",
            manifold.body_a,
            manifold.body_b,
            penetration.normal,
            penetration.depth
        );

        manifold.is_intersecting = true;
        manifold.normal = penetration.normal;
        manifold.depth = penetration.depth;
        true
    }

    /// Computes the 1 or 2 world-space contact points of an intersecting pair.
    ///
    /// `a` and `b` must be the bodies of the preceding [`NarrowPhase::test`] call, in the same order.
    pub fn fill_contact_points<A, B>(&self, a: &A, b: &B, manifold: &mut ContactManifold)
    where
        A: CollisionBody + ?Sized,
        B: CollisionBody + ?Sized,
    {
        fill_contacts(a.collider(), b.collider(), self.config.contact_epsilon, manifold);
    }

    /// Runs [`NarrowPhase::test`] and, on overlap, [`NarrowPhase::fill_contact_points`].
    pub fn collide<A, B>(&self, a: &A, b: &B, manifold: &mut ContactManifold) -> bool
    where
        A: CollisionBody + ?Sized,
        B: CollisionBody + ?Sized,
    {
        if !self.test(a, b, manifold) {
            return false;
        }
        self.fill_contact_points(a, b, manifold);
        true
    }
}

/// [`NarrowPhase::test`] with the default configuration.
pub fn test_intersection<A, B>(a: &A, b: &B, manifold: &mut ContactManifold) -> bool
where
    A: CollisionBody + ?Sized,
    B: CollisionBody + ?Sized,
{
    NarrowPhase::default().test(a, b, manifold)
}

/// [`NarrowPhase::fill_contact_points`] with the default configuration.
pub fn find_contact_points<A, B>(a: &A, b: &B, manifold: &mut ContactManifold)
where
    A: CollisionBody + ?Sized,
    B: CollisionBody + ?Sized,
{
    NarrowPhase::default().fill_contact_points(a, b, manifold)
}
