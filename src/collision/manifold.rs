use arrayvec::ArrayVec;

use crate::math::vec2::Vec2;
use crate::objects::BodyHandle;

/// Everything the resolver needs to know about one body pair after a narrow-phase pass.
///
/// A manifold is meant to be pooled per tracked pair and fully overwritten on
/// every pass; call [`ContactManifold::reset`] before reusing it for another pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactManifold {
    /// Whether the last intersection test found overlap.
    pub is_intersecting: bool,
    /// Gate the resolver checks before applying impulses. Set by the caller.
    pub enable_resolve_contact: bool,
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Unit separating axis pointing from body A towards body B.
    /// Only meaningful while `is_intersecting` is true.
    pub normal: Vec2,
    /// Penetration along `normal`.
    pub depth: f64,
    pub contact1: Vec2,
    pub contact2: Vec2,
    /// Number of valid contact points, 0 to 2.
    pub contact_count: usize,
    // Scratch owned by the resolver.
    pub impulse_x: f64,
    pub impulse_y: f64,
}

impl ContactManifold {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle) -> Self {
        Self {
            is_intersecting: false,
            enable_resolve_contact: true,
            body_a,
            body_b,
            normal: Vec2::ZERO,
            depth: 0.0,
            contact1: Vec2::ZERO,
            contact2: Vec2::ZERO,
            contact_count: 0,
            impulse_x: 0.0,
            impulse_y: 0.0,
        }
    }

    /// Rebinds the manifold to a new pair and clears every field.
    pub fn reset(&mut self, body_a: BodyHandle, body_b: BodyHandle) {
        *self = Self::new(body_a, body_b);
    }

    /// Marks the pair as separated, keeping the body handles and the resolve gate.
    pub fn clear(&mut self) {
        self.is_intersecting = false;
        self.normal = Vec2::ZERO;
        self.depth = 0.0;
        self.clear_contacts();
    }

    pub(crate) fn clear_contacts(&mut self) {
        self.contact1 = Vec2::ZERO;
        self.contact2 = Vec2::ZERO;
        self.contact_count = 0;
    }

    /// Minimum translation vector: how far B must move along the normal to separate.
    pub fn mtv(&self) -> Vec2 {
        self.normal * self.depth
    }

    /// The valid contact points, in order.
    pub fn contacts(&self) -> ArrayVec<Vec2, 2> {
        [self.contact1, self.contact2]
            .into_iter()
            .take(self.contact_count)
            .collect()
    }

    /// Records the next contact point. Points past the second are dropped.
    pub(crate) fn push_contact(&mut self, point: Vec2) {
        match self.contact_count {
            0 => self.contact1 = point,
            1 => self.contact2 = point,
            _ => return,
        }
        self.contact_count += 1;
    }
}
