use super::vec2::Vec2;

/// Placement of a body in the world: rotation about the local origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64, // Radians
}

impl Transform {
    pub fn new(position: Vec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Local to world.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }

    /// World to local.
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        (point - self.position).rotate(-self.rotation)
    }

    /// Transforms every point of `local` into `out`, replacing its previous contents.
    pub fn apply_all<E: Extend<Vec2>>(self, local: &[Vec2], out: &mut E) {
        out.extend(local.iter().map(|&v| self.apply(v)));
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_transform_identity() {
        let t = Transform::identity();
        let p = Vec2::new(5.0, -3.0);
        assert!(t.apply(p).nearly_equal(p, EPSILON));
        assert!(t.apply_inverse(p).nearly_equal(p, EPSILON));
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn test_transform_apply_combined() {
        // Rotation of (1,0) -> (0,1), translation of (0,1) -> (10, 6)
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 2.0);
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert!((tp.x - 10.0).abs() < EPSILON);
        assert!((tp.y - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_inverse_combined() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 4.0);
        let p_local = Vec2::new(1.0, 1.0);
        let p_local_again = t.apply_inverse(t.apply(p_local));
        assert!((p_local_again.x - p_local.x).abs() < EPSILON);
        assert!((p_local_again.y - p_local.y).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_all() {
        let t = Transform::new(Vec2::new(1.0, 0.0), 0.0);
        let mut out = Vec::new();
        t.apply_all(&[Vec2::ZERO, Vec2::UP], &mut out);
        assert_eq!(out, vec![Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]);
    }
}
