//! Tunables for the narrow phase.

/// Default tolerance used when comparing contact distances and positions.
pub const DEFAULT_CONTACT_EPSILON: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NarrowPhaseConfig {
    /// Two candidate contact distances within this tolerance count as a tie,
    /// and two contact points closer than this count as the same point.
    pub contact_epsilon: f64,
    /// Test capsule-capsule pairs. When disabled such pairs never intersect.
    pub capsule_pairs: bool,
}

impl NarrowPhaseConfig {
    pub fn with_contact_epsilon(mut self, contact_epsilon: f64) -> Self {
        self.contact_epsilon = contact_epsilon;
        self
    }

    pub fn with_capsule_pairs(mut self, enabled: bool) -> Self {
        self.capsule_pairs = enabled;
        self
    }
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            contact_epsilon: DEFAULT_CONTACT_EPSILON,
            capsule_pairs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NarrowPhaseConfig::default();
        assert_eq!(config.contact_epsilon, DEFAULT_CONTACT_EPSILON);
        assert!(config.capsule_pairs);
    }

    #[test]
    fn test_builder_setters() {
        let config = NarrowPhaseConfig::default()
            .with_contact_epsilon(0.01)
            .with_capsule_pairs(false);
        assert_eq!(config.contact_epsilon, 0.01);
        assert!(!config.capsule_pairs);
    }
}
