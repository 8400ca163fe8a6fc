/// Configuration for spring physics transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring (default: 100.0)
    pub stiffness: f32,
    /// Damping coefficient (default: 10.0)
    pub damping: f32,
    /// Stop at the target instead of bouncing past it
    pub overshoot_clamping: bool,
    /// Distance from the target below which the spring counts as resting
    pub rest_displacement_threshold: f32,
    /// Speed below which the spring counts as resting
    pub rest_speed_threshold: f32,
}

impl SpringConfig {
    /// General purpose spring with light overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 10.0,
        overshoot_clamping: false,
        rest_displacement_threshold: 0.001,
        rest_speed_threshold: 0.001,
    };

    /// The horizontal push used by UIKit's navigation controller
    pub const IOS_NAVIGATION: Self = Self {
        mass: 3.0,
        stiffness: 1000.0,
        damping: 500.0,
        overshoot_clamping: true,
        rest_displacement_threshold: 0.01,
        rest_speed_threshold: 0.01,
    };

    /// Damping ratio (zeta). Values above 1.0 never oscillate.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Returns true if the spring settles without oscillating
    pub fn is_overdamped(&self) -> bool {
        self.damping_ratio() > 1.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ios_navigation_constants() {
        let config = SpringConfig::IOS_NAVIGATION;
        assert_eq!(config.stiffness, 1000.0);
        assert_eq!(config.damping, 500.0);
        assert_eq!(config.mass, 3.0);
        assert!(config.overshoot_clamping);
        assert_eq!(config.rest_displacement_threshold, 0.01);
        assert_eq!(config.rest_speed_threshold, 0.01);
    }

    #[test]
    fn test_damping_ratio() {
        // 500 / (2 * sqrt(3000)) ~= 4.56
        assert!(SpringConfig::IOS_NAVIGATION.is_overdamped());
        // 10 / (2 * sqrt(100)) = 0.5
        assert!((SpringConfig::DEFAULT.damping_ratio() - 0.5).abs() < 1e-6);
        assert!(!SpringConfig::DEFAULT.is_overdamped());
    }
}
