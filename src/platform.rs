//! Host platform identity and animation capabilities.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{ConfigError, Result};

/// Platform family whose transition conventions apply
///
/// `Ios` is the primary platform: it slides screens and has native
/// full-screen modals. Every other host behaves like `Android`, which fades
/// screens and only knows dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Platform family of the compile target
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn is_primary(self) -> bool {
        self == Platform::Ios
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(ConfigError::UnknownPlatform(s.to_string())),
        }
    }
}

bitflags! {
    /// Features of the animation runtime, probed once at startup
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Spring driver accepting stiffness, damping, mass and rest thresholds
        const IMPROVED_SPRING = 1 << 0;
    }
}

/// First runtime minor version (on major 0) with the improved spring driver
const IMPROVED_SPRING_MIN_MINOR: u32 = 50;

impl Capabilities {
    /// Capabilities of an animation runtime with the given version
    pub fn from_runtime_version(major: u32, minor: u32) -> Self {
        let mut capabilities = Capabilities::empty();
        if major > 0 || minor >= IMPROVED_SPRING_MIN_MINOR {
            capabilities |= Capabilities::IMPROVED_SPRING;
        }
        capabilities
    }

    /// Parse `MAJOR.MINOR[.PATCH]` and derive capabilities from it
    pub fn parse_runtime_version(version: &str) -> Result<Self> {
        let invalid = || ConfigError::InvalidRuntimeVersion(version.to_string());

        let mut parts = version.trim().split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        // Patch is optional and does not affect capabilities, but must be numeric
        if let Some(patch) = parts.next() {
            patch.parse::<u32>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::from_runtime_version(major, minor))
    }

    pub fn supports_improved_spring(self) -> bool {
        self.contains(Capabilities::IMPROVED_SPRING)
    }
}

impl Default for Capabilities {
    /// The built-in runtime ships every capability
    fn default() -> Self {
        Capabilities::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!("ios".parse::<Platform>(), Ok(Platform::Ios));
        assert_eq!(" Android ".parse::<Platform>(), Ok(Platform::Android));
        assert_eq!(
            "web".parse::<Platform>(),
            Err(ConfigError::UnknownPlatform("web".to_string()))
        );
    }

    #[test]
    fn test_platform_display_round_trips() {
        for platform in [Platform::Ios, Platform::Android] {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
        assert!(Platform::Ios.is_primary());
        assert!(!Platform::Android.is_primary());
    }

    #[test]
    fn test_improved_spring_version_gate() {
        assert!(!Capabilities::from_runtime_version(0, 49).supports_improved_spring());
        assert!(Capabilities::from_runtime_version(0, 50).supports_improved_spring());
        assert!(Capabilities::from_runtime_version(1, 0).supports_improved_spring());
    }

    #[test]
    fn test_parse_runtime_version() {
        assert_eq!(
            Capabilities::parse_runtime_version("0.72.4"),
            Ok(Capabilities::IMPROVED_SPRING)
        );
        assert_eq!(
            Capabilities::parse_runtime_version("0.44"),
            Ok(Capabilities::empty())
        );
        for bad in ["", "1", "0.x", "0.50.1.2", "0.50.beta"] {
            assert_eq!(
                Capabilities::parse_runtime_version(bad),
                Err(ConfigError::InvalidRuntimeVersion(bad.to_string())),
                "{bad}"
            );
        }
    }
}
