//! Transition configuration records and host detection.

use std::env;
use std::sync::OnceLock;

use crate::animation::TransitionSpec;
use crate::error::Result;
use crate::interpolator::ScreenInterpolator;
use crate::platform::{Capabilities, Platform};
use crate::style::ContainerStyle;

/// Environment variable naming the platform family (`ios` or `android`)
pub const PLATFORM_ENV: &str = "STACK_TRANSITIONS_PLATFORM";
/// Environment variable holding the animation runtime version (`MAJOR.MINOR[.PATCH]`)
pub const RUNTIME_VERSION_ENV: &str = "STACK_TRANSITIONS_RUNTIME_VERSION";

/// Base record that can be refined by a partial overlay
///
/// Implemented through `#[derive(Overlay)]`, which generates the partial type.
pub trait Overlay: Sized {
    type Partial;

    /// Replace every field set in `partial`, keep all others
    fn overlay(self, partial: Self::Partial) -> Self;

    /// Like [`Overlay::overlay`], returning `self` unchanged for `None`
    fn overlay_opt(self, partial: Option<Self::Partial>) -> Self {
        match partial {
            Some(partial) => self.overlay(partial),
            None => self,
        }
    }
}

/// How a screen transition is animated
#[derive(Clone, Debug, PartialEq, stack_transitions_macros::Overlay)]
pub struct TransitionConfig {
    /// Timing law driving the transition progress
    pub transition_spec: TransitionSpec,
    /// Maps progress to the style of each screen
    pub screen_interpolator: ScreenInterpolator,
    /// Styling of the container behind the screens
    pub container_style: Option<ContainerStyle>,
}

impl TransitionConfig {
    pub fn new(transition_spec: TransitionSpec, screen_interpolator: ScreenInterpolator) -> Self {
        Self {
            transition_spec,
            screen_interpolator,
            container_style: None,
        }
    }

    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = Some(style);
        self
    }
}

/// Facts about the host that decide which presets apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub platform: Platform,
    pub capabilities: Capabilities,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            platform: Platform::current(),
            capabilities: Capabilities::default(),
        }
    }
}

static GLOBAL_HOST: OnceLock<HostConfig> = OnceLock::new();

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host configuration of the current process, read from the environment once
    pub fn global() -> &'static HostConfig {
        GLOBAL_HOST.get_or_init(Self::from_env)
    }

    /// Detected defaults, overridden by [`PLATFORM_ENV`] and
    /// [`RUNTIME_VERSION_ENV`] when set
    ///
    /// Malformed values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`HostConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(PLATFORM_ENV) {
            match value.parse() {
                Ok(platform) => config.platform = platform,
                Err(e) => log::warn!("Ignoring {}: {}", PLATFORM_ENV, e),
            }
        }

        if let Some(value) = lookup(RUNTIME_VERSION_ENV) {
            match Capabilities::parse_runtime_version(&value) {
                Ok(capabilities) => config.capabilities = capabilities,
                Err(e) => log::warn!("Ignoring {}: {}", RUNTIME_VERSION_ENV, e),
            }
        }

        config
    }

    /// Build from explicit strings, failing on the first malformed value
    pub fn parse(platform: &str, runtime_version: &str) -> Result<Self> {
        Ok(Self {
            platform: platform.parse()?,
            capabilities: Capabilities::parse_runtime_version(runtime_version)?,
        })
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}
