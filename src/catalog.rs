//! The fixed library of transition presets.
//!
//! A [`TransitionCatalog`] is built once from the host [`Capabilities`] and is
//! read-only afterwards. The only capability-dependent piece is the timing of
//! the iOS presets: a spring when the runtime has the improved spring driver,
//! otherwise a bezier curve tuned to look the same.

use std::fmt;
use std::sync::OnceLock;

use crate::animation::{SpringConfig, TimingFunction, Transition, TransitionSpec};
use crate::config::{HostConfig, TransitionConfig};
use crate::interpolator::{
    for_fade_from_bottom, for_fade_to_bottom, for_horizontal, for_no_animation, for_vertical,
};
use crate::platform::Capabilities;
use crate::style::{Color, ContainerStyle};

/// Duration of the bezier stand-in for the iOS spring
pub const IOS_FALLBACK_DURATION_MS: f32 = 500.0;
/// Bezier control points approximating the iOS spring
pub const IOS_FALLBACK_BEZIER: (f32, f32, f32, f32) = (0.2833, 0.99, 0.31833, 0.99);
/// Android `activity_open_enter` duration
pub const FADE_IN_DURATION_MS: f32 = 350.0;
/// Android `activity_close_exit` duration
pub const FADE_OUT_DURATION_MS: f32 = 150.0;

/// Names of the catalog presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// iOS push: slides in from the trailing edge
    SlideFromSide,
    /// iOS full-screen modal: slides up from the bottom edge
    ModalSlideFromEdge,
    /// Android activity open: fades in from slightly below
    FadeInFromEdge,
    /// Android activity close: fades out towards the bottom
    FadeOutToEdge,
    /// Instant switch
    NoAnimation,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::SlideFromSide,
        Preset::ModalSlideFromEdge,
        Preset::FadeInFromEdge,
        Preset::FadeOutToEdge,
        Preset::NoAnimation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::SlideFromSide => "SlideFromSide",
            Preset::ModalSlideFromEdge => "ModalSlideFromEdge",
            Preset::FadeInFromEdge => "FadeInFromEdge",
            Preset::FadeOutToEdge => "FadeOutToEdge",
            Preset::NoAnimation => "NoAnimation",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Timing shared by the iOS presets
pub fn ios_transition_spec(capabilities: Capabilities) -> TransitionSpec {
    if capabilities.supports_improved_spring() {
        // The values UINavigationController animates with
        TransitionSpec::Spring(SpringConfig::IOS_NAVIGATION)
    } else {
        let (x1, y1, x2, y2) = IOS_FALLBACK_BEZIER;
        TransitionSpec::timing(
            IOS_FALLBACK_DURATION_MS,
            TimingFunction::CubicBezier(x1, y1, x2, y2),
        )
    }
}

/// The five presets, resolved for one set of capabilities
#[derive(Debug, Clone)]
pub struct TransitionCatalog {
    capabilities: Capabilities,
    slide_from_side: TransitionConfig,
    modal_slide_from_edge: TransitionConfig,
    fade_in_from_edge: TransitionConfig,
    fade_out_to_edge: TransitionConfig,
    no_animation: TransitionConfig,
}

static GLOBAL_CATALOG: OnceLock<TransitionCatalog> = OnceLock::new();

impl TransitionCatalog {
    pub fn new(capabilities: Capabilities) -> Self {
        let ios_spec = ios_transition_spec(capabilities);
        log::debug!(
            "Building transition catalog with {:?} timing for iOS presets",
            ios_spec.driver()
        );

        let card_background = ContainerStyle::background(Color::CARD_BACKGROUND);

        Self {
            capabilities,
            slide_from_side: TransitionConfig::new(ios_spec.clone(), for_horizontal())
                .container_style(card_background),
            modal_slide_from_edge: TransitionConfig::new(ios_spec, for_vertical())
                .container_style(card_background),
            // Decelerate, see activity_open_enter.xml
            fade_in_from_edge: TransitionConfig::new(
                TransitionSpec::timing(
                    FADE_IN_DURATION_MS,
                    TimingFunction::out(TimingFunction::Poly(5.0)),
                ),
                for_fade_from_bottom(),
            ),
            // Accelerate, see activity_close_exit.xml
            fade_out_to_edge: TransitionConfig::new(
                TransitionSpec::timing(
                    FADE_OUT_DURATION_MS,
                    TimingFunction::ease_in_with(TimingFunction::Linear),
                ),
                for_fade_to_bottom(),
            ),
            no_animation: TransitionConfig::new(Transition::instant().into(), for_no_animation())
                .container_style(card_background),
        }
    }

    /// Catalog for the current process, built on first use from
    /// [`HostConfig::global`]
    pub fn global() -> &'static TransitionCatalog {
        GLOBAL_CATALOG.get_or_init(|| {
            let host = HostConfig::global();
            log::info!(
                "Initializing transition catalog (improved spring: {})",
                host.capabilities.supports_improved_spring()
            );
            TransitionCatalog::new(host.capabilities)
        })
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn get(&self, preset: Preset) -> &TransitionConfig {
        match preset {
            Preset::SlideFromSide => &self.slide_from_side,
            Preset::ModalSlideFromEdge => &self.modal_slide_from_edge,
            Preset::FadeInFromEdge => &self.fade_in_from_edge,
            Preset::FadeOutToEdge => &self.fade_out_to_edge,
            Preset::NoAnimation => &self.no_animation,
        }
    }

    /// Preset whose config is `config`, if it is one of ours
    pub fn identify(&self, config: &TransitionConfig) -> Option<Preset> {
        Preset::ALL.into_iter().find(|&preset| self.get(preset) == config)
    }

    pub fn slide_from_side(&self) -> &TransitionConfig {
        &self.slide_from_side
    }

    pub fn modal_slide_from_edge(&self) -> &TransitionConfig {
        &self.modal_slide_from_edge
    }

    pub fn fade_in_from_edge(&self) -> &TransitionConfig {
        &self.fade_in_from_edge
    }

    pub fn fade_out_to_edge(&self) -> &TransitionConfig {
        &self.fade_out_to_edge
    }

    pub fn no_animation(&self) -> &TransitionConfig {
        &self.no_animation
    }
}

impl Default for TransitionCatalog {
    fn default() -> Self {
        Self::new(Capabilities::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingDriver;

    #[test]
    fn test_spring_when_supported() {
        let catalog = TransitionCatalog::new(Capabilities::IMPROVED_SPRING);
        let spec = &catalog.slide_from_side().transition_spec;
        assert_eq!(spec.driver(), TimingDriver::Spring);
        assert_eq!(spec.as_spring(), Some(&SpringConfig::IOS_NAVIGATION));
    }

    #[test]
    fn test_bezier_fallback() {
        let catalog = TransitionCatalog::new(Capabilities::empty());
        let transition = catalog
            .slide_from_side()
            .transition_spec
            .as_timing()
            .expect("fallback should be duration based");
        assert_eq!(transition.duration_ms, 500.0);
        assert_eq!(
            transition.timing,
            TimingFunction::CubicBezier(0.2833, 0.99, 0.31833, 0.99)
        );
    }

    #[test]
    fn test_ios_presets_share_timing() {
        for capabilities in [Capabilities::empty(), Capabilities::IMPROVED_SPRING] {
            let catalog = TransitionCatalog::new(capabilities);
            assert_eq!(
                catalog.slide_from_side().transition_spec,
                catalog.modal_slide_from_edge().transition_spec
            );
        }
    }

    #[test]
    fn test_android_presets_are_asymmetric() {
        let catalog = TransitionCatalog::default();

        let open = catalog.fade_in_from_edge().transition_spec.as_timing().unwrap();
        assert_eq!(open.duration_ms, 350.0);
        assert_eq!(open.timing, TimingFunction::out(TimingFunction::Poly(5.0)));

        let close = catalog.fade_out_to_edge().transition_spec.as_timing().unwrap();
        assert_eq!(close.duration_ms, 150.0);
        assert_eq!(close.timing, TimingFunction::ease_in_with(TimingFunction::Linear));
    }

    #[test]
    fn test_container_styles() {
        let catalog = TransitionCatalog::default();
        let card = Some(ContainerStyle::background(Color::CARD_BACKGROUND));
        assert_eq!(catalog.get(Preset::SlideFromSide).container_style, card);
        assert_eq!(catalog.get(Preset::ModalSlideFromEdge).container_style, card);
        assert_eq!(catalog.get(Preset::NoAnimation).container_style, card);
        assert_eq!(catalog.get(Preset::FadeInFromEdge).container_style, None);
        assert_eq!(catalog.get(Preset::FadeOutToEdge).container_style, None);
    }

    #[test]
    fn test_no_animation_is_instant() {
        let catalog = TransitionCatalog::default();
        let spec = &catalog.no_animation().transition_spec;
        assert_eq!(spec.driver(), TimingDriver::Timing);
        assert_eq!(spec.duration_ms(), Some(0.0));
    }

    #[test]
    fn test_identify_round_trips() {
        let catalog = TransitionCatalog::default();
        for preset in Preset::ALL {
            assert_eq!(catalog.identify(catalog.get(preset)), Some(preset));
        }
    }

    #[test]
    fn test_global_is_built_once() {
        let a = TransitionCatalog::global();
        let b = TransitionCatalog::global();
        assert!(std::ptr::eq(a, b));
    }
}
