//! Chooses the transition preset for a navigation change and applies caller
//! overrides on top of it.
//!
//! Rules, first match wins:
//!
//! 1. A transparent modal on Android gets [`Preset::NoAnimation`]; the caller
//!    animates it.
//! 2. Any other Android transition fades: [`Preset::FadeOutToEdge`] when going
//!    back, [`Preset::FadeInFromEdge`] otherwise. Android has dialogs, not
//!    full-screen modals, so the modal flag does not matter here.
//! 3. iOS slides: [`Preset::ModalSlideFromEdge`] for modals,
//!    [`Preset::SlideFromSide`] otherwise.
//!
//! The transparency check only exists for Android.

use crate::catalog::{Preset, TransitionCatalog};
use crate::config::{HostConfig, Overlay, TransitionConfig, TransitionConfigOverlay};
use crate::navigation::{TransitionRequest, TransitionState};
use crate::platform::Platform;

/// Caller hook refining the selected preset
///
/// Receives the current state, the previous state if any, and the modal flag.
/// Fields set in the returned overlay replace those of the preset. The hook
/// never influences which preset is chosen.
pub trait TransitionConfigurer<R = ()> {
    fn configure(
        &self,
        current: &TransitionState<R>,
        previous: Option<&TransitionState<R>>,
        is_modal: bool,
    ) -> TransitionConfigOverlay;
}

impl<R, F> TransitionConfigurer<R> for F
where
    F: Fn(&TransitionState<R>, Option<&TransitionState<R>>, bool) -> TransitionConfigOverlay,
{
    fn configure(
        &self,
        current: &TransitionState<R>,
        previous: Option<&TransitionState<R>>,
        is_modal: bool,
    ) -> TransitionConfigOverlay {
        self(current, previous, is_modal)
    }
}

/// Pick the preset for `request` on `platform`
pub fn select_preset<R>(platform: Platform, request: &TransitionRequest<'_, R>) -> Preset {
    if request.is_modal && request.is_transparent && platform == Platform::Android {
        return Preset::NoAnimation;
    }

    if !platform.is_primary() {
        return if request.is_back() {
            Preset::FadeOutToEdge
        } else {
            Preset::FadeInFromEdge
        };
    }

    if request.is_modal {
        Preset::ModalSlideFromEdge
    } else {
        Preset::SlideFromSide
    }
}

/// Preset selection bound to a catalog and a platform
#[derive(Debug, Clone, Copy)]
pub struct TransitionSelector<'c> {
    catalog: &'c TransitionCatalog,
    platform: Platform,
}

impl<'c> TransitionSelector<'c> {
    pub fn new(catalog: &'c TransitionCatalog, platform: Platform) -> Self {
        Self { catalog, platform }
    }

    pub fn catalog(&self) -> &'c TransitionCatalog {
        self.catalog
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn select<R>(&self, request: &TransitionRequest<'_, R>) -> Preset {
        let preset = select_preset(self.platform, request);
        log::trace!(
            "Selected {} for {} (index {} from {:?}, modal: {}, transparent: {})",
            preset,
            self.platform,
            request.current.index,
            request.previous.map(|previous| previous.index),
            request.is_modal,
            request.is_transparent
        );
        preset
    }

    /// The catalog preset for `request`, untouched
    pub fn select_default_config<R>(
        &self,
        request: &TransitionRequest<'_, R>,
    ) -> &'c TransitionConfig {
        self.catalog.get(self.select(request))
    }

    /// The catalog preset for `request` with the configurer's overlay applied
    pub fn resolve_config<R>(
        &self,
        configurer: Option<&dyn TransitionConfigurer<R>>,
        request: &TransitionRequest<'_, R>,
    ) -> TransitionConfig {
        let config = self.select_default_config(request).clone();
        match configurer {
            Some(configurer) => {
                let overlay =
                    configurer.configure(request.current, request.previous, request.is_modal);
                if !overlay.is_empty() {
                    log::debug!("Applying transition override {:?}", overlay);
                }
                config.overlay(overlay)
            }
            None => config,
        }
    }
}

impl TransitionSelector<'static> {
    /// Selector over [`TransitionCatalog::global`] for the process host
    pub fn global() -> Self {
        Self::new(TransitionCatalog::global(), HostConfig::global().platform)
    }
}

/// [`TransitionSelector::select_default_config`] on the process-wide selector
pub fn select_default_config<R>(request: &TransitionRequest<'_, R>) -> &'static TransitionConfig {
    TransitionSelector::global().select_default_config(request)
}

/// [`TransitionSelector::resolve_config`] on the process-wide selector
pub fn resolve_config<R>(
    configurer: Option<&dyn TransitionConfigurer<R>>,
    request: &TransitionRequest<'_, R>,
) -> TransitionConfig {
    TransitionSelector::global().resolve_config(configurer, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Capabilities;
    use crate::style::{Color, ContainerStyle};

    #[test]
    fn test_transparent_modal_on_android() {
        let current = TransitionState::new(3);
        let previous = TransitionState::new(7);
        let request = TransitionRequest::new(&current)
            .previous(&previous)
            .modal(true)
            .transparent(true);
        assert_eq!(select_preset(Platform::Android, &request), Preset::NoAnimation);
    }

    #[test]
    fn test_transparent_modal_on_ios_still_slides() {
        let current = TransitionState::new(1);
        let request = TransitionRequest::new(&current).modal(true).transparent(true);
        assert_eq!(
            select_preset(Platform::Ios, &request),
            Preset::ModalSlideFromEdge
        );
    }

    #[test]
    fn test_android_ignores_modal_flag() {
        let current = TransitionState::new(1);
        let request = TransitionRequest::new(&current).modal(true);
        assert_eq!(
            select_preset(Platform::Android, &request),
            Preset::FadeInFromEdge
        );
        // Transparent alone is not enough for rule 1
        let request = TransitionRequest::new(&current).transparent(true);
        assert_eq!(
            select_preset(Platform::Android, &request),
            Preset::FadeInFromEdge
        );
    }

    #[test]
    fn test_android_direction() {
        let one = TransitionState::new(1);
        let two = TransitionState::new(2);
        let back = TransitionRequest::new(&one).previous(&two);
        let forward = TransitionRequest::new(&two).previous(&one);
        assert_eq!(select_preset(Platform::Android, &back), Preset::FadeOutToEdge);
        assert_eq!(select_preset(Platform::Android, &forward), Preset::FadeInFromEdge);
    }

    #[test]
    fn test_ios_direction_is_irrelevant() {
        let one = TransitionState::new(1);
        let two = TransitionState::new(2);
        let back = TransitionRequest::new(&one).previous(&two);
        assert_eq!(select_preset(Platform::Ios, &back), Preset::SlideFromSide);
    }

    #[test]
    fn test_resolve_without_configurer_is_default() {
        let catalog = TransitionCatalog::new(Capabilities::empty());
        let selector = TransitionSelector::new(&catalog, Platform::Ios);
        let current = TransitionState::new(0);
        let request = TransitionRequest::new(&current);
        assert_eq!(
            &selector.resolve_config(None, &request),
            selector.select_default_config(&request)
        );
    }

    #[test]
    fn test_configurer_sees_inputs() {
        let catalog = TransitionCatalog::default();
        let selector = TransitionSelector::new(&catalog, Platform::Android);
        let current = TransitionState::with_route(1, "detail".to_string());
        let previous = TransitionState::with_route(2, "settings".to_string());
        let request = TransitionRequest::new(&current).previous(&previous).modal(true);

        let check_inputs = |current: &TransitionState<String>,
                            previous: Option<&TransitionState<String>>,
                            is_modal: bool| {
            assert_eq!(current.route, "detail");
            assert_eq!(previous.map(|p| p.route.as_str()), Some("settings"));
            assert!(is_modal);
            TransitionConfigOverlay::new().container_style(ContainerStyle::background(Color::BLACK))
        };
        let configurer: &dyn TransitionConfigurer<String> = &check_inputs;

        let resolved = selector.resolve_config(Some(configurer), &request);
        let base = catalog.fade_out_to_edge();
        assert_eq!(resolved.transition_spec, base.transition_spec);
        assert_eq!(resolved.screen_interpolator, base.screen_interpolator);
        assert_eq!(
            resolved.container_style,
            Some(ContainerStyle::background(Color::BLACK))
        );
    }
}
