//! Screen transition presets for navigation stacks.
//!
//! Given the state a stack moves from and to, [`selector`] picks one of the
//! five [`catalog`] presets for the host platform, then lets the caller refine
//! it with a partial [`TransitionConfigOverlay`].
//!
//! ```
//! use stack_transitions::prelude::*;
//!
//! let catalog = TransitionCatalog::new(Capabilities::IMPROVED_SPRING);
//! let selector = TransitionSelector::new(&catalog, Platform::Android);
//!
//! let detail = TransitionState::new(1);
//! let settings = TransitionState::new(2);
//! let request = TransitionRequest::new(&detail).previous(&settings);
//!
//! assert_eq!(selector.select(&request), Preset::FadeOutToEdge);
//! ```

// Lets `#[derive(Overlay)]` refer to this crate by name from inside it
extern crate self as stack_transitions;

pub mod animation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interpolator;
pub mod navigation;
pub mod platform;
pub mod selector;
pub mod style;

pub use config::Overlay;
pub use stack_transitions_macros::Overlay;

pub use catalog::{Preset, TransitionCatalog};
pub use config::{HostConfig, TransitionConfig, TransitionConfigOverlay};
pub use error::ConfigError;
pub use selector::{
    resolve_config, select_default_config, TransitionConfigurer, TransitionSelector,
};

pub mod prelude {
    pub use crate::animation::{
        SpringConfig, TimingDriver, TimingFunction, Transition, TransitionSpec,
    };
    pub use crate::catalog::{Preset, TransitionCatalog};
    pub use crate::config::{HostConfig, TransitionConfig, TransitionConfigOverlay};
    pub use crate::interpolator::{SceneProps, ScreenInterpolator, ScreenStyle};
    pub use crate::navigation::{TransitionRequest, TransitionState};
    pub use crate::platform::{Capabilities, Platform};
    pub use crate::selector::{
        resolve_config, select_default_config, select_preset, TransitionConfigurer,
        TransitionSelector,
    };
    pub use crate::style::{Color, ContainerStyle};
    pub use crate::Overlay;
}
