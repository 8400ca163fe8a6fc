//! Screen interpolators map the animated stack position to per-screen styles.
//!
//! The catalog only references these; whatever paints the screens decides how
//! a [`ScreenStyle`] is applied. The stock interpolators below cover the five
//! presets and nothing more.

use std::fmt;
use std::sync::Arc;

/// Inputs for a single screen while the stack animates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneProps {
    /// Index of the screen being styled
    pub index: usize,
    /// Animated stack position. Equals `index` when this screen is focused,
    /// `index - 1` before it enters, `index + 1` once covered by the next one
    pub position: f32,
    /// Layout width of the stack
    pub width: f32,
    /// Layout height of the stack
    pub height: f32,
}

/// Visual style produced for a screen at one point of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ScreenStyle {
    /// Fully visible, not displaced
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };
}

impl Default for ScreenStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

type InterpolateFn = dyn Fn(&SceneProps) -> ScreenStyle + Send + Sync;

/// Shared handle to a screen interpolation function
///
/// Cloning is cheap and keeps identity: two handles are equal only when they
/// point at the same function.
#[derive(Clone)]
pub struct ScreenInterpolator {
    name: &'static str,
    f: Arc<InterpolateFn>,
}

impl ScreenInterpolator {
    pub fn new<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&SceneProps) -> ScreenStyle + Send + Sync + 'static,
    {
        Self {
            name,
            f: Arc::new(f),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn interpolate(&self, props: &SceneProps) -> ScreenStyle {
        (self.f)(props)
    }
}

impl PartialEq for ScreenInterpolator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for ScreenInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScreenInterpolator({})", self.name)
    }
}

/// Piecewise-linear mapping of `input` through `(input, output)` stops,
/// clamped at both ends. Stops must be sorted by input.
fn interpolate(input: f32, stops: &[(f32, f32)]) -> f32 {
    let Some(&(first_in, first_out)) = stops.first() else {
        return input;
    };
    if input <= first_in {
        return first_out;
    }
    for pair in stops.windows(2) {
        let (in0, out0) = pair[0];
        let (in1, out1) = pair[1];
        if input <= in1 {
            let span = in1 - in0;
            let t = if span.abs() < f32::EPSILON {
                1.0
            } else {
                (input - in0) / span
            };
            return out0 + (out1 - out0) * t;
        }
    }
    stops.last().map_or(input, |&(_, out)| out)
}

/// Slides the entering screen in from the trailing edge, covered screens
/// drift a third of the width the other way
pub fn for_horizontal() -> ScreenInterpolator {
    ScreenInterpolator::new("horizontal", |props| {
        let i = props.index as f32;
        ScreenStyle {
            translate_x: interpolate(
                props.position,
                &[(i - 1.0, props.width), (i, 0.0), (i + 1.0, props.width * -0.3)],
            ),
            ..ScreenStyle::IDENTITY
        }
    })
}

/// Slides the entering screen up from the bottom edge
pub fn for_vertical() -> ScreenInterpolator {
    ScreenInterpolator::new("vertical", |props| {
        let i = props.index as f32;
        ScreenStyle {
            translate_y: interpolate(
                props.position,
                &[(i - 1.0, props.height), (i, 0.0), (i + 1.0, 0.0)],
            ),
            ..ScreenStyle::IDENTITY
        }
    })
}

/// Fades in while rising a short distance from below
pub fn for_fade_from_bottom() -> ScreenInterpolator {
    ScreenInterpolator::new("fade_from_bottom", |props| {
        let i = props.index as f32;
        ScreenStyle {
            opacity: interpolate(
                props.position,
                &[(i - 1.0, 0.0), (i - 0.5, 0.25), (i, 1.0), (i + 0.99, 1.0), (i + 1.0, 0.0)],
            ),
            translate_y: interpolate(
                props.position,
                &[(i - 1.0, props.height * 0.08), (i, 0.0), (i + 1.0, 0.0)],
            ),
            ..ScreenStyle::IDENTITY
        }
    })
}

/// Fades out while sinking a short distance; the reverse of
/// [`for_fade_from_bottom`]
pub fn for_fade_to_bottom() -> ScreenInterpolator {
    ScreenInterpolator::new("fade_to_bottom", |props| {
        let i = props.index as f32;
        ScreenStyle {
            opacity: interpolate(
                props.position,
                &[(i - 1.0, 0.0), (i - 0.01, 1.0), (i, 1.0), (i + 0.99, 1.0), (i + 1.0, 0.0)],
            ),
            translate_y: interpolate(
                props.position,
                &[(i - 1.0, props.height * 0.08), (i - 0.01, 0.0), (i + 1.0, 0.0)],
            ),
            ..ScreenStyle::IDENTITY
        }
    })
}

/// Shows only the focused screen, without motion
pub fn for_no_animation() -> ScreenInterpolator {
    ScreenInterpolator::new("no_animation", |props| {
        let i = props.index as f32;
        ScreenStyle {
            opacity: interpolate(
                props.position,
                &[(i - 1.0, 0.0), (i - 0.99, 1.0), (i + 0.99, 1.0), (i + 1.0, 0.0)],
            ),
            ..ScreenStyle::IDENTITY
        }
    })
}
