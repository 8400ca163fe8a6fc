//! Timing functions (easing curves) for screen transitions.
//!
//! Timing functions control the rate of change during a transition, mapping
//! linear progress in `[0, 1]` to eased progress.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//! - [`TimingFunction::Poly`] - `t^n`, the building block for stronger curves
//!
//! ## Combinators
//!
//! - [`TimingFunction::In`] - Runs the inner curve forwards
//! - [`TimingFunction::Out`] - Mirrors the inner curve (an accelerating curve
//!   becomes a decelerating one)
//! - [`TimingFunction::InOut`] - Runs the inner curve forwards, then mirrored
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Example
//!
//! ```
//! use stack_transitions::animation::TimingFunction;
//!
//! // Quintic deceleration
//! let decelerate = TimingFunction::out(TimingFunction::Poly(5.0));
//! assert!(decelerate.evaluate(0.5) > 0.9);
//! ```

use std::sync::Arc;

/// Timing function that controls the transition curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Power curve `t^n`
    Poly(f32),
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Inner curve run forwards
    In(Box<TimingFunction>),
    /// Inner curve mirrored in time and value
    Out(Box<TimingFunction>),
    /// Inner curve for the first half, mirrored for the second half
    InOut(Box<TimingFunction>),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    /// Returns the interpolation factor (can exceed [0, 1] for overshooting curves)
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::Poly(n) => t.powf(*n),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::In(inner) => inner.evaluate(t),
            TimingFunction::Out(inner) => 1.0 - inner.evaluate(1.0 - t),
            TimingFunction::InOut(inner) => {
                if t < 0.5 {
                    inner.evaluate(t * 2.0) / 2.0
                } else {
                    1.0 - inner.evaluate((1.0 - t) * 2.0) / 2.0
                }
            }
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Run `inner` forwards
    pub fn ease_in_with(inner: TimingFunction) -> Self {
        TimingFunction::In(Box::new(inner))
    }

    /// Mirror `inner`, turning acceleration into deceleration
    pub fn out(inner: TimingFunction) -> Self {
        TimingFunction::Out(Box::new(inner))
    }

    /// Make `inner` symmetrical around the midpoint
    pub fn in_out(inner: TimingFunction) -> Self {
        TimingFunction::InOut(Box::new(inner))
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl PartialEq for TimingFunction {
    /// Structural equality; custom curves compare by identity
    fn eq(&self, other: &Self) -> bool {
        use TimingFunction::*;
        match (self, other) {
            (Linear, Linear) | (EaseIn, EaseIn) | (EaseOut, EaseOut) | (EaseInOut, EaseInOut) => {
                true
            }
            (Poly(a), Poly(b)) => a == b,
            (CubicBezier(a1, b1, c1, d1), CubicBezier(a2, b2, c2, d2)) => {
                a1 == a2 && b1 == b2 && c1 == c2 && d1 == d2
            }
            (In(a), In(b)) | (Out(a), Out(b)) | (InOut(a), InOut(b)) => a == b,
            (Custom(a), Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::Poly(n) => write!(f, "Poly({})", n),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::In(inner) => write!(f, "In({:?})", inner),
            TimingFunction::Out(inner) => write!(f, "Out({:?})", inner),
            TimingFunction::InOut(inner) => write!(f, "InOut({:?})", inner),
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic bezier curve evaluation
/// Simplified implementation assuming x1, x2 are in [0, 1]
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Use Newton-Raphson to solve for t given x
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t -= (current_x - t) / current_slope;
    }
    cubic_bezier_y(current_t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}
