mod spring;
mod timing;

pub use spring::SpringConfig;
pub use timing::TimingFunction;

/// Configuration for a duration-based transition
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
        }
    }

    /// A transition that completes immediately
    pub fn instant() -> Self {
        Self::new(0.0, TimingFunction::EaseInOut)
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    /// Matches the stock timing animation: 500ms ease-in-out
    fn default() -> Self {
        Self::new(500.0, TimingFunction::EaseInOut)
    }
}

/// Which animation driver runs a [`TransitionSpec`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimingDriver {
    /// Physics simulation, runs until the spring rests
    Spring,
    /// Fixed duration tween along an easing curve
    Timing,
}

/// The timing law of a screen transition
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionSpec {
    Spring(SpringConfig),
    Timing(Transition),
}

impl TransitionSpec {
    /// Duration-based spec with the given easing
    pub fn timing(duration_ms: f32, easing: TimingFunction) -> Self {
        TransitionSpec::Timing(Transition::new(duration_ms, easing))
    }

    pub fn driver(&self) -> TimingDriver {
        match self {
            TransitionSpec::Spring(_) => TimingDriver::Spring,
            TransitionSpec::Timing(_) => TimingDriver::Timing,
        }
    }

    /// Fixed duration in milliseconds, `None` for springs
    pub fn duration_ms(&self) -> Option<f32> {
        match self {
            TransitionSpec::Spring(_) => None,
            TransitionSpec::Timing(transition) => Some(transition.duration_ms),
        }
    }

    pub fn as_spring(&self) -> Option<&SpringConfig> {
        match self {
            TransitionSpec::Spring(config) => Some(config),
            TransitionSpec::Timing(_) => None,
        }
    }

    pub fn as_timing(&self) -> Option<&Transition> {
        match self {
            TransitionSpec::Spring(_) => None,
            TransitionSpec::Timing(transition) => Some(transition),
        }
    }
}

impl From<SpringConfig> for TransitionSpec {
    fn from(config: SpringConfig) -> Self {
        TransitionSpec::Spring(config)
    }
}

impl From<Transition> for TransitionSpec {
    fn from(transition: Transition) -> Self {
        TransitionSpec::Timing(transition)
    }
}
