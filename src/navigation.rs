//! Navigation stack snapshots handed to the selector.

/// Snapshot of a navigation stack while it transitions
///
/// Only `index` matters for choosing a transition. `route` carries whatever
/// the navigation layer needs alongside it and is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TransitionState<R = ()> {
    /// Position of the active screen in the stack
    pub index: usize,
    pub route: R,
}

impl TransitionState<()> {
    pub fn new(index: usize) -> Self {
        Self { index, route: () }
    }
}

impl<R> TransitionState<R> {
    pub fn with_route(index: usize, route: R) -> Self {
        Self { index, route }
    }

    /// Returns true if moving from `previous` to `self` pops screens
    pub fn is_back_from(&self, previous: &TransitionState<R>) -> bool {
        previous.index > self.index
    }
}

/// Everything the selector looks at for one transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest<'a, R = ()> {
    pub current: &'a TransitionState<R>,
    /// `None` for the first screen of a stack
    pub previous: Option<&'a TransitionState<R>>,
    pub is_modal: bool,
    pub is_transparent: bool,
}

impl<'a, R> TransitionRequest<'a, R> {
    pub fn new(current: &'a TransitionState<R>) -> Self {
        Self {
            current,
            previous: None,
            is_modal: false,
            is_transparent: false,
        }
    }

    pub fn previous(mut self, previous: &'a TransitionState<R>) -> Self {
        self.previous = Some(previous);
        self
    }

    pub fn modal(mut self, is_modal: bool) -> Self {
        self.is_modal = is_modal;
        self
    }

    pub fn transparent(mut self, is_transparent: bool) -> Self {
        self.is_transparent = is_transparent;
        self
    }

    /// Returns true if a previous state exists and had a higher index
    pub fn is_back(&self) -> bool {
        self.previous
            .is_some_and(|previous| self.current.is_back_from(previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_requires_previous() {
        let current = TransitionState::new(0);
        assert!(!TransitionRequest::new(&current).is_back());
    }

    #[test]
    fn test_back_and_forward() {
        let one = TransitionState::new(1);
        let two = TransitionState::new(2);
        assert!(TransitionRequest::new(&one).previous(&two).is_back());
        assert!(!TransitionRequest::new(&two).previous(&one).is_back());
        // Replacing the top screen keeps the index
        assert!(!TransitionRequest::new(&two).previous(&two).is_back());
    }

    #[test]
    fn test_route_is_carried() {
        let state = TransitionState::with_route(3, "settings");
        let request = TransitionRequest::new(&state).modal(true).transparent(true);
        assert_eq!(request.current.route, "settings");
        assert!(request.is_modal);
        assert!(request.is_transparent);
    }
}
