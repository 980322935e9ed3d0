use crate::ui::mvi::Reducer;

/// Owns one state machine and the revision counter derived values are
/// keyed on.
pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            revision: 0,
        }
    }

    /// Run the reducer on the current state.
    ///
    /// The revision advances only when the new state differs from the
    /// old, so values memoized on the revision survive no-op dispatches.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let next = R::reduce(self.state.clone(), intent);
        if next != self.state {
            self.state = next;
            self.revision += 1;
        }
    }

    /// Replace the state wholesale (session restore). Counts as a
    /// change only when the state differs.
    pub fn restore(&mut self, state: R::State) {
        if state != self.state {
            self.state = state;
            self.revision += 1;
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
