// src/progress/client.rs
//! Client side of the terminal bar; this is what estimators receive.

use super::safe_bar::SafeBar;
use super::ProgressSink;

#[derive(Clone)]
pub struct ProgressClient {
    state: SafeBar,
}

impl ProgressClient {
    #[must_use]
    pub fn new(state: SafeBar) -> Self {
        Self { state }
    }
}

impl ProgressSink for ProgressClient {
    fn advance(&self, n: usize) {
        self.state.modify(|s| s.advance(n));
    }

    fn finish(&self) {
        self.state.modify(super::state::BarState::set_finished);
    }
}
