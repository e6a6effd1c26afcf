// src/progress/controller.rs
//! Lifecycle controller for the render thread.

use super::handle::ProgressHandle;
use super::safe_bar::SafeBar;

/// Owns the render thread. Dropping it also stops the thread.
pub struct ProgressController {
    handle: Option<ProgressHandle>,
    state: SafeBar,
}

impl ProgressController {
    #[must_use]
    pub fn new(handle: ProgressHandle, state: SafeBar) -> Self {
        Self {
            handle: Some(handle),
            state,
        }
    }

    /// Marks the bar finished (if the estimator did not) and joins the thread.
    pub fn stop(&mut self) {
        self.state.modify(super::state::BarState::set_finished);

        if let Some(h) = self.handle.take() {
            h.stop();
        }
    }
}

impl Drop for ProgressController {
    fn drop(&mut self) {
        self.stop();
    }
}
