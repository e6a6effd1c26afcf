// src/progress/mod.rs
//! Progress reporting for long-running estimations.
//!
//! Estimators only see the [`ProgressSink`] trait. The terminal bar in this
//! module is one implementation of it; [`NullProgress`] is another.

pub mod client;
pub mod controller;
pub mod render;
pub mod safe_bar;
pub mod state;
mod handle;

pub use client::ProgressClient;
pub use controller::ProgressController;

use handle::ProgressHandle;
use safe_bar::SafeBar;

/// Receives "advanced by `n` units" and "finished" signals.
///
/// Shared by reference across worker threads, hence `Sync`.
pub trait ProgressSink: Sync {
    fn advance(&self, n: usize);
    fn finish(&self);
}

/// Discards every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn advance(&self, _n: usize) {}
    fn finish(&self) {}
}

/// Starts the bar render thread and returns the client (handed to the
/// estimator) and the controller (kept by the caller to join the thread).
#[must_use]
pub fn start(title: impl Into<String>, total: usize) -> (ProgressClient, ProgressController) {
    let safe_bar = SafeBar::new(title, total);
    let handle = ProgressHandle::spawn(safe_bar.clone());

    let client = ProgressClient::new(safe_bar.clone());
    let controller = ProgressController::new(handle, safe_bar);

    (client, controller)
}
