// src/progress/safe_bar.rs
//! Thread-safe wrapper for bar state.

use super::state::{BarSnapshot, BarState};
use std::sync::{Arc, Mutex};

/// Thread-safe wrapper around `BarState`.
#[derive(Clone)]
pub struct SafeBar {
    inner: Arc<Mutex<BarState>>,
}

impl SafeBar {
    #[must_use]
    pub fn new(title: impl Into<String>, total: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(BarState::new(title, total))),
        }
    }

    /// Access the state with a closure for modification.
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut BarState),
    {
        if let Ok(mut guard) = self.inner.lock() {
            f(&mut guard);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> BarSnapshot {
        if let Ok(guard) = self.inner.lock() {
            guard.snapshot()
        } else {
            BarSnapshot::default()
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.lock().map_or(true, |guard| guard.is_finished())
    }
}
