// src/progress/handle.rs
//! Thread management for the bar.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use super::render;
use super::safe_bar::SafeBar;

/// Handle for controlling the render thread.
pub struct ProgressHandle {
    handle: thread::JoinHandle<()>,
    running: Arc<AtomicBool>,
}

impl ProgressHandle {
    #[must_use]
    pub fn spawn(bar: SafeBar) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let r_clone = running.clone();

        let handle = thread::spawn(move || {
            render::run_bar_loop(&r_clone, &bar);
        });

        Self { handle, running }
    }

    pub fn stop(self) {
        self.running.store(false, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}
