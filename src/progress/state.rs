// src/progress/state.rs
//! Bar state management.

use std::time::{Duration, Instant};

pub struct BarState {
    title: String,
    total: usize,
    counter: usize,
    start_time: Instant,
    finished: bool,
}

#[derive(Debug, Clone)]
pub struct BarSnapshot {
    pub title: String,
    pub total: usize,
    pub counter: usize,
    pub elapsed: Duration,
    pub finished: bool,
}

impl Default for BarSnapshot {
    fn default() -> Self {
        Self {
            title: String::new(),
            total: 0,
            counter: 0,
            elapsed: Duration::ZERO,
            finished: false,
        }
    }
}

impl BarSnapshot {
    /// Completed fraction in `[0, 1]`. A zero total counts as complete.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.counter as f64 / self.total as f64).min(1.0)
    }
}

impl BarState {
    pub fn new(title: impl Into<String>, total: usize) -> Self {
        Self {
            title: title.into(),
            total,
            counter: 0,
            start_time: Instant::now(),
            finished: false,
        }
    }

    pub fn advance(&mut self, n: usize) {
        self.counter = self.counter.saturating_add(n);
    }

    pub fn set_finished(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn snapshot(&self) -> BarSnapshot {
        BarSnapshot {
            title: self.title.clone(),
            total: self.total,
            counter: self.counter,
            elapsed: self.start_time.elapsed(),
            finished: self.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_is_clamped() {
        let mut s = BarState::new("walks", 4);
        s.advance(3);
        assert!((s.snapshot().fraction() - 0.75).abs() < 1e-12);
        s.advance(10);
        assert!((s.snapshot().fraction() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_total_is_complete() {
        let s = BarState::new("empty", 0);
        assert!((s.snapshot().fraction() - 1.0).abs() < 1e-12);
    }
}
