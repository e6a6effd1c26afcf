// src/progress/render.rs
//! Bar rendering logic.

use super::safe_bar::SafeBar;
use super::state::BarSnapshot;
use colored::Colorize;
use crossterm::{
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const INTERVAL: u64 = 80;
const MAX_WIDTH: usize = 80;
const MIN_BAR: usize = 10;

/// Plain-text pieces of one bar line, before coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLine {
    pub title: String,
    pub filled: usize,
    pub empty: usize,
}

impl BarLine {
    #[must_use]
    pub fn plain(&self) -> String {
        format!(
            "{}[{}{}]",
            self.title,
            "#".repeat(self.filled),
            ".".repeat(self.empty)
        )
    }
}

pub fn run_bar_loop(running: &Arc<AtomicBool>, bar: &SafeBar) {
    let mut stderr = io::stderr();

    while running.load(Ordering::Relaxed) && !bar.is_finished() {
        render_frame(&mut stderr, &bar.snapshot());
        thread::sleep(Duration::from_millis(INTERVAL));
    }

    let _ = execute!(stderr, Clear(ClearType::CurrentLine));
    let _ = write!(stderr, "\r");
    let _ = stderr.flush();
}

fn render_frame(stderr: &mut io::Stderr, snap: &BarSnapshot) {
    let (term_width, _) = terminal::size().unwrap_or((80, 24));
    let width = (term_width as usize).saturating_sub(1).min(MAX_WIDTH);
    let line = layout(snap, width);

    let _ = write!(
        stderr,
        "\r{}[{}{}]",
        line.title.dimmed(),
        "#".repeat(line.filled).cyan(),
        ".".repeat(line.empty).dimmed()
    );
    let _ = stderr.flush();
}

/// Lays out `title (pct% mm:ss) [###...]` within `width` columns.
///
/// The title is cut to leave at least `MIN_BAR` columns for the bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn layout(snap: &BarSnapshot, width: usize) -> BarLine {
    let fraction = snap.fraction();
    let secs = snap.elapsed.as_secs();
    let suffix = format!(" ({:.0}% {:02}:{:02}) ", fraction * 100.0, secs / 60, secs % 60);

    let room = width.saturating_sub(suffix.len() + MIN_BAR + 2);
    let title = format!("{}{suffix}", truncate(&snap.title, room));

    let bar_width = width.saturating_sub(title.chars().count() + 2).max(MIN_BAR);
    let filled = ((bar_width as f64 * fraction) as usize).min(bar_width);

    BarLine {
        title,
        filled,
        empty: bar_width - filled,
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    &s[..end]
}
