//! Console output for ranking runs.
//!
//! Graph statistics go to stdout as soon as the graph is loaded. In text mode
//! the ranking itself is written to stderr, one `percent<TAB>label` line per
//! node, so stdout stays limited to the statistics. JSON mode writes one
//! document to stdout at the end instead.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::graph::GraphStats;
use crate::rank::{Method, RankedNode};

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a finished run has to show.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub method: Method,
    pub stats: GraphStats,
    pub seed: Option<u64>,
    pub elapsed_secs: f64,
    pub ranking: &'a [RankedNode],
}

impl<'a> RunSummary<'a> {
    #[must_use]
    pub fn new(
        method: Method,
        stats: GraphStats,
        elapsed: Duration,
        ranking: &'a [RankedNode],
    ) -> Self {
        Self {
            method,
            stats,
            seed: None,
            elapsed_secs: elapsed.as_secs_f64(),
            ranking,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Prints the graph statistics ahead of estimation. JSON mode carries them
/// in the final document instead.
///
/// # Errors
/// Returns error if writing to stdout fails.
pub fn print_stats(stats: &GraphStats, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Text {
        let mut out = io::stdout().lock();
        out.write_all(render_stats(stats).as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

/// Prints the ranking in the requested format.
///
/// # Errors
/// Returns error if writing to the terminal or JSON encoding fails.
pub fn print_summary(summary: &RunSummary<'_>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let mut err = io::stderr().lock();
            err.write_all(render_ranking(summary).as_bytes())?;
            err.flush()?;
        }
        OutputFormat::Json => {
            let doc = serde_json::to_string_pretty(summary)?;
            println!("{doc}");
        }
    }
    Ok(())
}

#[must_use]
pub fn render_stats(stats: &GraphStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Number of nodes: {}", stats.nodes);
    let _ = writeln!(out, "Number of edges: {}", stats.edges);
    if stats.sinks > 0 {
        let _ = writeln!(out, "{}", format!("Dead ends: {}", stats.sinks).dimmed());
    }
    out
}

#[must_use]
pub fn render_ranking(summary: &RunSummary<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("Top {} pages:", summary.ranking.len()).bold()
    );
    for node in summary.ranking {
        let _ = writeln!(out, "{:.2}\t{}", 100.0 * node.score, node.label);
    }
    let _ = writeln!(
        out,
        "{}",
        format!("Calculation took {:.2} seconds.", summary.elapsed_secs).dimmed()
    );
    out
}
