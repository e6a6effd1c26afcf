// src/cli/handlers.rs
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::args::Cli;
use crate::config::RunConfig;
use crate::error::RankError;
use crate::exit::LinkRankExit;
use crate::graph::{EdgeListParser, GraphStore, LoadOutcome, LoadPolicy};
use crate::progress::{self, NullProgress};
use crate::rank::{Estimator, RankReporter, RankedNode, ScoreVector};
use crate::reporting::{self, OutputFormat, RunSummary};

/// Handles a full ranking run: load, estimate, report.
///
/// # Errors
/// Returns error if configuration, input, or estimation fails.
pub fn handle_rank(cli: &Cli) -> Result<LinkRankExit> {
    let config = cli
        .resolve()
        .context("loading configuration")?
        .with_resolved_seed();
    debug!(?config, "resolved run configuration");

    let outcome = load_graph(cli.input_path(), config.policy)?;
    for &line in &outcome.skipped_lines {
        warn!(line, "skipped malformed edge");
    }
    let graph = outcome.graph;
    let stats = graph.stats();
    info!(nodes = stats.nodes, edges = stats.edges, sinks = stats.sinks, "graph loaded");
    reporting::print_stats(&stats, cli.format)?;

    let estimator = config.method.estimator(&config);
    info!(method = %config.method, seed = ?config.seed, "estimating");

    let start = Instant::now();
    let show_bar = config.progress_bar
        && cli.format == OutputFormat::Text
        && io::stderr().is_terminal();
    let scores = estimate(estimator.as_ref(), &graph, show_bar)?;
    let elapsed = start.elapsed();
    info!(elapsed_secs = elapsed.as_secs_f64(), "estimation finished");

    let ranking = top_results(&graph, &scores, &config)?;
    let summary =
        RunSummary::new(config.method, stats, elapsed, &ranking).with_seed(config.seed);
    reporting::print_summary(&summary, cli.format)?;

    Ok(LinkRankExit::Success)
}

/// Reads the edge list from `path`, or from stdin when there is none.
///
/// # Errors
/// Returns error if the input cannot be opened or read, or violates `policy`.
pub fn load_graph(path: Option<&Path>, policy: LoadPolicy) -> Result<LoadOutcome> {
    let parser = EdgeListParser::new(policy);
    let outcome = match path {
        Some(p) => {
            let file = File::open(p).map_err(|source| RankError::Io {
                source,
                path: p.to_path_buf(),
            })?;
            parser
                .read(BufReader::new(file))
                .with_context(|| format!("reading {}", p.display()))?
        }
        None => parser.read(io::stdin().lock()).context("reading stdin")?,
    };
    Ok(outcome)
}

fn estimate(estimator: &dyn Estimator, graph: &GraphStore, show_bar: bool) -> Result<ScoreVector> {
    if !show_bar {
        return Ok(estimator.estimate(graph, &NullProgress)?);
    }

    let title = format!("Running {} PageRank", estimator.method());
    let (client, mut controller) = progress::start(title, estimator.work_units());
    let result = estimator.estimate(graph, &client);
    controller.stop();
    Ok(result?)
}

/// Top-K with the shortfall treated as recoverable: too few nodes yields
/// every node instead of an error.
fn top_results(
    graph: &GraphStore,
    scores: &ScoreVector,
    config: &RunConfig,
) -> Result<Vec<RankedNode>> {
    let reporter = RankReporter::new(graph, scores);
    match reporter.top(config.top) {
        Ok(ranking) => Ok(ranking),
        Err(RankError::InsufficientResults { requested, available }) => {
            warn!(requested, available, "fewer nodes than requested results; showing all");
            Ok(reporter.top_truncated(requested)?)
        }
        Err(e) => Err(e.into()),
    }
}
