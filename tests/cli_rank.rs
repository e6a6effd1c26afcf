// tests/cli_rank.rs - End-to-end runs through the CLI handler
use std::fs;
use std::path::Path;

use clap::Parser;
use linkrank_core::cli::{handlers, Cli};
use linkrank_core::exit::LinkRankExit;
use linkrank_core::graph::LoadPolicy;
use tempfile::TempDir;

fn setup(edges: &str) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join("links.txt"), edges).unwrap();
    fs::write(d.path().join("linkrank.toml"), "[run]\nprogress_bar = false\n").unwrap();
    d
}

fn cli(dir: &Path, extra: &[&str]) -> Cli {
    let data = dir.join("links.txt");
    let config = dir.join("linkrank.toml");
    let mut args = vec![
        "linkrank".to_string(),
        data.to_string_lossy().into_owned(),
        "--config".to_string(),
        config.to_string_lossy().into_owned(),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    Cli::parse_from(args)
}

#[test]
fn test_distribution_run_succeeds() {
    let d = setup("A B\nB C\nC A\n");
    let code = handlers::handle_rank(&cli(d.path(), &["-m", "distribution", "-s", "10"])).unwrap();
    assert_eq!(code, LinkRankExit::Success);
}

#[test]
fn test_stochastic_run_with_more_results_than_nodes() {
    let d = setup("A B\nB C\n");
    let run = cli(d.path(), &["-r", "500", "-s", "5", "-n", "50", "--seed", "4"]);
    assert_eq!(handlers::handle_rank(&run).unwrap(), LinkRankExit::Success);
}

#[test]
fn test_empty_input_maps_to_invalid_input() {
    let d = setup("\n");
    let err = handlers::handle_rank(&cli(d.path(), &["-m", "distribution"])).unwrap_err();
    assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::InvalidInput);
}

#[test]
fn test_malformed_input_strict_vs_lenient() {
    let d = setup("A B\nbroken line here\nB A\n");
    let strict = handlers::handle_rank(&cli(d.path(), &["-m", "distribution"])).unwrap_err();
    assert_eq!(LinkRankExit::for_error(&strict), LinkRankExit::InvalidInput);

    let lenient = cli(d.path(), &["-m", "distribution", "--lenient"]);
    assert_eq!(handlers::handle_rank(&lenient).unwrap(), LinkRankExit::Success);
}

#[test]
fn test_zero_steps_rejected() {
    let d = setup("A B\n");
    let err = handlers::handle_rank(&cli(d.path(), &["-s", "0"])).unwrap_err();
    assert_eq!(LinkRankExit::for_error(&err), LinkRankExit::Error);
}

#[test]
fn test_load_graph_reports_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let res = handlers::load_graph(Some(&d.path().join("absent.txt")), LoadPolicy::Strict);
    assert!(res.is_err());
}
