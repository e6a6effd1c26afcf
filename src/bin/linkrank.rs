// src/bin/linkrank.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use linkrank_core::cli::{handlers, Cli};
use linkrank_core::exit::LinkRankExit;

fn main() -> LinkRankExit {
    init_tracing();

    let cli = Cli::parse();
    match handlers::handle_rank(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LinkRankExit::for_error(&e)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
