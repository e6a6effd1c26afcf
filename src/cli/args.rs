use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::RunConfig;
use crate::error::Result;
use crate::graph::LoadPolicy;
use crate::rank::Method;
use crate::reporting::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "linkrank",
    version,
    about = "Estimates PageRanks from link information"
)]
pub struct Cli {
    /// Text file of links as `source target` pairs, one per line (stdin if omitted)
    #[arg(value_name = "DATAFILE")]
    pub datafile: Option<PathBuf>,
    /// Selected PageRank algorithm: stochastic or distribution
    #[arg(long, short)]
    pub method: Option<Method>,
    /// Number of random walks
    #[arg(long, short)]
    pub repeats: Option<usize>,
    /// Number of steps per walk, or iterations for the distribution method
    #[arg(long, short)]
    pub steps: Option<usize>,
    /// Number of top results to display
    #[arg(long, short)]
    pub number: Option<usize>,
    /// Seed for the random walks; a fixed seed gives reproducible results
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip malformed lines instead of rejecting the input
    #[arg(long)]
    pub lenient: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
    /// Config file to use instead of `./linkrank.toml`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merges the config file (explicit or local) with command-line overrides.
    ///
    /// # Errors
    /// Returns error if the config file is invalid or a count is zero.
    pub fn resolve(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => RunConfig::load_from(path)?,
            None => RunConfig::load()?,
        };
        let config = self.apply_overrides(base);
        config.validate()?;
        Ok(config)
    }

    /// Like [`resolve`](Self::resolve) but with a caller-supplied base.
    #[must_use]
    pub fn apply_overrides(&self, mut config: RunConfig) -> RunConfig {
        if let Some(m) = self.method {
            config.method = m;
        }
        if let Some(r) = self.repeats {
            config.repeats = r;
        }
        if let Some(s) = self.steps {
            config.steps = s;
        }
        if let Some(n) = self.number {
            config.top = n;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.lenient {
            config.policy = LoadPolicy::Lenient;
        }
        if self.no_progress {
            config.progress_bar = false;
        }
        config
    }

    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.datafile.as_deref()
    }
}
