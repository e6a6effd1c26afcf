use serde::{Deserialize, Serialize};

use crate::graph::LoadPolicy;
use crate::rank::Method;

/// Immutable parameters of one ranking run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub method: Method,
    /// Number of random walks (stochastic only).
    #[serde(default = "default_repeats")]
    pub repeats: usize,
    /// Steps per walk, or power iterations for the distribution method.
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// How many ranked nodes to report.
    #[serde(default = "default_top")]
    pub top: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Walks per worker batch; also the progress granularity.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub policy: LoadPolicy,
    #[serde(default = "default_progress_bar")]
    pub progress_bar: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            repeats: default_repeats(),
            steps: default_steps(),
            top: default_top(),
            seed: None,
            batch_size: default_batch_size(),
            policy: LoadPolicy::default(),
            progress_bar: default_progress_bar(),
        }
    }
}

const fn default_repeats() -> usize { 1_000_000 }
const fn default_steps() -> usize { 100 }
const fn default_top() -> usize { 20 }
const fn default_batch_size() -> usize { 10_000 }
const fn default_progress_bar() -> bool { true }

/// On-disk layout of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkRankToml {
    #[serde(default)]
    pub run: RunConfig,
}
