// src/rank/method.rs
//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::distribution::DistributionEstimator;
use super::stochastic::StochasticEstimator;
use super::Estimator;
use crate::config::RunConfig;
use crate::error::RankError;

/// The available ranking algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Method {
    /// Monte-Carlo random walks.
    #[default]
    Stochastic,
    /// Power iteration over the transition distribution.
    Distribution,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Stochastic, Method::Distribution];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stochastic => "stochastic",
            Self::Distribution => "distribution",
        }
    }

    /// Builds the estimator for this method from the run parameters.
    #[must_use]
    pub fn estimator(self, config: &RunConfig) -> Box<dyn Estimator> {
        match self {
            Self::Stochastic => Box::new(
                StochasticEstimator::new(config.repeats, config.steps)
                    .with_seed(config.seed)
                    .with_batch_size(config.batch_size),
            ),
            Self::Distribution => Box::new(DistributionEstimator::new(config.steps)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = RankError;

    /// Unknown names surface as [`RankError::NotImplemented`] here, at
    /// selection time, never halfway through a run.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| RankError::NotImplemented {
                method: s.trim().to_string(),
            })
    }
}

impl TryFrom<String> for Method {
    type Error = RankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
