// src/rank/mod.rs
//! `PageRank` estimation over a [`GraphStore`].

pub mod distribution;
pub mod method;
pub mod report;
pub mod score;
pub mod stochastic;

pub use distribution::DistributionEstimator;
pub use method::Method;
pub use report::{RankReporter, RankedNode};
pub use score::ScoreVector;
pub use stochastic::StochasticEstimator;

use crate::error::Result;
use crate::graph::GraphStore;
use crate::progress::ProgressSink;

/// A ranking algorithm.
pub trait Estimator: Send + Sync {
    fn method(&self) -> Method;

    /// Progress units a full run reports through `advance`.
    fn work_units(&self) -> usize;

    /// Scores every node of `graph`.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyGraph`](crate::error::RankError::EmptyGraph)
    /// if the graph has no nodes.
    fn estimate(&self, graph: &GraphStore, sink: &dyn ProgressSink) -> Result<ScoreVector>;
}
