// src/rank/stochastic.rs
//! Monte-Carlo `PageRank`: visit frequencies of many independent random walks.
//!
//! A walk starts at a uniformly random node and takes `steps` transitions.
//! From a node with out-links it follows one of them uniformly, so parallel
//! edges weigh proportionally more. From a sink it restarts at a uniformly
//! random node. Every position, the start included, counts as one visit, and
//! the scores are the visit counts divided by `repeats * (steps + 1)`.
//!
//! Walks are grouped into batches. Each batch draws from its own `ChaCha8Rng`
//! stream derived from the run seed and counts into a private buffer; buffers
//! are summed once every batch is done. A fixed seed therefore gives the same
//! scores regardless of how many threads rayon uses.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::{Estimator, Method, ScoreVector};
use crate::error::{RankError, Result};
use crate::graph::{GraphStore, NodeId};
use crate::progress::ProgressSink;

pub const DEFAULT_BATCH_SIZE: usize = 10_000;

#[derive(Debug, Clone)]
pub struct StochasticEstimator {
    repeats: usize,
    steps: usize,
    seed: Option<u64>,
    batch_size: usize,
}

impl StochasticEstimator {
    #[must_use]
    pub fn new(repeats: usize, steps: usize) -> Self {
        Self {
            repeats,
            steps,
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Fixes the run seed. `None` draws a fresh one per run.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// `(stream, walks)` for every batch, in order.
    fn batches(&self) -> Vec<(u64, usize)> {
        (0..self.repeats)
            .step_by(self.batch_size)
            .zip(0u64..)
            .map(|(start, stream)| (stream, self.batch_size.min(self.repeats - start)))
            .collect()
    }

    fn run_batch(&self, graph: &GraphStore, seed: u64, stream: u64, walks: usize) -> Vec<u64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(stream);

        let mut hits = vec![0u64; graph.node_count()];
        for _ in 0..walks {
            walk(graph, self.steps, &mut rng, &mut hits);
        }
        hits
    }
}

impl Estimator for StochasticEstimator {
    fn method(&self) -> Method {
        Method::Stochastic
    }

    fn work_units(&self) -> usize {
        self.repeats
    }

    fn estimate(&self, graph: &GraphStore, sink: &dyn ProgressSink) -> Result<ScoreVector> {
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        if self.repeats == 0 || self.batch_size == 0 {
            return Err(RankError::InvalidConfig(
                "random walks need positive `repeats` and `batch_size`".to_string(),
            ));
        }

        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let n = graph.node_count();

        let hits = self
            .batches()
            .into_par_iter()
            .map(|(stream, walks)| {
                let local = self.run_batch(graph, seed, stream, walks);
                sink.advance(walks);
                local
            })
            .reduce(|| vec![0u64; n], merge_hits);

        sink.finish();
        Ok(normalize(&hits))
    }
}

fn walk<R: Rng>(graph: &GraphStore, steps: usize, rng: &mut R, hits: &mut [u64]) {
    let n = hits.len();
    let mut current = rng.random_range(0..n);
    hits[current] += 1;

    for _ in 0..steps {
        current = match graph.out_neighbors(NodeId::new(current)).choose(rng) {
            Some(next) => next.index(),
            None => rng.random_range(0..n),
        };
        hits[current] += 1;
    }
}

fn merge_hits(mut acc: Vec<u64>, local: Vec<u64>) -> Vec<u64> {
    for (a, l) in acc.iter_mut().zip(local) {
        *a += l;
    }
    acc
}

#[allow(clippy::cast_precision_loss)]
fn normalize(hits: &[u64]) -> ScoreVector {
    let total = hits.iter().sum::<u64>() as f64;
    ScoreVector::new(hits.iter().map(|&h| h as f64 / total).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;

    #[test]
    fn test_batches_cover_all_repeats() {
        let est = StochasticEstimator::new(25, 1).with_batch_size(10);
        assert_eq!(est.batches(), vec![(0, 10), (1, 10), (2, 5)]);
    }

    #[test]
    fn test_visit_total_is_repeats_times_steps_plus_one() {
        let g = GraphStore::from_edges([("a", "b"), ("b", "c")]);
        let est = StochasticEstimator::new(7, 4).with_batch_size(3);
        let hits = est
            .batches()
            .into_iter()
            .map(|(s, w)| est.run_batch(&g, 11, s, w))
            .fold(vec![0u64; 3], merge_hits);
        assert_eq!(hits.iter().sum::<u64>(), 7 * 5);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let g = GraphStore::from_edges([("a", "b")]);
        let est = StochasticEstimator::new(10, 1).with_batch_size(0);
        assert!(matches!(
            est.estimate(&g, &NullProgress),
            Err(RankError::InvalidConfig(_))
        ));
    }
}
