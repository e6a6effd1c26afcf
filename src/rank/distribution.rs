// src/rank/distribution.rs
//! Power iteration of a probability mass vector over the link graph.
//!
//! Every node starts with `1 / n`. Each iteration a node with out-links splits
//! its mass evenly across them (a parallel edge receives one share per copy).
//! A sink forwards nothing: its mass leaves the system. There is no damping
//! and no redistribution, so total mass stays at 1 only while no mass reaches
//! a sink, and otherwise decreases. A single isolated node holds 1.0 before
//! the first iteration and 0.0 after it.
//!
//! Updates are synchronous; the next vector is built only from the previous
//! one, so node visiting order never matters.

use super::{Estimator, Method, ScoreVector};
use crate::error::{RankError, Result};
use crate::graph::GraphStore;
use crate::progress::ProgressSink;

#[derive(Debug, Clone)]
pub struct DistributionEstimator {
    iterations: usize,
}

impl DistributionEstimator {
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Uniform starting mass, `1 / n` per node.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn initial(graph: &GraphStore) -> Vec<f64> {
        let n = graph.node_count();
        vec![1.0 / n as f64; n]
    }

    /// Performs exactly one synchronous iteration.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(graph: &GraphStore, mass: &[f64]) -> Vec<f64> {
        let mut next = vec![0.0; mass.len()];

        for (node, &m) in graph.nodes().zip(mass) {
            let targets = graph.out_neighbors(node);
            if targets.is_empty() {
                continue;
            }
            let share = m / targets.len() as f64;
            for target in targets {
                next[target.index()] += share;
            }
        }

        next
    }
}

impl Estimator for DistributionEstimator {
    fn method(&self) -> Method {
        Method::Distribution
    }

    fn work_units(&self) -> usize {
        self.iterations
    }

    fn estimate(&self, graph: &GraphStore, sink: &dyn ProgressSink) -> Result<ScoreVector> {
        if graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }

        let mut mass = Self::initial(graph);
        for _ in 0..self.iterations {
            mass = Self::step(graph, &mass);
            sink.advance(1);
        }

        sink.finish();
        Ok(ScoreVector::new(mass))
    }
}
