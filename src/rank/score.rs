// src/rank/score.rs
use serde::Serialize;

use crate::graph::NodeId;

/// Estimated rank per node, indexed by [`NodeId`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    #[must_use]
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Score of `id`, or `None` if it is outside the vector.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.scores.get(id.index()).copied()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (NodeId::new(i), s))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}
