// src/rank/report.rs
//! Orders a score vector and restores node labels.

use std::cmp::Ordering;

use serde::Serialize;

use super::ScoreVector;
use crate::error::{RankError, Result};
use crate::graph::{GraphStore, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub id: NodeId,
    pub label: String,
    pub score: f64,
}

pub struct RankReporter<'a> {
    graph: &'a GraphStore,
    scores: &'a ScoreVector,
}

impl<'a> RankReporter<'a> {
    #[must_use]
    pub fn new(graph: &'a GraphStore, scores: &'a ScoreVector) -> Self {
        Self { graph, scores }
    }

    /// Nodes that have both a label and a score.
    #[must_use]
    pub fn available(&self) -> usize {
        self.graph.node_count().min(self.scores.len())
    }

    /// The `k` best nodes, score descending, ties by ascending id.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyGraph`] if the graph has no nodes, or
    /// [`RankError::InsufficientResults`] if `k` exceeds the node count.
    /// Exactly `node_count` is allowed.
    pub fn top(&self, k: usize) -> Result<Vec<RankedNode>> {
        self.ensure_nodes()?;
        let available = self.available();
        if k > available {
            return Err(RankError::InsufficientResults {
                requested: k,
                available,
            });
        }
        Ok(self.ranked(k))
    }

    /// Like [`top`](Self::top) but returns at most `min(k, node_count)`.
    ///
    /// # Errors
    /// Returns [`RankError::EmptyGraph`] if the graph has no nodes.
    pub fn top_truncated(&self, k: usize) -> Result<Vec<RankedNode>> {
        self.ensure_nodes()?;
        Ok(self.ranked(k))
    }

    fn ensure_nodes(&self) -> Result<()> {
        if self.graph.is_empty() {
            return Err(RankError::EmptyGraph);
        }
        Ok(())
    }

    fn ranked(&self, k: usize) -> Vec<RankedNode> {
        let mut ranked: Vec<(NodeId, f64)> = self.scores.iter().take(self.available()).collect();
        ranked.sort_by(by_score_then_id);
        ranked
            .into_iter()
            .take(k)
            .filter_map(|(id, score)| {
                self.graph.label_of(id).map(|label| RankedNode {
                    id,
                    label: label.to_string(),
                    score,
                })
            })
            .collect()
    }
}

fn by_score_then_id(a: &(NodeId, f64), b: &(NodeId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_break_by_ascending_id() {
        let g = GraphStore::from_edges([("a", "b"), ("c", "d")]);
        let scores = ScoreVector::new(vec![0.25, 0.25, 0.25, 0.25]);
        let labels: Vec<_> = RankReporter::new(&g, &scores)
            .top_truncated(4)
            .unwrap()
            .into_iter()
            .map(|r| r.label)
            .collect();
        assert_eq!(labels, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_zero_k_is_empty() {
        let g = GraphStore::from_edges([("a", "b")]);
        let scores = ScoreVector::new(vec![0.5, 0.5]);
        assert!(RankReporter::new(&g, &scores).top(0).unwrap().is_empty());
    }
}
