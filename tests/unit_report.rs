// tests/unit_report.rs
//! Tests for top-K ordering and label restoration.

use linkrank_core::error::RankError;
use linkrank_core::graph::{GraphStore, GraphStoreBuilder};
use linkrank_core::rank::{RankReporter, ScoreVector};

fn abc() -> GraphStore {
    let mut b = GraphStoreBuilder::default();
    for label in ["A", "B", "C"] {
        b.add_node(label);
    }
    b.build()
}

fn pairs(graph: &GraphStore, scores: &ScoreVector, k: usize) -> Vec<(String, f64)> {
    RankReporter::new(graph, scores)
        .top(k)
        .unwrap()
        .into_iter()
        .map(|r| (r.label, r.score))
        .collect()
}

#[test]
fn test_top_two_in_descending_order() {
    let g = abc();
    let scores = ScoreVector::new(vec![0.5, 0.3, 0.2]);
    assert_eq!(
        pairs(&g, &scores, 2),
        vec![("A".to_string(), 0.5), ("B".to_string(), 0.3)]
    );
}

#[test]
fn test_order_ignores_insertion_order() {
    let g = abc();
    let scores = ScoreVector::new(vec![0.1, 0.2, 0.7]);
    let labels: Vec<_> = pairs(&g, &scores, 3).into_iter().map(|(l, _)| l).collect();
    assert_eq!(labels, ["C", "B", "A"]);
}

#[test]
fn test_k_equal_to_node_count_is_allowed() {
    let g = abc();
    let scores = ScoreVector::new(vec![0.5, 0.3, 0.2]);
    assert_eq!(pairs(&g, &scores, 3).len(), 3);
}

#[test]
fn test_k_above_node_count_is_insufficient() {
    let g = abc();
    let scores = ScoreVector::new(vec![0.5, 0.3, 0.2]);
    let err = RankReporter::new(&g, &scores).top(4).unwrap_err();
    assert!(matches!(
        err,
        RankError::InsufficientResults {
            requested: 4,
            available: 3
        }
    ));
}

#[test]
fn test_truncated_returns_every_node() {
    let g = abc();
    let scores = ScoreVector::new(vec![0.5, 0.3, 0.2]);
    let ranked = RankReporter::new(&g, &scores).top_truncated(20).unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].label, "A");
}

#[test]
fn test_equal_scores_keep_id_order() {
    let g = GraphStore::from_edges([("x", "y"), ("z", "w")]);
    let scores = ScoreVector::new(vec![0.1, 0.4, 0.1, 0.4]);
    let labels: Vec<_> = RankReporter::new(&g, &scores)
        .top_truncated(4)
        .unwrap()
        .into_iter()
        .map(|r| r.label)
        .collect();
    assert_eq!(labels, ["y", "w", "x", "z"]);
}

#[test]
fn test_empty_graph_is_rejected() {
    let g = GraphStore::default();
    let scores = ScoreVector::new(vec![]);
    let reporter = RankReporter::new(&g, &scores);
    assert!(matches!(reporter.top(0), Err(RankError::EmptyGraph)));
    assert!(matches!(reporter.top(20), Err(RankError::EmptyGraph)));
    assert!(matches!(reporter.top_truncated(20), Err(RankError::EmptyGraph)));
}
