// tests/unit_graph.rs
//! Tests for edge-list loading and the graph store.

use linkrank_core::error::RankError;
use linkrank_core::graph::{EdgeListParser, GraphStore, LoadPolicy};
use std::io::Cursor;

fn load(text: &str) -> GraphStore {
    EdgeListParser::new(LoadPolicy::Strict)
        .parse_str(text)
        .unwrap()
        .graph
}

#[test]
fn test_two_node_cycle() {
    let g = load("A B\nB A\n");
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 2);

    let a = g.id_of("A").unwrap();
    let b = g.id_of("B").unwrap();
    assert_eq!(g.out_neighbors(a), &[b]);
    assert_eq!(g.out_neighbors(b), &[a]);
}

#[test]
fn test_fan_out_leaves_sinks() {
    let g = load("A B\nA C\nA D\n");
    assert_eq!(g.node_count(), 4);

    let a = g.id_of("A").unwrap();
    assert_eq!(g.out_degree(a), 3);
    for label in ["B", "C", "D"] {
        assert!(g.is_sink(g.id_of(label).unwrap()), "{label} should be a sink");
    }
    assert_eq!(g.sink_count(), 3);
}

#[test]
fn test_labels_round_trip_through_ids() {
    let g = load("http://a.example http://b.example\nhttp://b.example http://c.example\n");
    for id in g.nodes() {
        let label = g.label_of(id).unwrap();
        assert_eq!(g.id_of(label), Some(id));
    }
    assert_eq!(g.labels(), &["http://a.example", "http://b.example", "http://c.example"]);
}

#[test]
fn test_read_from_buffered_reader() {
    let reader = Cursor::new("x y\ny z\nz x\n");
    let out = EdgeListParser::new(LoadPolicy::Strict).read(reader).unwrap();
    let stats = out.graph.stats();
    assert_eq!((stats.nodes, stats.edges, stats.sinks), (3, 3, 0));
}

#[test]
fn test_strict_policy_rejects_whole_load() {
    let err = EdgeListParser::new(LoadPolicy::Strict)
        .parse_str("A B\nonly-one-token\nB C\n")
        .unwrap_err();
    assert!(matches!(err, RankError::Parse { line: 2, .. }));
}

#[test]
fn test_lenient_policy_keeps_good_lines() {
    let out = EdgeListParser::new(LoadPolicy::Lenient)
        .parse_str("A B\nonly-one-token\nB C\n")
        .unwrap();
    assert_eq!(out.skipped_lines, vec![2]);
    assert_eq!(out.graph.edge_count(), 2);
    assert_eq!(out.graph.id_of("only-one-token"), None);
}

#[test]
fn test_empty_input_gives_empty_graph() {
    let g = load("\n\n");
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
}
