// src/graph/store.rs
//! The link graph: label interning plus insertion-ordered adjacency lists.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Dense integer handle for a node, assigned in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node and edge totals, as reported after a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub sinks: usize,
}

/// Directed multigraph over string labels.
///
/// Populated once through [`GraphStoreBuilder`] (or the loader) and read-only
/// afterwards. Every id stored in an adjacency list indexes `labels`.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl GraphStore {
    /// Builds a graph from `(source, target)` label pairs.
    ///
    /// Parallel edges are kept, so a repeated pair counts twice.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = GraphStoreBuilder::default();
        for (src, tgt) in edges {
            builder.add_edge(src.as_ref(), tgt.as_ref());
        }
        builder.build()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Total adjacency entries, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Outgoing targets of `id` in insertion order. Empty for sinks and for
    /// ids that do not belong to this graph.
    #[must_use]
    pub fn out_neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.index()).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.out_neighbors(id).len()
    }

    #[must_use]
    pub fn is_sink(&self, id: NodeId) -> bool {
        self.out_neighbors(id).is_empty()
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.adjacency.iter().filter(|targets| targets.is_empty()).count()
    }

    #[must_use]
    pub fn label_of(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    #[must_use]
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Labels indexed by node id.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId::new)
    }

    #[must_use]
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            sinks: self.sink_count(),
        }
    }
}

/// Write side of [`GraphStore`]; consumed by [`GraphStoreBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    graph: GraphStore,
}

impl GraphStoreBuilder {
    /// Interns both labels (source first) and appends the edge.
    pub fn add_edge(&mut self, src: &str, tgt: &str) {
        let from = self.intern(src);
        let to = self.intern(tgt);
        if let Some(targets) = self.graph.adjacency.get_mut(from.index()) {
            targets.push(to);
            self.graph.edge_count += 1;
        }
    }

    /// Registers an isolated node, or returns the existing id for `label`.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        self.intern(label)
    }

    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.graph.index.get(label) {
            return id;
        }
        let id = NodeId::new(self.graph.labels.len());
        self.graph.labels.push(label.to_string());
        self.graph.index.insert(label.to_string(), id);
        self.graph.adjacency.push(Vec::new());
        id
    }

    #[must_use]
    pub fn build(self) -> GraphStore {
        self.graph
    }
}
