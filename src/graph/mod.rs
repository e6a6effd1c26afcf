// src/graph/mod.rs
pub mod loader;
pub mod store;

pub use loader::{EdgeListParser, LoadOutcome, LoadPolicy};
pub use store::{GraphStats, GraphStore, GraphStoreBuilder, NodeId};
