//! `PageRank` estimation for directed link graphs.
//!
//! [`graph`] turns an edge list into a [`GraphStore`](graph::GraphStore);
//! [`rank`] scores it with a random-walk or a power-iteration
//! [`Estimator`](rank::Estimator) and orders the result. The library never
//! prints or logs; [`cli`] and [`reporting`] do that for the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod progress;
pub mod rank;
pub mod reporting;
