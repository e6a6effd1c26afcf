// src/graph/loader.rs
//! Edge-list parsing.
//!
//! Each non-blank line holds exactly two whitespace-separated tokens,
//! `source target`. Blank lines are always skipped. Anything else is handled
//! by the [`LoadPolicy`] chosen for the whole load.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use super::store::{GraphStore, GraphStoreBuilder};
use crate::error::{RankError, Result};

/// What to do with a malformed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Reject the whole load at the first malformed line.
    #[default]
    Strict,
    /// Skip malformed lines and record their line numbers.
    Lenient,
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadOutcome {
    pub graph: GraphStore,
    /// 1-based numbers of malformed lines skipped under [`LoadPolicy::Lenient`].
    pub skipped_lines: Vec<usize>,
}

pub struct EdgeListParser {
    policy: LoadPolicy,
}

impl EdgeListParser {
    #[must_use]
    pub fn new(policy: LoadPolicy) -> Self {
        Self { policy }
    }

    /// Parses an in-memory edge list.
    ///
    /// # Errors
    /// Returns [`RankError::Parse`] on a malformed line under the strict policy.
    pub fn parse_str(&self, text: &str) -> Result<LoadOutcome> {
        self.consume(text.lines().map(|l| Ok(l.to_string())))
    }

    /// Reads an edge list until EOF.
    ///
    /// # Errors
    /// Returns [`RankError::Io`] if reading fails, or [`RankError::Parse`] on a
    /// malformed line under the strict policy.
    pub fn read<R: BufRead>(&self, reader: R) -> Result<LoadOutcome> {
        self.consume(reader.lines().map(|l| l.map_err(RankError::from)))
    }

    fn consume<I>(&self, lines: I) -> Result<LoadOutcome>
    where
        I: Iterator<Item = Result<String>>,
    {
        let mut builder = GraphStoreBuilder::default();
        let mut skipped_lines = Vec::new();

        for (idx, line) in lines.enumerate() {
            let line = line?;
            let number = idx + 1;
            match split_edge(&line) {
                Edge::Blank => {}
                Edge::Pair(src, tgt) => builder.add_edge(src, tgt),
                Edge::Malformed => match self.policy {
                    LoadPolicy::Strict => {
                        return Err(RankError::Parse {
                            line: number,
                            content: line,
                        })
                    }
                    LoadPolicy::Lenient => skipped_lines.push(number),
                },
            }
        }

        Ok(LoadOutcome {
            graph: builder.build(),
            skipped_lines,
        })
    }
}

enum Edge<'a> {
    Blank,
    Pair(&'a str, &'a str),
    Malformed,
}

fn split_edge(line: &str) -> Edge<'_> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (None, _, _) => Edge::Blank,
        (Some(src), Some(tgt), None) => Edge::Pair(src, tgt),
        _ => Edge::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_skipped_in_strict_mode() {
        let out = EdgeListParser::new(LoadPolicy::Strict)
            .parse_str("a b\n\n   \nb a\n")
            .unwrap();
        assert_eq!(out.graph.edge_count(), 2);
        assert!(out.skipped_lines.is_empty());
    }

    #[test]
    fn test_strict_rejects_three_tokens() {
        let err = EdgeListParser::new(LoadPolicy::Strict)
            .parse_str("a b\na b c\n")
            .unwrap_err();
        match err {
            RankError::Parse { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "a b c");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_records_skipped_lines() {
        let out = EdgeListParser::new(LoadPolicy::Lenient)
            .parse_str("lonely\na b\nx y z\nb c\n")
            .unwrap();
        assert_eq!(out.skipped_lines, vec![1, 3]);
        assert_eq!(out.graph.node_count(), 3);
        assert_eq!(out.graph.id_of("x"), None);
    }

    #[test]
    fn test_tabs_and_extra_spaces_accepted() {
        let out = EdgeListParser::new(LoadPolicy::Strict)
            .parse_str("  a\t\tb  \n")
            .unwrap();
        assert_eq!(out.graph.node_count(), 2);
    }
}
