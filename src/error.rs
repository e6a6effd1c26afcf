// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    /// A non-blank input line that is not exactly `source target`.
    #[error("malformed edge on line {line}: {content:?} (expected two whitespace-separated tokens)")]
    Parse { line: usize, content: String },

    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("requested top {requested} results but the graph only has {available} nodes")]
    InsufficientResults { requested: usize, available: usize },

    #[error("ranking method `{method}` is not implemented")]
    NotImplemented { method: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config file error: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
