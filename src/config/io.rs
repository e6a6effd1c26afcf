// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::{LinkRankToml, RunConfig};
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "linkrank.toml";

/// Reads `path` if it exists; a missing file yields the defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or decoded.
pub fn load_optional(path: &Path) -> Result<RunConfig> {
    if !path.exists() {
        return Ok(RunConfig::default());
    }
    load_file(path)
}

/// # Errors
/// Returns error if the file cannot be read or decoded.
pub fn load_file(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_toml(&content, path)
}

/// # Errors
/// Returns [`RankError::Config`] if `content` is not a valid config document.
pub fn parse_toml(content: &str, origin: &Path) -> Result<RunConfig> {
    toml::from_str::<LinkRankToml>(content)
        .map(|doc| doc.run)
        .map_err(|source| RankError::Config {
            source,
            path: origin.to_path_buf(),
        })
}
