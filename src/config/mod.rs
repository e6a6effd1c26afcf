// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{LinkRankToml, RunConfig};

use crate::error::{RankError, Result};
use crate::rank::Method;
use rand::Rng;
use std::path::Path;

impl RunConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `linkrank.toml` from the current directory, falling back to
    /// defaults when there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or invalid.
    pub fn load() -> Result<Self> {
        io::load_optional(Path::new(CONFIG_FILE))
    }

    /// Loads an explicitly named config file, which must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_file(path)
    }

    /// Rejects counts that would make a run meaningless.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidConfig`] naming the first zero field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("repeats", self.repeats),
            ("steps", self.steps),
            ("top", self.top),
            ("batch_size", self.batch_size),
        ];
        match fields.iter().find(|(_, v)| *v == 0) {
            Some((name, _)) => Err(RankError::InvalidConfig(format!(
                "`{name}` must be a positive integer"
            ))),
            None => Ok(()),
        }
    }

    /// Fixes the walk seed up front so the run can report it. Only the
    /// stochastic method consumes a seed; an explicit one is kept.
    #[must_use]
    pub fn with_resolved_seed(mut self) -> Self {
        if self.method == Method::Stochastic && self.seed.is_none() {
            self.seed = Some(rand::rng().random());
        }
        self
    }
}
