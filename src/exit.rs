// src/exit.rs
//! Standardized process exit codes for `linkrank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkRankExit {
    /// Ranking completed and was printed.
    Success = 0,
    /// Generic error (I/O, config file, invalid parameters).
    Error = 1,
    /// The edge list was malformed or produced an empty graph.
    InvalidInput = 2,
    /// The requested ranking method does not exist.
    Unsupported = 3,
}

impl LinkRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the code for a failed run by looking for a [`RankError`] in the chain.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.chain().find_map(|e| e.downcast_ref::<RankError>()) {
            Some(RankError::Parse { .. } | RankError::EmptyGraph) => Self::InvalidInput,
            Some(RankError::NotImplemented { .. }) => Self::Unsupported,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
