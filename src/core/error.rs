//! Error types for the puzzle engine and driver.

use thiserror::Error;

/// Errors raised while building or running puzzle sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A move symbol outside `'0'`, `'1'`, `'2'`.
    #[error("{symbol}({code}): invalid move symbol")]
    InvalidMove {
        /// The offending character.
        symbol: char,
        /// Its numeric code point.
        code: u32,
    },

    /// A move sequence with no moves in it.
    #[error("move sequence is empty")]
    EmptySequence,

    /// A set whose internal state violates an engine invariant.
    #[error("set {set} is corrupted: {reason}")]
    Corrupted {
        /// Display number of the set.
        set: usize,
        /// Which invariant failed.
        reason: String,
    },

    /// Cycle analysis visited more states than allowed.
    #[error("cycle analysis exceeded {limit} states")]
    StateLimit {
        /// The configured state limit.
        limit: usize,
    },
}

impl PuzzleError {
    /// Build an `InvalidMove` error for `symbol`.
    #[must_use]
    pub fn invalid_move(symbol: char) -> Self {
        Self::InvalidMove {
            symbol,
            code: symbol as u32,
        }
    }
}

/// Result type returned by engine and driver operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;
