//! Driver configuration types.
//!
//! The driver is configured by providing:
//! - `SetConfig`: disc count and move string for one set
//! - `DriverConfig`: the ordered sets plus loop limits
//!
//! `DriverConfig::default()` carries the three embedded puzzle sets.

use serde::{Deserialize, Serialize};

use super::disc::Disc;
use super::error::PuzzleResult;
use super::moves::MoveSequence;

/// Disc counts of the default sets.
pub const DEFAULT_DISC_COUNTS: [usize; 3] = [7, 10, 9];

/// Move strings of the default sets.
pub const DEFAULT_MOVES: [&str; 3] = [
    "12021121120020211202121",
    "0211202112002",
    "20202020021212121121202120200202002121120202112021120020021120211211202002112021120211200212112020212120211",
];

/// Configuration for a single set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// Number of discs, all starting on the initial rod.
    pub disc_count: usize,

    /// Move string over `'0'`, `'1'`, `'2'`, replayed cyclically.
    pub moves: String,
}

impl SetConfig {
    /// Create a new set configuration.
    pub fn new(disc_count: usize, moves: impl Into<String>) -> Self {
        assert!(
            disc_count <= Disc::MAX_COUNT,
            "At most {} discs supported",
            Disc::MAX_COUNT
        );

        Self {
            disc_count,
            moves: moves.into(),
        }
    }

    /// Parse the move string.
    pub fn sequence(&self) -> PuzzleResult<MoveSequence> {
        MoveSequence::parse(&self.moves)
    }
}

/// Complete driver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Sets, advanced in this order each round.
    pub sets: Vec<SetConfig>,

    /// Stop after this many rounds even if not converged (`None` = unbounded).
    pub max_rounds: Option<u64>,

    /// Log progress every this many rounds (`None` = never).
    pub progress_interval: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DEFAULT_DISC_COUNTS
            .iter()
            .zip(DEFAULT_MOVES)
            .fold(Self::new(), |config, (&discs, moves)| {
                config.with_set(SetConfig::new(discs, moves))
            })
            .with_progress_interval(100_000_000)
    }
}

impl DriverConfig {
    /// Create an empty, unbounded configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: Vec::new(),
            max_rounds: None,
            progress_interval: None,
        }
    }

    /// Add a set.
    #[must_use]
    pub fn with_set(mut self, set: SetConfig) -> Self {
        self.sets.push(set);
        self
    }

    /// Bound the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, max: u64) -> Self {
        self.max_rounds = Some(max);
        self
    }

    /// Log progress every `interval` rounds.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        assert!(interval > 0, "Progress interval must be positive");
        self.progress_interval = Some(interval);
        self
    }
}
