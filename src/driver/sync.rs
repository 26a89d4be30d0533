//! Lockstep driver for several puzzle sets.
//!
//! Each round every lane takes the next move of its own cyclic sequence.
//! Only after all lanes have moved is the round counted and the joint win
//! condition checked.

use crate::core::{DriverConfig, Layout, MoveSequence, PuzzleResult, PuzzleSet};

/// A puzzle set paired with the sequence that drives it.
#[derive(Clone, Debug)]
pub struct Lane {
    /// The set being driven.
    pub set: PuzzleSet,

    /// Its cyclic move sequence.
    pub sequence: MoveSequence,
}

impl Lane {
    /// Create a new lane.
    #[must_use]
    pub fn new(set: PuzzleSet, sequence: MoveSequence) -> Self {
        Self { set, sequence }
    }

    /// Apply the next move of the sequence to the set.
    pub fn advance(&mut self) {
        let mv = self.sequence.next_move();
        self.set.apply(mv);
    }
}

/// How a call to [`SyncDriver::run`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every set was won after `rounds` rounds.
    Converged {
        /// Total rounds executed.
        rounds: u64,
    },
    /// The round limit was reached first.
    RoundLimit {
        /// Total rounds executed.
        rounds: u64,
    },
}

impl RunOutcome {
    /// Rounds executed, however the run ended.
    #[must_use]
    pub fn rounds(self) -> u64 {
        match self {
            RunOutcome::Converged { rounds } | RunOutcome::RoundLimit { rounds } => rounds,
        }
    }

    /// Rounds to convergence, if the run converged.
    #[must_use]
    pub fn converged(self) -> Option<u64> {
        match self {
            RunOutcome::Converged { rounds } => Some(rounds),
            RunOutcome::RoundLimit { .. } => None,
        }
    }
}

/// Drives several lanes in lockstep until all are won together.
#[derive(Clone, Debug)]
pub struct SyncDriver {
    lanes: Vec<Lane>,
    rounds: u64,
    max_rounds: Option<u64>,
    progress_interval: Option<u64>,
}

impl SyncDriver {
    /// Build a driver from a configuration.
    ///
    /// Every move string is parsed before any round runs, so an invalid
    /// symbol fails here.
    pub fn new(config: &DriverConfig) -> PuzzleResult<Self> {
        let lanes = config
            .sets
            .iter()
            .enumerate()
            .map(|(i, set)| -> PuzzleResult<Lane> {
                Ok(Lane::new(PuzzleSet::new(i, set.disc_count), set.sequence()?))
            })
            .collect::<PuzzleResult<Vec<_>>>()?;

        let mut driver = Self::from_lanes(lanes);
        driver.max_rounds = config.max_rounds;
        driver.progress_interval = config.progress_interval;
        Ok(driver)
    }

    /// Build an unbounded driver from ready-made lanes.
    #[must_use]
    pub fn from_lanes(lanes: Vec<Lane>) -> Self {
        assert!(!lanes.is_empty(), "Must have at least 1 lane");

        log::debug!(
            "driving {} sets with discs {:?}",
            lanes.len(),
            lanes.iter().map(|l| l.set.disc_count()).collect::<Vec<_>>()
        );

        Self {
            lanes,
            rounds: 0,
            max_rounds: None,
            progress_interval: None,
        }
    }

    /// Set the round limit for `run`.
    #[must_use]
    pub fn with_max_rounds(mut self, max: u64) -> Self {
        self.max_rounds = Some(max);
        self
    }

    /// Rounds executed so far.
    #[must_use]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// The lanes, in driving order.
    #[must_use]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Snapshot of every set.
    #[must_use]
    pub fn layouts(&self) -> Vec<Layout> {
        self.lanes.iter().map(|l| l.set.layout()).collect()
    }

    /// Check whether every set is currently won.
    #[must_use]
    pub fn all_won(&self) -> bool {
        self.lanes.iter().all(|l| l.set.is_won())
    }

    /// Advance every lane by one move and count the round.
    ///
    /// Returns true if all sets are won after this round.
    pub fn step(&mut self) -> bool {
        for lane in &mut self.lanes {
            lane.advance();
        }
        self.rounds += 1;
        self.all_won()
    }

    /// Step until every set is won or the round limit is hit.
    ///
    /// Without a round limit this never returns for sequences that can't
    /// align their wins.
    pub fn run(&mut self) -> RunOutcome {
        loop {
            if self.max_rounds.is_some_and(|max| self.rounds >= max) {
                log::info!("round limit reached after {} rounds", self.rounds);
                return RunOutcome::RoundLimit { rounds: self.rounds };
            }

            if self.step() {
                log::info!("all sets won after {} rounds", self.rounds);
                return RunOutcome::Converged { rounds: self.rounds };
            }

            if let Some(interval) = self.progress_interval {
                if self.rounds % interval == 0 {
                    log::info!("{} rounds played", self.rounds);
                }
            }
        }
    }
}
