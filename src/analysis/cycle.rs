//! Cycle detection for a single lane, and joint win prediction.
//!
//! A lane's future is fully determined by its sequence position and disc
//! placement, so replaying it alone eventually revisits a state. From then
//! on its win rounds repeat with a fixed period. Combining the profiles of
//! every lane finds the first round at which all of them are won without
//! simulating each round.

use rustc_hash::FxHashMap;

use crate::core::{DriverConfig, MoveSequence, PuzzleError, PuzzleResult, PuzzleSet};

/// Win pattern of one lane run on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleProfile {
    /// Rounds before the lane enters its cycle.
    pub transient: u64,

    /// Length of the cycle in rounds.
    pub period: u64,

    /// Rounds in `1..=transient + period` after which the set is won, ascending.
    pub wins: Vec<u64>,
}

impl CycleProfile {
    /// Run a fresh set of `disc_count` discs with `sequence` until its state
    /// repeats.
    ///
    /// Fails with `StateLimit` once more than `max_states` distinct states
    /// have been seen.
    pub fn analyze(disc_count: usize, sequence: &MoveSequence, max_states: usize) -> PuzzleResult<Self> {
        let mut set = PuzzleSet::new(0, disc_count);
        let mut sequence = sequence.clone();
        sequence.reset();
        let len = sequence.len() as u64;

        let mut seen: FxHashMap<(u64, Vec<u8>), u64> = FxHashMap::default();
        let mut wins = Vec::new();
        let mut round = 0u64;

        loop {
            let key = (round % len, set.placement());
            if let Some(&first) = seen.get(&key) {
                let profile = Self {
                    transient: first,
                    period: round - first,
                    wins,
                };
                log::debug!(
                    "{} discs, {} moves: transient {}, period {}, {} wins per cycle",
                    disc_count,
                    len,
                    profile.transient,
                    profile.period,
                    profile.wins.len()
                );
                return Ok(profile);
            }
            if seen.len() >= max_states {
                return Err(PuzzleError::StateLimit { limit: max_states });
            }
            seen.insert(key, round);

            set.apply(sequence.next_move());
            round += 1;
            if set.is_won() {
                wins.push(round);
            }
        }
    }

    /// Check whether the lane is won after `round` rounds.
    #[must_use]
    pub fn is_won_at(&self, round: u64) -> bool {
        let folded = if round <= self.transient {
            round
        } else {
            (round - self.transient - 1) % self.period + self.transient + 1
        };
        self.wins.binary_search(&folded).is_ok()
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// First round after which every profile is won, or `None` if that never
/// happens.
///
/// Once every lane is past its transient the joint pattern repeats with the
/// lcm of the periods, so only rounds up to `max transient + lcm` are tried.
#[must_use]
pub fn first_common_win(profiles: &[CycleProfile]) -> Option<u64> {
    let anchor = profiles.iter().max_by_key(|p| p.period)?;

    let lcm = profiles.iter().fold(1u64, |acc, p| {
        let g = gcd(acc, p.period);
        (acc / g).saturating_mul(p.period)
    });
    let horizon = profiles
        .iter()
        .map(|p| p.transient)
        .max()
        .unwrap_or(0)
        .saturating_add(lcm);

    let all_won = |round: u64| profiles.iter().all(|p| p.is_won_at(round));

    let split = anchor.wins.partition_point(|&w| w <= anchor.transient);
    let (transient_wins, cycle_wins) = anchor.wins.split_at(split);

    if let Some(&round) = transient_wins.iter().find(|&&r| all_won(r)) {
        return Some(round);
    }

    let first = *cycle_wins.first()?;
    let mut base = 0u64;
    while first.saturating_add(base) <= horizon {
        for &win in cycle_wins {
            let round = win.saturating_add(base);
            if round > horizon {
                return None;
            }
            if all_won(round) {
                return Some(round);
            }
        }
        base = base.saturating_add(anchor.period);
    }
    None
}

/// Predict the round at which a driver built from `config` converges.
pub fn predict_convergence(config: &DriverConfig, max_states: usize) -> PuzzleResult<Option<u64>> {
    let profiles = config
        .sets
        .iter()
        .map(|set| CycleProfile::analyze(set.disc_count, &set.sequence()?, max_states))
        .collect::<PuzzleResult<Vec<_>>>()?;

    Ok(first_common_win(&profiles))
}
