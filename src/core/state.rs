//! Puzzle set state and move semantics.
//!
//! A `PuzzleSet` is one instance of the ring puzzle: three rods, all discs
//! starting on [`RodId::INITIAL`]. The rod holding disc 1 is cached so that
//! moves never search for it.
//!
//! ## Winning
//!
//! A set is won when the initial rod and its counterclockwise neighbor are
//! both empty, i.e. every disc sits on the clockwise neighbor of the initial
//! rod. The winning rod is a fixed position in the ring and is never
//! inferred from where the discs happen to be.

use serde::{Deserialize, Serialize};

use super::disc::Disc;
use super::error::{PuzzleError, PuzzleResult};
use super::moves::Move;
use super::rod::{Ring, Rod, RodId, Rotation};

/// Serializable snapshot of a set: real discs per rod, bottom first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    /// Display number of the set.
    pub set: usize,
    /// Discs on each rod in clockwise order from the initial rod.
    pub rods: Vec<Vec<u16>>,
}

/// One puzzle instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleSet {
    number: usize,
    disc_count: usize,
    rods: Ring<Rod>,
    rod_with_1: RodId,
}

impl PuzzleSet {
    /// Create a set with `disc_count` discs stacked on the initial rod.
    #[must_use]
    pub fn new(number: usize, disc_count: usize) -> Self {
        let rods = Ring::new(|rod| {
            if rod == RodId::INITIAL {
                Rod::stacked(disc_count)
            } else {
                Rod::new()
            }
        });

        Self {
            number,
            disc_count,
            rods,
            rod_with_1: RodId::INITIAL,
        }
    }

    /// Display number of the set.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Number of real discs in the set.
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.disc_count
    }

    /// Get a rod.
    #[must_use]
    pub fn rod(&self, id: RodId) -> &Rod {
        &self.rods[id]
    }

    /// Rod currently holding disc 1.
    #[must_use]
    pub fn rod_with_1(&self) -> RodId {
        self.rod_with_1
    }

    /// The rod that must hold every disc for the set to be won.
    #[must_use]
    pub const fn winning_rod() -> RodId {
        RodId::INITIAL.clockwise()
    }

    // === Moves ===

    /// Move disc 1 to its neighbor in `rotation`.
    ///
    /// No-op on a set without discs.
    pub fn move_smallest(&mut self, rotation: Rotation) {
        if self.disc_count == 0 {
            return;
        }
        let from = self.rod_with_1;
        let to = from.neighbor(rotation);
        let (src, dest) = self.rods.pair_mut(from, to);
        src.move_top_to(dest);
        self.rod_with_1 = to;
    }

    /// Move between the two rods not holding disc 1.
    ///
    /// No-op if both are empty; otherwise the smaller top disc moves onto
    /// the other rod.
    pub fn move_other(&mut self) {
        let cw = self.rod_with_1.clockwise();
        let ccw = self.rod_with_1.counterclockwise();
        let cw_top = self.rods[cw].top();
        let ccw_top = self.rods[ccw].top();

        if cw_top.is_floor() && ccw_top.is_floor() {
            return;
        }

        let (from, to) = if cw_top < ccw_top { (cw, ccw) } else { (ccw, cw) };
        let (src, dest) = self.rods.pair_mut(from, to);
        src.move_top_to(dest);
    }

    /// Apply a move.
    pub fn apply(&mut self, mv: Move) {
        match mv.rotation() {
            Some(rotation) => self.move_smallest(rotation),
            None => self.move_other(),
        }
    }

    /// Apply a move given by its symbol.
    pub fn apply_symbol(&mut self, symbol: char) -> PuzzleResult<()> {
        self.apply(Move::try_from(symbol)?);
        Ok(())
    }

    /// Check whether every disc sits on the winning rod.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.rods[RodId::INITIAL].is_empty() && self.rods[RodId::INITIAL.counterclockwise()].is_empty()
    }

    // === Inspection ===

    /// Snapshot of the current disc placement.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout {
            set: self.number,
            rods: self
                .rods
                .iter()
                .map(|(_, rod)| rod.discs().iter().map(|d| d.size()).collect())
                .collect(),
        }
    }

    /// Rod holding each disc, indexed by `disc size - 1`.
    ///
    /// Fully determines the placement, since each rod is sorted.
    #[must_use]
    pub fn placement(&self) -> Vec<u8> {
        let mut placement = vec![0u8; self.disc_count];
        for (id, rod) in self.rods.iter() {
            for disc in rod.discs() {
                placement[disc.size() as usize - 1] = id.index() as u8;
            }
        }
        placement
    }

    /// Verify the floor, ordering, disc-1 tracker and disc conservation.
    pub fn check_invariants(&self) -> PuzzleResult<()> {
        let corrupted = |reason: String| PuzzleError::Corrupted {
            set: self.number,
            reason,
        };

        let mut seen = vec![false; self.disc_count];
        for (id, rod) in self.rods.iter() {
            if !rod.is_well_formed() {
                return Err(corrupted(format!("{id} is out of order or lost its floor")));
            }
            for disc in rod.discs() {
                let slot = (disc.size() as usize)
                    .checked_sub(1)
                    .and_then(|i| seen.get_mut(i))
                    .ok_or_else(|| corrupted(format!("unknown disc {disc} on {id}")))?;
                if std::mem::replace(slot, true) {
                    return Err(corrupted(format!("disc {disc} appears twice")));
                }
            }
        }

        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(corrupted(format!("disc {} is missing", missing + 1)));
        }

        if self.disc_count > 0 && self.rods[self.rod_with_1].top() != Disc::SMALLEST {
            return Err(corrupted(format!(
                "disc 1 is not on top of {}",
                self.rod_with_1
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for PuzzleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Set {}", self.number)?;
        for (id, rod) in self.rods.iter() {
            write!(f, "\t{}: [ ", id.index())?;
            for disc in rod.discs().iter().rev() {
                write!(f, "{disc} ")?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)
    }
}
