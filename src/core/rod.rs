//! Rods and the three-rod ring.
//!
//! ## RodId
//!
//! Position of a rod in the ring. Neighbors are index arithmetic:
//! clockwise of `i` is `(i + 1) % 3`, counterclockwise is `(i + 2) % 3`.
//!
//! ## Ring
//!
//! Fixed storage of one value per rod, indexed by `RodId`.
//!
//! ## Rod
//!
//! A stack of discs with [`Disc::FLOOR`] permanently at its base.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::ops::{Index, IndexMut};

use super::disc::Disc;

/// Number of rods in the ring.
pub const ROD_COUNT: usize = 3;

/// Direction of travel around the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Towards `(i + 1) % 3`.
    Clockwise,
    /// Towards `(i + 2) % 3`.
    Counterclockwise,
}

/// Position of a rod in the ring (0, 1 or 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RodId(u8);

impl RodId {
    /// The rod every set starts on.
    pub const INITIAL: RodId = RodId(0);

    /// Create a rod ID. Panics if `index` is not 0, 1 or 2.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < ROD_COUNT, "Rod index must be 0-2");
        Self(index)
    }

    /// Get the raw rod index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Clockwise neighbor.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self((self.0 + 1) % ROD_COUNT as u8)
    }

    /// Counterclockwise neighbor.
    #[must_use]
    pub const fn counterclockwise(self) -> Self {
        Self((self.0 + 2) % ROD_COUNT as u8)
    }

    /// Neighbor in the given direction.
    #[must_use]
    pub const fn neighbor(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Clockwise => self.clockwise(),
            Rotation::Counterclockwise => self.counterclockwise(),
        }
    }

    /// Iterate over all rods in clockwise order starting from `INITIAL`.
    pub fn all() -> impl Iterator<Item = RodId> {
        (0..ROD_COUNT as u8).map(RodId)
    }
}

impl std::fmt::Display for RodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rod {}", self.0)
    }
}

/// One value per rod, indexed by `RodId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring<T> {
    data: [T; ROD_COUNT],
}

impl<T> Ring<T> {
    /// Create a ring with values from a factory function.
    pub fn new(factory: impl Fn(RodId) -> T) -> Self {
        Self {
            data: [factory(RodId(0)), factory(RodId(1)), factory(RodId(2))],
        }
    }

    /// Iterate over (RodId, &T) pairs in clockwise order.
    pub fn iter(&self) -> impl Iterator<Item = (RodId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (RodId(i as u8), v))
    }

    /// Mutable references to two distinct rods.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: RodId, b: RodId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "Cannot borrow the same rod twice");
        let (lo, hi) = if a.0 < b.0 { (a, b) } else { (b, a) };
        let (left, right) = self.data.split_at_mut(hi.index());
        let (lo_ref, hi_ref) = (&mut left[lo.index()], &mut right[0]);
        if a.0 < b.0 {
            (lo_ref, hi_ref)
        } else {
            (hi_ref, lo_ref)
        }
    }
}

impl<T> Index<RodId> for Ring<T> {
    type Output = T;

    fn index(&self, rod: RodId) -> &Self::Output {
        &self.data[rod.index()]
    }
}

impl<T> IndexMut<RodId> for Ring<T> {
    fn index_mut(&mut self, rod: RodId) -> &mut Self::Output {
        &mut self.data[rod.index()]
    }
}

/// A stack of discs, bottom first, with the floor sentinel at index 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rod {
    stack: SmallVec<[Disc; 12]>,
}

impl Default for Rod {
    fn default() -> Self {
        Self::new()
    }
}

impl Rod {
    /// Create an empty rod (floor only).
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: smallvec![Disc::FLOOR],
        }
    }

    /// Create a rod holding discs `1..=count`, largest at the bottom.
    #[must_use]
    pub fn stacked(count: usize) -> Self {
        let mut rod = Self::new();
        for disc in Disc::all(count).rev() {
            rod.stack.push(disc);
        }
        rod
    }

    /// Top disc, or `Disc::FLOOR` when empty.
    #[must_use]
    pub fn top(&self) -> Disc {
        self.stack.last().copied().unwrap_or(Disc::FLOOR)
    }

    /// Check if only the floor remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top().is_floor()
    }

    /// Number of real discs on the rod.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Real discs, bottom first.
    #[must_use]
    pub fn discs(&self) -> &[Disc] {
        self.stack.get(1..).unwrap_or(&[])
    }

    /// Check that the floor is present and discs strictly shrink towards the top.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.stack.first() == Some(&Disc::FLOOR) && self.stack.windows(2).all(|w| w[0] > w[1])
    }

    /// Move the top disc of `self` onto `dest`, returning it.
    ///
    /// Panics if `self` is empty: the floor never moves.
    pub fn move_top_to(&mut self, dest: &mut Rod) -> Disc {
        assert!(!self.is_empty(), "Cannot move the floor");
        let disc = self.stack.pop().unwrap_or(Disc::FLOOR);
        dest.stack.push(disc);
        disc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let r0 = RodId::INITIAL;
        assert_eq!(r0.clockwise(), RodId::new(1));
        assert_eq!(r0.counterclockwise(), RodId::new(2));
        assert_eq!(RodId::new(2).clockwise(), r0);
        assert_eq!(RodId::new(1).counterclockwise(), r0);

        for rod in RodId::all() {
            assert_eq!(rod.clockwise().counterclockwise(), rod);
            assert_eq!(rod.neighbor(Rotation::Clockwise), rod.clockwise());
        }
    }

    #[test]
    #[should_panic(expected = "Rod index must be 0-2")]
    fn test_rod_id_out_of_range() {
        let _ = RodId::new(3);
    }

    #[test]
    fn test_ring_index() {
        let mut ring: Ring<usize> = Ring::new(|r| r.index() * 10);
        assert_eq!(ring[RodId::new(2)], 20);

        ring[RodId::new(1)] = 5;
        let values: Vec<_> = ring.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 5, 20]);
    }

    #[test]
    fn test_ring_pair_mut() {
        let mut ring: Ring<usize> = Ring::new(|r| r.index());
        let (a, b) = ring.pair_mut(RodId::new(2), RodId::new(0));
        assert_eq!((*a, *b), (2, 0));
        *a = 7;
        assert_eq!(ring[RodId::new(2)], 7);
    }

    #[test]
    fn test_stacked_rod() {
        let rod = Rod::stacked(4);
        assert_eq!(rod.len(), 4);
        assert_eq!(rod.top(), Disc::SMALLEST);
        assert_eq!(rod.discs(), &[Disc(4), Disc(3), Disc(2), Disc(1)]);
        assert!(rod.is_well_formed());
    }

    #[test]
    fn test_empty_rod() {
        let rod = Rod::new();
        assert!(rod.is_empty());
        assert_eq!(rod.len(), 0);
        assert_eq!(rod.top(), Disc::FLOOR);
        assert!(rod.discs().is_empty());
    }

    #[test]
    fn test_move_top() {
        let mut src = Rod::stacked(2);
        let mut dest = Rod::new();

        assert_eq!(src.move_top_to(&mut dest), Disc(1));
        assert_eq!(src.top(), Disc(2));
        assert_eq!(dest.top(), Disc(1));
    }

    #[test]
    #[should_panic(expected = "Cannot move the floor")]
    fn test_move_from_empty() {
        let mut src = Rod::new();
        let mut dest = Rod::new();
        src.move_top_to(&mut dest);
    }

    #[test]
    fn test_serialization() {
        let rod = Rod::stacked(3);
        let json = serde_json::to_string(&rod).unwrap();
        let deserialized: Rod = serde_json::from_str(&json).unwrap();
        assert_eq!(rod, deserialized);
    }
}
