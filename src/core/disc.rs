//! Disc identification.
//!
//! Discs are numbered by size: `Disc(1)` is the smallest and always sits
//! on top of whatever rod holds it. Every rod also carries a
//! [`Disc::FLOOR`] at its base, which compares larger than every real disc
//! so that "is this rod empty" and "which top disc is smaller" are the same
//! comparison.
//!
//! ```
//! use ring_hanoi::core::Disc;
//!
//! assert!(Disc::SMALLEST < Disc::new(5));
//! assert!(Disc::new(5) < Disc::FLOOR);
//! assert!(Disc::FLOOR.is_floor());
//! ```

use serde::{Deserialize, Serialize};

/// A disc, identified by its size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disc(pub u16);

impl Disc {
    /// The smallest disc, the only one moved by rotation moves.
    pub const SMALLEST: Disc = Disc(1);

    /// Sentinel resting at the base of every rod.
    pub const FLOOR: Disc = Disc(u16::MAX);

    /// Largest disc count a set can hold below the floor sentinel.
    pub const MAX_COUNT: usize = u16::MAX as usize - 1;

    /// Create a disc of the given size.
    #[must_use]
    pub const fn new(size: u16) -> Self {
        Self(size)
    }

    /// Get the raw size.
    #[must_use]
    pub const fn size(self) -> u16 {
        self.0
    }

    /// Check whether this is the floor sentinel.
    #[must_use]
    pub const fn is_floor(self) -> bool {
        self.0 == u16::MAX
    }

    /// Iterate over discs `1..=count`, smallest first.
    pub fn all(count: usize) -> impl DoubleEndedIterator<Item = Disc> {
        assert!(
            count <= Self::MAX_COUNT,
            "At most {} discs supported",
            Self::MAX_COUNT
        );
        (1..=count as u16).map(Disc)
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_floor() {
            write!(f, "floor")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_is_largest() {
        assert!(Disc::new(u16::MAX - 1) < Disc::FLOOR);
        assert!(!Disc::SMALLEST.is_floor());
    }

    #[test]
    fn test_all_discs() {
        let discs: Vec<_> = Disc::all(3).collect();
        assert_eq!(discs, vec![Disc(1), Disc(2), Disc(3)]);
        assert_eq!(Disc::all(0).count(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Disc::new(7)), "7");
        assert_eq!(format!("{}", Disc::FLOOR), "floor");
    }

    #[test]
    #[should_panic(expected = "discs supported")]
    fn test_too_many_discs() {
        let _ = Disc::all(u16::MAX as usize);
    }
}
