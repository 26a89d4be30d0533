//! Puzzle engine tests.
//!
//! These tests drive single sets through hand-checked move strings and
//! verify placement, the disc-1 tracker and the win condition.

use ring_hanoi::core::{Disc, Move, PuzzleError, PuzzleSet, RodId, Rotation};

fn play(set: &mut PuzzleSet, moves: &str) {
    for symbol in moves.chars() {
        set.apply_symbol(symbol).unwrap();
    }
}

/// A fresh set holds every disc on the initial rod, largest at the bottom.
#[test]
fn test_fresh_set_layout() {
    for n in 1..=12 {
        let set = PuzzleSet::new(0, n);
        let expected: Vec<Disc> = Disc::all(n).rev().collect();

        assert_eq!(set.rod(RodId::INITIAL).discs(), expected.as_slice());
        assert!(!set.is_won(), "{n} discs should not start won");
    }
}

/// A set with no discs is trivially won.
#[test]
fn test_empty_set_is_won() {
    let set = PuzzleSet::new(0, 0);
    assert!(set.is_won());
    assert!(set.check_invariants().is_ok());
}

/// One disc: won on the clockwise neighbor only.
#[test]
fn test_single_disc_positions() {
    let mut set = PuzzleSet::new(0, 1);

    play(&mut set, "0");
    assert!(set.is_won());

    play(&mut set, "0");
    assert!(!set.is_won());
    assert_eq!(set.rod_with_1(), RodId::new(2));

    let mut ccw = PuzzleSet::new(0, 1);
    play(&mut ccw, "11");
    assert!(ccw.is_won());
}

/// The classic two-disc solution onto the clockwise rod.
#[test]
fn test_two_disc_solution() {
    let mut set = PuzzleSet::new(0, 2);

    // Disc 1 out of the way, disc 2 across, disc 1 back on top.
    play(&mut set, "121");
    assert!(set.is_won());
    assert_eq!(set.rod(PuzzleSet::winning_rod()).discs(), &[Disc(2), Disc(1)]);
}

/// Three discs solved by alternating disc-1 rotations with the other move.
#[test]
fn test_three_disc_solution() {
    let mut set = PuzzleSet::new(0, 3);

    // Odd disc count: disc 1 travels clockwise.
    play(&mut set, "0202020");
    assert!(set.is_won());
    assert!(set.check_invariants().is_ok());
}

/// The other move toggles a disc back and forth between the same two rods.
#[test]
fn test_other_move_is_involution() {
    let mut set = PuzzleSet::new(0, 4);
    play(&mut set, "02");
    let before = set.clone();

    set.apply(Move::Other);
    assert_ne!(set, before);
    set.apply(Move::Other);
    assert_eq!(set, before);
}

/// Disc 1 moves on every rotation, whatever is on the destination rod.
#[test]
fn test_smallest_always_moves() {
    let mut set = PuzzleSet::new(0, 5);
    play(&mut set, "02");

    for rotation in [Rotation::Clockwise, Rotation::Counterclockwise, Rotation::Counterclockwise] {
        let from = set.rod_with_1();
        set.move_smallest(rotation);
        assert_eq!(set.rod_with_1(), from.neighbor(rotation));
        assert_eq!(set.rod(set.rod_with_1()).top(), Disc::SMALLEST);
    }
}

/// Invalid symbols leave the set untouched and report their code.
#[test]
fn test_invalid_symbol_reported() {
    let mut set = PuzzleSet::new(3, 3);
    let err = set.apply_symbol('\0').unwrap_err();

    assert_eq!(err, PuzzleError::InvalidMove { symbol: '\0', code: 0 });
    assert_eq!(set, PuzzleSet::new(3, 3));
}
