//! Move symbols and cyclic move sequences.
//!
//! Sequences are written as strings over `'0'`, `'1'` and `'2'`:
//! - `'0'`: move disc 1 clockwise
//! - `'1'`: move disc 1 counterclockwise
//! - `'2'`: move the smaller top disc between the two other rods
//!
//! A [`MoveSequence`] replays its moves forever, wrapping to the start
//! once the last one has been taken.

use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, PuzzleResult};
use super::rod::Rotation;

/// A single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Disc 1 to its clockwise neighbor (`'0'`).
    Clockwise,
    /// Disc 1 to its counterclockwise neighbor (`'1'`).
    Counterclockwise,
    /// Shuffle between the two rods not holding disc 1 (`'2'`).
    Other,
}

impl Move {
    /// Symbol used in move strings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Move::Clockwise => '0',
            Move::Counterclockwise => '1',
            Move::Other => '2',
        }
    }

    /// Rotation of disc 1, if this move rotates it.
    #[must_use]
    pub const fn rotation(self) -> Option<Rotation> {
        match self {
            Move::Clockwise => Some(Rotation::Clockwise),
            Move::Counterclockwise => Some(Rotation::Counterclockwise),
            Move::Other => None,
        }
    }
}

impl TryFrom<char> for Move {
    type Error = PuzzleError;

    fn try_from(symbol: char) -> PuzzleResult<Self> {
        match symbol {
            '0' => Ok(Move::Clockwise),
            '1' => Ok(Move::Counterclockwise),
            '2' => Ok(Move::Other),
            _ => Err(PuzzleError::invalid_move(symbol)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Immutable, non-empty list of moves with a wrapping cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSequence {
    moves: Vec<Move>,
    cursor: usize,
}

impl MoveSequence {
    /// Parse a move string. Fails on the first invalid symbol or if empty.
    pub fn parse(symbols: &str) -> PuzzleResult<Self> {
        let moves = symbols
            .chars()
            .map(Move::try_from)
            .collect::<PuzzleResult<Vec<_>>>()?;
        Self::new(moves)
    }

    /// Create a sequence from moves. Fails if `moves` is empty.
    pub fn new(moves: Vec<Move>) -> PuzzleResult<Self> {
        if moves.is_empty() {
            return Err(PuzzleError::EmptySequence);
        }
        Ok(Self { moves, cursor: 0 })
    }

    /// Number of moves in one pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false: sequences are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the next move to be taken.
    ///
    /// Equals `len()` right after the last move of a pass; the wrap happens
    /// lazily on the following call to `next_move`.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves in one pass.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Take the move at the cursor, wrapping to the start first if exhausted.
    pub fn next_move(&mut self) -> Move {
        if self.cursor == self.moves.len() {
            self.cursor = 0;
        }
        let mv = self.moves[self.cursor];
        self.cursor += 1;
        mv
    }

    /// Rewind the cursor to the start.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl std::fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for mv in &self.moves {
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_symbols() {
        for mv in [Move::Clockwise, Move::Counterclockwise, Move::Other] {
            assert_eq!(Move::try_from(mv.symbol()), Ok(mv));
        }
        assert_eq!(Move::Other.rotation(), None);
        assert_eq!(Move::Clockwise.rotation(), Some(Rotation::Clockwise));
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(
            Move::try_from('3'),
            Err(PuzzleError::InvalidMove { symbol: '3', code: 51 })
        );
    }

    #[test]
    fn test_parse_reports_first_invalid() {
        let err = MoveSequence::parse("01a2b").unwrap_err();
        assert_eq!(err, PuzzleError::InvalidMove { symbol: 'a', code: 97 });
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(MoveSequence::parse(""), Err(PuzzleError::EmptySequence));
    }

    #[test]
    fn test_cursor_wraps() {
        let mut seq = MoveSequence::parse("012").unwrap();

        let taken: Vec<_> = (0..7).map(|_| seq.next_move()).collect();
        assert_eq!(
            taken,
            vec![
                Move::Clockwise,
                Move::Counterclockwise,
                Move::Other,
                Move::Clockwise,
                Move::Counterclockwise,
                Move::Other,
                Move::Clockwise,
            ]
        );
        assert_eq!(seq.cursor(), 1);
    }

    #[test]
    fn test_cursor_wraps_lazily() {
        let mut seq = MoveSequence::parse("02").unwrap();
        seq.next_move();
        seq.next_move();
        assert_eq!(seq.cursor(), 2);

        seq.reset();
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn test_display_round_trip() {
        let text = "12021121120020211202121";
        let seq = MoveSequence::parse(text).unwrap();
        assert_eq!(seq.to_string(), text);
        assert_eq!(seq.len(), 23);
    }
}
