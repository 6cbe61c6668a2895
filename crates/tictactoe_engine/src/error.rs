//! Error types for the rules engine.

use crate::action::Move;
use derive_more::{Display, Error};

/// A move that cannot be applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The square at the coordinate is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Move),

    /// The coordinate lies outside the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Move),
}

impl std::error::Error for InvalidMove {}

/// A grid that win detection or parsing cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidBoard {
    /// Fewer than two rows.
    #[display("Board must have at least 2 rows, got {}", rows)]
    TooFewRows {
        /// Number of rows supplied.
        rows: usize,
    },

    /// A row whose length differs from the first row.
    #[display("Row {} has {} squares, expected {}", row, len, expected)]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of the first row.
        expected: usize,
    },

    /// A character that names no square.
    #[display("Unknown board symbol {:?}", symbol)]
    UnknownSymbol {
        /// The character found.
        symbol: char,
    },

    /// The text did not describe exactly nine squares.
    #[display("Board needs 9 squares, got {}", count)]
    WrongCellCount {
        /// Number of squares found.
        count: usize,
    },
}

/// Text that is not a `row,col` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse {:?} as a move (expected \"row,col\")", input)]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

impl ParseMoveError {
    /// Creates a new parse error for `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_messages() {
        assert_eq!(InvalidMove::GameOver.to_string(), "Game is already over");
        assert!(
            InvalidMove::Occupied(Move::new(1, 1))
                .to_string()
                .contains("occupied")
        );
        assert!(
            InvalidMove::OutOfBounds(Move::new(3, 0))
                .to_string()
                .contains("(3, 0)")
        );
    }

    #[test]
    fn test_invalid_board_messages() {
        let err = InvalidBoard::TooFewRows { rows: 1 };
        assert_eq!(err.to_string(), "Board must have at least 2 rows, got 1");
    }
}
