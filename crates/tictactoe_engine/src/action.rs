//! Move coordinates for tic-tac-toe.

use crate::error::ParseMoveError;
use crate::types::SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move: the (row, column) of the square to mark, 0-indexed.
///
/// The player is not part of the move; it is always derived from the
/// board the move is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major square index, or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        self.in_bounds().then_some(self.row * SIZE + self.col)
    }

    /// Creates a move from a row-major square index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then_some(Self::new(index / SIZE, index % SIZE))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`, `"row col"` or `"(row, col)"`.
///
/// Only the syntax is checked here; range checks happen when the move
/// is applied.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse().map_err(|_| ParseMoveError::new(s))?;
                let col = col.parse().map_err(|_| ParseMoveError::new(s))?;
                Ok(Self::new(row, col))
            }
            _ => Err(ParseMoveError::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let mv = Move::from_index(index).unwrap();
            assert_eq!(mv.index(), Some(index));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_out_of_bounds_has_no_index() {
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(3, 0).index(), None);
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!("1,2".parse::<Move>().unwrap(), Move::new(1, 2));
        assert_eq!(" 0 2 ".parse::<Move>().unwrap(), Move::new(0, 2));
        assert_eq!("(2, 1)".parse::<Move>().unwrap(), Move::new(2, 1));
        // Syntax only; bounds are checked on apply.
        assert_eq!("7,7".parse::<Move>().unwrap(), Move::new(7, 7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("center".parse::<Move>().is_err());
        assert!("1".parse::<Move>().is_err());
        assert!("1,2,3".parse::<Move>().is_err());
        assert!("-1,0".parse::<Move>().is_err());
    }
}
