//! Parsing of human move input.

use derive_more::{Display, Error};
use tictactoe_engine::{Move, Position};
use tracing::instrument;

/// Input that names no square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read {:?} as a move: use 1-9, a name like \"center\", or row,col", input)]
pub struct InputError {
    /// The rejected line.
    pub input: String,
}

/// Reads a move as a square number (1-9), a square label, or `row,col`.
#[instrument]
pub fn parse_human_move(line: &str) -> Result<Move, InputError> {
    if let Some(position) = Position::from_label_or_number(line) {
        return Ok(position.to_move());
    }
    line.parse::<Move>().map_err(|_| InputError {
        input: line.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_number() {
        assert_eq!(parse_human_move("5"), Ok(Move::new(1, 1)));
        assert_eq!(parse_human_move("3\n"), Ok(Move::new(0, 2)));
    }

    #[test]
    fn test_label() {
        assert_eq!(parse_human_move("bottom-right"), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(parse_human_move("2,0"), Ok(Move::new(2, 0)));
        assert_eq!(parse_human_move("0 1"), Ok(Move::new(0, 1)));
    }

    #[test]
    fn test_garbage() {
        let err = parse_human_move("banana").unwrap_err();
        assert_eq!(err.input, "banana");
    }
}
