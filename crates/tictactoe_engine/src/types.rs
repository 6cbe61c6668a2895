//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::error::InvalidBoard;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Number of identical marks in a line needed to win.
pub const WIN_LENGTH: usize = 3;

/// Total number of squares on the board.
pub const CELLS: usize = SIZE * SIZE;

// Win detection needs at least two rows.
const _: () = assert!(SIZE >= 2);

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Rule operations never modify a board in
/// place; placing a mark yields a new board. Serializes as the nine
/// squares in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from squares in row-major order.
    ///
    /// No reachability check is made, so this can build positions that
    /// never arise in play.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given coordinate, or `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Square> {
        mv.index().map(|idx| self.squares[idx])
    }

    /// Checks if the square at the coordinate is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Square> {
        self.squares.chunks_exact(SIZE)
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns a copy of this board with `player`'s mark at `mv`.
    ///
    /// Callers validate the coordinate first.
    pub(crate) fn with_mark(&self, mv: Move, player: Player) -> Self {
        let mut next = *self;
        if let Some(idx) = mv.index() {
            next.squares[idx] = Square::Occupied(player);
        }
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", row * SIZE + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col + 1 < SIZE {
                    write!(f, "|")?;
                }
            }
            if row + 1 < SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine squares in row-major order.
///
/// `X` and `O` (any case) are marks; `.`, `_` and the digits `1`-`9` are
/// empty squares. Whitespace and the separators `|`, `/`, `,`, `-`, `+`
/// are ignored, so the output of `Display` parses back to the same board.
impl FromStr for Board {
    type Err = InvalidBoard;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(CELLS);
        for symbol in s.chars() {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '1'..='9' => Square::Empty,
                c if c.is_whitespace() => continue,
                '|' | '/' | ',' | '-' | '+' => continue,
                other => return Err(InvalidBoard::UnknownSymbol { symbol: other }),
            };
            squares.push(square);
        }

        let count = squares.len();
        let squares: [Square; CELLS] = squares
            .try_into()
            .map_err(|_| InvalidBoard::WrongCellCount { count })?;
        Ok(Self { squares })
    }
}
