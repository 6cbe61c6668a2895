//! Win detection logic for tic-tac-toe.
//!
//! Rows are scanned left to right keeping a running streak. Every
//! occupied square met on the way also probes the two downward
//! diagonals, so diagonal lines are found wherever they start. Columns
//! get a final pass of their own.

use crate::error::InvalidBoard;
use crate::types::{Player, Square, WIN_LENGTH};
use tracing::instrument;

/// Finds a player with `WIN_LENGTH` marks in an unbroken line.
///
/// Works on any rectangular grid given as rows. Returns the first line
/// found, rows before columns.
///
/// # Errors
///
/// `InvalidBoard::TooFewRows` for fewer than two rows, and
/// `InvalidBoard::RaggedRow` if the rows differ in length.
#[instrument(level = "trace", skip(grid), fields(rows = grid.len()))]
pub fn find_winner<R: AsRef<[Square]>>(grid: &[R]) -> Result<Option<Player>, InvalidBoard> {
    if grid.len() < 2 {
        return Err(InvalidBoard::TooFewRows { rows: grid.len() });
    }

    let width = grid[0].as_ref().len();
    for (row, cells) in grid.iter().enumerate() {
        let len = cells.as_ref().len();
        if len != width {
            return Err(InvalidBoard::RaggedRow {
                row,
                len,
                expected: width,
            });
        }
    }

    for (row, cells) in grid.iter().enumerate() {
        let mut streak_owner: Option<Player> = None;
        let mut streak = 0;

        for (col, square) in cells.as_ref().iter().enumerate() {
            let Square::Occupied(player) = *square else {
                streak_owner = None;
                streak = 0;
                continue;
            };

            if streak_owner == Some(player) {
                streak += 1;
            } else {
                streak_owner = Some(player);
                streak = 1;
            }
            if streak == WIN_LENGTH {
                return Ok(Some(player));
            }

            if has_diagonal(grid, row, col, player) {
                return Ok(Some(player));
            }
        }
    }

    Ok(column_winner(grid, width))
}

/// Checks both downward diagonals starting at (`row`, `col`).
fn has_diagonal<R: AsRef<[Square]>>(grid: &[R], row: usize, col: usize, player: Player) -> bool {
    let last_row = row + WIN_LENGTH - 1;
    if last_row >= grid.len() {
        return false;
    }

    let width = grid[row].as_ref().len();
    let mark = Square::Occupied(player);
    let at = |r: usize, c: usize| grid[r].as_ref()[c];

    let down_right =
        col + WIN_LENGTH - 1 < width && (1..WIN_LENGTH).all(|k| at(row + k, col + k) == mark);
    if down_right {
        return true;
    }

    col + 1 >= WIN_LENGTH && (1..WIN_LENGTH).all(|k| at(row + k, col - k) == mark)
}

/// Column-only pass; diagonals were covered by the row pass.
fn column_winner<R: AsRef<[Square]>>(grid: &[R], width: usize) -> Option<Player> {
    for col in 0..width {
        let mut streak_owner: Option<Player> = None;
        let mut streak = 0;

        for cells in grid {
            match cells.as_ref()[col] {
                Square::Empty => {
                    streak_owner = None;
                    streak = 0;
                }
                Square::Occupied(player) => {
                    if streak_owner == Some(player) {
                        streak += 1;
                    } else {
                        streak_owner = Some(player);
                        streak = 1;
                    }
                    if streak == WIN_LENGTH {
                        return Some(player);
                    }
                }
            }
        }
    }

    None
}
