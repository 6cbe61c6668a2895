//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. Nothing here keeps state: the
//! player to move, the legal moves and the outcome are all recomputed
//! from the marks on the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winner;

use crate::action::Move;
use crate::error::InvalidMove;
use crate::outcome::Outcome;
use crate::types::{Board, Player, Square};
use tracing::{instrument, trace};

/// Returns the starting board: every square empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player to move.
///
/// X moves whenever it has no more marks than O.
#[instrument(level = "trace", skip(board))]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty square in row-major order, or nothing once the
/// game is over.
///
/// The order decides tie-breaks in the search.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    if is_terminal(board) {
        return Vec::new();
    }

    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .filter_map(|(idx, _)| Move::from_index(idx))
        .collect()
}

/// Places the current player's mark at `mv` on a copy of `board`.
///
/// # Errors
///
/// - `InvalidMove::GameOver` if the board is already terminal
/// - `InvalidMove::OutOfBounds` if the coordinate is off the board
/// - `InvalidMove::Occupied` if the square is taken
#[instrument(level = "trace", skip(board), fields(row = mv.row, col = mv.col))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, InvalidMove> {
    if is_terminal(board) {
        return Err(InvalidMove::GameOver);
    }

    match board.get(mv) {
        None => Err(InvalidMove::OutOfBounds(mv)),
        Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(mv)),
        Some(Square::Empty) => {
            let player = current_player(board);
            trace!(%player, "Placing mark");
            Ok(board.with_mark(mv, player))
        }
    }
}

/// Returns the player owning a complete row, column or diagonal.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let rows: Vec<&[Square]> = board.rows().collect();
    // A board always has SIZE >= 2 equal rows, so the scan cannot fail.
    find_winner(rows.as_slice()).ok().flatten()
}

/// Returns true if someone has won or no empty square remains.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_terminal()
}

/// Derives the outcome from a single win scan.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        Outcome::Won(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Scores an outcome from X's point of view.
pub fn utility(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Won(Player::X) => 1,
        Outcome::Won(Player::O) => -1,
        Outcome::Draw | Outcome::InProgress => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&initial_state()), Player::X);
    }

    #[test]
    fn test_players_alternate() {
        assert_eq!(current_player(&board("X.. ... ...")), Player::O);
        assert_eq!(current_player(&board("X.. .O. ...")), Player::X);
    }

    #[test]
    fn test_initial_legal_moves_row_major() {
        let moves = legal_moves(&initial_state());
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 1));
        assert_eq!(moves[3], Move::new(1, 0));
        assert_eq!(moves[8], Move::new(2, 2));
    }

    #[test]
    fn test_legal_moves_skip_occupied() {
        let moves = legal_moves(&board("X.. .O. ..."));
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
    }

    #[test]
    fn test_no_legal_moves_after_win() {
        assert!(legal_moves(&board("XXX OO. ...")).is_empty());
    }

    #[test]
    fn test_apply_move_places_current_mark() {
        let start = board("X.. ... ...");
        let next = apply_move(&start, Move::new(1, 1)).unwrap();
        assert_eq!(next.get(Move::new(1, 1)), Some(Square::Occupied(Player::O)));
        assert_eq!(start, board("X.. ... ..."));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let start = board("X.. ... ...");
        assert_eq!(
            apply_move(&start, Move::new(0, 0)),
            Err(InvalidMove::Occupied(Move::new(0, 0)))
        );
    }

    #[test]
    fn test_apply_move_rejects_off_board() {
        assert_eq!(
            apply_move(&initial_state(), Move::new(0, 3)),
            Err(InvalidMove::OutOfBounds(Move::new(0, 3)))
        );
    }

    #[test]
    fn test_apply_move_rejects_finished_game() {
        let won = board("XXX OO. ...");
        assert_eq!(apply_move(&won, Move::new(2, 2)), Err(InvalidMove::GameOver));
        assert_eq!(apply_move(&won, Move::new(0, 0)), Err(InvalidMove::GameOver));
        assert_eq!(apply_move(&won, Move::new(9, 9)), Err(InvalidMove::GameOver));
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(outcome(&initial_state()), Outcome::InProgress);
        assert_eq!(outcome(&board("XXX OO. ...")), Outcome::Won(Player::X));
        assert_eq!(outcome(&board("XX. OOO X.X")), Outcome::Won(Player::O));
        assert_eq!(outcome(&board("XOX OXX OXO")), Outcome::Draw);
    }

    #[test]
    fn test_utility() {
        assert_eq!(utility(Outcome::Won(Player::X)), 1);
        assert_eq!(utility(Outcome::Won(Player::O)), -1);
        assert_eq!(utility(Outcome::Draw), 0);
        assert_eq!(utility(Outcome::InProgress), 0);
    }

    #[test]
    fn test_win_on_last_square_is_not_a_draw() {
        let full = board("XOX OXO XOX");
        assert!(is_full(&full));
        assert_eq!(outcome(&full), Outcome::Won(Player::X));
    }
}
