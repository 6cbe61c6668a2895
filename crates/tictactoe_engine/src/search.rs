//! Minimax search with alpha-beta pruning.
//!
//! X maximizes [`rules::utility`], O minimizes it. The whole remaining
//! game tree is searched, so the returned values are exact game values
//! whenever the window is unbounded.

use crate::action::Move;
use crate::rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lower search bound, below every utility.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper search bound, above every utility.
pub const INFINITY: i32 = i32::MAX;

/// Best move found at a node together with its (bounded) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` only for terminal boards.
    pub best_move: Option<Move>,
    /// Value from X's point of view.
    pub value: i32,
}

/// Counters gathered while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included.
    pub nodes: u64,
    /// Times the remaining moves of a node were skipped.
    pub cutoffs: u64,
}

/// Searches `board` within the window (`alpha`, `beta`).
pub fn search(board: &Board, alpha: i32, beta: i32) -> SearchResult {
    let mut stats = SearchStats::default();
    search_with_stats(board, alpha, beta, &mut stats)
}

/// Same as [`search`], accumulating counters into `stats`.
///
/// Moves are tried in row-major order and the best move is replaced
/// only by a strictly better one, so ties go to the earliest square.
/// The first move tried is kept when no move beats the window.
pub fn search_with_stats(
    board: &Board,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    let outcome = rules::outcome(board);
    if outcome.is_terminal() {
        return SearchResult {
            best_move: None,
            value: rules::utility(outcome),
        };
    }

    let maximizing = rules::current_player(board) == Player::X;
    let mut best_move = None;

    for mv in rules::legal_moves(board) {
        // legal_moves only yields empty squares of a live board.
        let Ok(child) = rules::apply_move(board, mv) else {
            continue;
        };
        let value = search_with_stats(&child, alpha, beta, stats).value;

        if maximizing {
            if value > alpha {
                alpha = value;
                best_move = Some(mv);
            }
        } else if value < beta {
            beta = value;
            best_move = Some(mv);
        }
        if best_move.is_none() {
            best_move = Some(mv);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    SearchResult {
        best_move,
        value: if maximizing { alpha } else { beta },
    }
}

/// Returns the optimal move for the player to move, or `None` once the
/// game is over.
#[instrument(skip(board))]
pub fn recommend_move(board: &Board) -> Option<Move> {
    let mut stats = SearchStats::default();
    let result = search_with_stats(board, NEG_INFINITY, INFINITY, &mut stats);
    debug!(
        best_move = ?result.best_move,
        value = result.value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );
    result.best_move
}

/// Alias of [`recommend_move`].
pub fn best_move(board: &Board) -> Option<Move> {
    recommend_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board("XXX OO. ...");
        assert_eq!(
            search(&won, NEG_INFINITY, INFINITY),
            SearchResult {
                best_move: None,
                value: 1
            }
        );
        assert_eq!(recommend_move(&won), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        assert_eq!(recommend_move(&board("XX. OO. ...")), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        assert_eq!(recommend_move(&board("XX. OO. X..")), Some(Move::new(1, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        // O must stop X on the top row.
        assert_eq!(recommend_move(&board("XX. .O. ...")), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let result = search(&Board::new(), NEG_INFINITY, INFINITY);
        assert_eq!(result.value, 0);
        assert_eq!(result.best_move, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_last_square_is_only_move() {
        let result = search(&board("XOX XOO OX."), NEG_INFINITY, INFINITY);
        assert_eq!(result.best_move, Some(Move::new(2, 2)));
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let mut stats = SearchStats::default();
        search_with_stats(&Board::new(), NEG_INFINITY, INFINITY, &mut stats);
        assert!(stats.cutoffs > 0);
        // Unpruned tree of the empty board has 549_946 nodes.
        assert!(stats.nodes < 549_946);
    }

    #[test]
    fn test_null_window_still_yields_move() {
        // Every child fails low against an already-won window.
        let result = search(&board("X.. .O. ..."), 1, INFINITY);
        assert!(result.best_move.is_some());
    }
}
