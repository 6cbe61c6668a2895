//! Mark balance invariant: X never trails O and leads by at most one.

use super::Invariant;
use crate::game::Game;
use crate::types::{Board, Player};
use tracing::{instrument, warn};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and the players alternate, so no other difference can
/// arise in play.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
