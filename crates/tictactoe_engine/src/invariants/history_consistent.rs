//! History consistency invariant: the move history rebuilds the board.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use tracing::{instrument, warn};

/// Invariant: replaying the history from the empty board yields the
/// current board, one filled square per move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    #[instrument(level = "trace", skip(game))]
    fn holds(game: &Game) -> bool {
        let filled = game.board().squares().len() - game.board().empty_count();
        if filled != game.history().len() {
            warn!(filled, history_len = game.history().len(), "History length mismatch");
            return false;
        }

        let replayed = game
            .history()
            .iter()
            .try_fold(rules::initial_state(), |board, mv| rules::apply_move(&board, *mv));

        match replayed {
            Ok(board) if board == *game.board() => true,
            Ok(_) => {
                warn!("Replayed history disagrees with board");
                false
            }
            Err(error) => {
                warn!(%error, "History contains an illegal move");
                false
            }
        }
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}
