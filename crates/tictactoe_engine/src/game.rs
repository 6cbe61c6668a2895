//! Game session: a board plus the moves that produced it.

use crate::action::Move;
use crate::error::InvalidMove;
#[cfg(debug_assertions)]
use crate::invariants::{GameInvariants, InvariantSet};
use crate::outcome::Outcome;
use crate::rules;
use crate::search;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A game in any phase.
///
/// Drivers keep one of these per match. The board is replaced by a new
/// value on every move; everything else is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: rules::initial_state(),
            history: Vec::new(),
        }
    }

    /// Replays moves from the initial board.
    ///
    /// # Errors
    ///
    /// Stops at the first move that cannot be applied.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut game = Self::new();
        for mv in moves {
            game.play(*mv)?;
        }
        Ok(game)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, history: Vec<Move>) -> Self {
        Self { board, history }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        rules::current_player(&self.board)
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns the legal moves in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// Plays `mv` for the player to move and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns the rules engine's `InvalidMove`; the game is unchanged.
    #[instrument(skip(self), fields(ply = self.history.len(), player = %self.to_move()))]
    pub fn play(&mut self, mv: Move) -> Result<Outcome, InvalidMove> {
        self.board = rules::apply_move(&self.board, mv)?;
        self.history.push(mv);

        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated after move");
            }
        }

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, plies = self.history.len(), "Game over");
        }
        Ok(outcome)
    }

    /// Plays the engine's recommended move, if the game is not over.
    #[instrument(skip(self))]
    pub fn play_recommended(&mut self) -> Option<Move> {
        let mv = search::recommend_move(&self.board)?;
        match self.play(mv) {
            Ok(_) => Some(mv),
            Err(error) => {
                warn!(%error, %mv, "Recommended move rejected");
                None
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
