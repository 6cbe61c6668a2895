//! Tic-tac-toe decision engine.
//!
//! The rules engine answers every question about a board (who moves,
//! which moves are legal, who won) from the marks alone. The search
//! engine plays perfectly on top of it with full-depth minimax and
//! alpha-beta pruning.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{rules, search, Outcome};
//!
//! let mut board = rules::initial_state();
//! while let Some(mv) = search::recommend_move(&board) {
//!     board = rules::apply_move(&board, mv)?;
//! }
//! assert_eq!(rules::outcome(&board), Outcome::Draw);
//! # Ok::<(), tictactoe_engine::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod search;

pub use action::Move;
pub use error::{InvalidBoard, InvalidMove, ParseMoveError};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, CELLS, Player, SIZE, Square, WIN_LENGTH};

pub use rules::{
    apply_move, current_player, initial_state, is_terminal, legal_moves, outcome, utility, winner,
};
pub use search::{SearchResult, SearchStats, best_move, recommend_move};
