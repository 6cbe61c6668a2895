//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use tictactoe_engine::Player;

/// Tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or analyze tic-tac-toe with a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Mark to play (x moves first). Overrides the config file.
        #[arg(long, value_enum)]
        human: Option<Mark>,

        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print search counters after each engine move
        #[arg(long)]
        stats: bool,
    },

    /// Show outcome and best move for a board, e.g. "XX. O.. ..."
    Analyze {
        /// Nine squares, row-major: X, O and . for empty
        board: String,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay,
}

/// Mark as written on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Play X
    X,
    /// Play O
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}
