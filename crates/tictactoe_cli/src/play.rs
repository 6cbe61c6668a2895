//! Terminal drivers: interactive play, board analysis and self-play.
//!
//! Each driver writes to any `Write` and interactive play reads from any
//! `BufRead`, so they run the same on a terminal and in tests.

use crate::config::PlayConfig;
use crate::input::parse_human_move;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::search::{self, INFINITY, NEG_INFINITY, SearchStats};
use tictactoe_engine::invariants::{Invariant, MarkBalanceInvariant};
use tictactoe_engine::{Board, Game, Move, Outcome, Position, rules};
use tracing::{debug, info, instrument};

/// Runs a human-vs-engine game until it ends.
///
/// Unreadable or illegal input is reported and asked for again.
///
/// # Errors
///
/// Fails if the input ends before the game does, or on I/O errors.
#[instrument(skip_all, fields(human = %config.human_mark()))]
pub fn play<R: BufRead, W: Write>(mut input: R, output: &mut W, config: &PlayConfig) -> Result<Outcome> {
    let human = *config.human_mark();
    let mut game = Game::new();
    info!("Starting game");
    writeln!(output, "You are {}. X moves first.", human)?;

    while !game.outcome().is_terminal() {
        if game.to_move() == human {
            if *config.show_board_each_turn() {
                writeln!(output, "\n{}\n", game.board())?;
            }
            write!(output, "Your move ({}): ", human)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("Input closed before the game ended");
            }

            let mv = match parse_human_move(&line) {
                Ok(mv) => mv,
                Err(error) => {
                    writeln!(output, "{}", error)?;
                    continue;
                }
            };
            if let Err(error) = game.play(mv) {
                debug!(%error, %mv, "Rejected human move");
                writeln!(output, "{}", error)?;
            }
        } else {
            let mut stats = SearchStats::default();
            let result = search::search_with_stats(game.board(), NEG_INFINITY, INFINITY, &mut stats);
            let Some(mv) = result.best_move else {
                break;
            };
            game.play(mv)?;
            writeln!(output, "Engine plays {}", describe(mv))?;
            if *config.show_stats() {
                writeln!(
                    output,
                    "  value {}, {} nodes, {} cutoffs",
                    result.value, stats.nodes, stats.cutoffs
                )?;
            }
        }
    }

    let outcome = game.outcome();
    writeln!(output, "\n{}\n", game.board())?;
    match outcome.winner() {
        Some(player) if player == human => writeln!(output, "You win!")?,
        Some(_) => writeln!(output, "Engine wins.")?,
        None => writeln!(output, "Draw.")?,
    }
    Ok(outcome)
}

/// Prints the player to move, the outcome and the engine's choice for
/// the board written in `text`.
///
/// # Errors
///
/// Fails if `text` is not a board.
#[instrument(skip(output))]
pub fn analyze<W: Write>(text: &str, output: &mut W) -> Result<()> {
    let board: Board = text.parse()?;
    let outcome = rules::outcome(&board);

    writeln!(output, "{}\n", board)?;
    if !<MarkBalanceInvariant as Invariant<Board>>::holds(&board) {
        writeln!(output, "Warning: mark counts are not reachable in play")?;
    }
    writeln!(output, "Outcome: {}", outcome)?;
    if outcome.is_terminal() {
        return Ok(());
    }

    let result = search::search(&board, NEG_INFINITY, INFINITY);
    writeln!(output, "To move: {}", rules::current_player(&board))?;
    if let Some(mv) = result.best_move {
        writeln!(output, "Best move: {}", describe(mv))?;
    }
    writeln!(output, "Value: {} ({})", result.value, verdict(result.value))?;
    Ok(())
}

/// Plays the engine against itself, printing each ply.
///
/// # Errors
///
/// Fails only on I/O errors.
#[instrument(skip_all)]
pub fn self_play<W: Write>(output: &mut W) -> Result<Outcome> {
    let mut game = Game::new();
    while let Some(mv) = search::recommend_move(game.board()) {
        let player = game.to_move();
        game.play(mv)?;
        writeln!(output, "{}: {}", player, describe(mv))?;
    }

    let outcome = game.outcome();
    writeln!(output, "\n{}\n\n{}", game.board(), outcome)?;
    Ok(outcome)
}

fn describe(mv: Move) -> String {
    match Position::from_move(mv) {
        Some(position) => format!("{} {}", position, mv),
        None => mv.to_string(),
    }
}

fn verdict(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}
