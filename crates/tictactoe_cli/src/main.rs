//! tictactoe - play against a perfect minimax engine.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tictactoe_cli::{Cli, Command, PlayConfig, play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            human,
            config,
            stats,
        } => run_play(human.map(Into::into), config, stats),
        Command::Analyze { board } => {
            let mut stdout = io::stdout().lock();
            play::analyze(&board, &mut stdout)
        }
        Command::SelfPlay => {
            let mut stdout = BufWriter::new(io::stdout().lock());
            play::self_play(&mut stdout)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    human: Option<tictactoe_engine::Player>,
    config: Option<std::path::PathBuf>,
    stats: bool,
) -> Result<()> {
    let mut settings = match &config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    };
    if let Some(mark) = human {
        settings = settings.with_human_mark(mark);
    }
    if stats {
        settings = settings.with_show_stats(true);
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let outcome = play::play(stdin, &mut stdout, &settings)?;
    info!(%outcome, "Game finished");
    Ok(())
}
