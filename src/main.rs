//! tictactoe_timeline - console front end
//!
//! Plays a game on stdin/stdout or replays a fixed move sequence.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::{Session, Settings, SortOrder};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if cli.descending {
        settings = settings.with_sort_order(SortOrder::Descending);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&settings),
        Command::Replay { moves, jump, json } => run_replay(&settings, &moves, jump, json),
    }
}

/// Run an interactive game on stdin
#[instrument(skip(settings))]
fn run_play(settings: &Settings) -> Result<()> {
    info!("Starting interactive game");
    let mut session = Session::with_sort_order(*settings.sort_order());
    let stdin = std::io::stdin();
    console::run(&mut session, stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Apply `moves` in order, optionally jump, then print the result
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let mut session = Session::with_sort_order(*settings.sort_order());
    for (turn, &index) in moves.iter().enumerate() {
        session
            .try_select_cell(index)
            .with_context(|| format!("Move {} (cell {}) was rejected", turn + 1, index))?;
    }
    if let Some(step) = jump {
        session.jump_to(step)?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&session.view())?);
    } else {
        println!("{}", console::render(&session.view()));
    }
    Ok(())
}
