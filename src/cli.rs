//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with full move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// List moves newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play,

    /// Apply a fixed sequence of moves and print the result
    Replay {
        /// Cell indices (0-8), comma separated
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// History step to show after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the session view as JSON
        #[arg(long)]
        json: bool,
    },
}
