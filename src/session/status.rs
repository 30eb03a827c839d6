//! Derived game status.

use crate::tictactoe::{Mark, Position};
use serde::Serialize;

/// Status of the snapshot currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// No winner yet and empty cells remain.
    InProgress {
        /// Mark that plays next.
        next: Mark,
    },
    /// A line has been completed.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board is full with no winner.
    ///
    /// `next` still follows the turn order even though no cell is left.
    Draw {
        /// Mark whose turn it would be.
        next: Mark,
    },
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the mark whose turn it is, or `None` once someone has won.
    pub fn next_mark(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress { next } | GameStatus::Draw { next } => Some(*next),
            GameStatus::Won { .. } => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw { .. } => write!(f, "Draw"),
        }
    }
}
