//! Tic-tac-toe with time travel.
//!
//! The game state engine behind a two-player 3x3 game: immutable board
//! snapshots, win detection, and a session that keeps every snapshot so a
//! player can jump back to any earlier move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Mark`], [`Position`] and the win/draw rules
//! - **Session**: [`Session`] owns the history, the current step and the move list order
//! - **Config**: [`Settings`] loaded from TOML for the console front end
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Mark, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 1, 3, 4, 6] {
//!     session.select_cell(index);
//! }
//! assert_eq!(session.winner(), Some(Mark::X));
//!
//! session.jump_to(2).unwrap();
//! assert_eq!(session.to_move(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod tictactoe;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Session
pub use session::invariants::{
    AlternatingTurnInvariant, DecidedIsTerminalInvariant, InitialEntryInvariant, Invariant,
    InvariantSet, InvariantViolation, SessionInvariants, SingleCellTransitionInvariant,
};
pub use session::{
    GameStatus, HistoryEntry, MoveListEntry, OutOfRangeError, Session, SessionView, SortOrder,
};

// Crate-level exports - Board model
pub use tictactoe::rules;
pub use tictactoe::{Board, Cell, IllegalMoveError, Mark, Move, Position, WinResult};
