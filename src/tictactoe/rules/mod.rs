//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Rules are kept apart from board
//! storage so the session and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, evaluate_winner};
