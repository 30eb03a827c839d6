//! Board model: marks, snapshots, positions and rules.

mod action;
mod position;
pub mod rules;
mod types;

pub use action::{IllegalMoveError, Move};
pub use position::Position;
pub use rules::WinResult;
pub use types::{Board, Cell, Mark};
