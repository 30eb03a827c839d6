//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, checked in this order.
///
/// Rows come before columns, columns before diagonals. When two lines match,
/// the first one listed wins the tie.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A decided board: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The mark occupying the whole line.
    pub winner: Mark,
    /// The winning line.
    pub line: [Position; 3],
}

impl WinResult {
    /// Board indices of the winning line.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Finds the first winning line on the board.
///
/// Only cell marks are compared; highlight flags are ignored.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<WinResult> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let mark = board.mark(a)?;
        (board.mark(b) == Some(mark) && board.mark(c) == Some(mark))
            .then_some(WinResult { winner: mark, line })
    })
}
