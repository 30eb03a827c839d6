//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::evaluate_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate_winner(board).is_none()
}
