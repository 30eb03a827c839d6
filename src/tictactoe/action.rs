//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed a
//! mark where, and every history entry after the first carries one.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Mark,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Mark, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Mark {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Where the mark went, as `(col,row)`.
    pub fn description(&self) -> String {
        self.position.coordinates()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} moved to {}", self.player, self.description())
    }
}

/// A move the rules do not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// The board already has a winning line.
    #[display("Game is already decided")]
    GameDecided,
}

impl std::error::Error for IllegalMoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_coordinates() {
        let mov = Move::new(Mark::O, Position::MiddleRight);
        assert_eq!(mov.description(), "(2,1)");
        assert_eq!(mov.to_string(), "O moved to (2,1)");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IllegalMoveError::CellOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            IllegalMoveError::OutOfBounds(11).to_string(),
            "Cell index 11 is out of bounds (must be 0-8)"
        );
    }
}
