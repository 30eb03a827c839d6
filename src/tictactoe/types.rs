//! Core domain types for tic-tac-toe.

use super::action::{IllegalMoveError, Move};
use super::position::Position;
use super::rules::{self, WinResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (always moves first).
    X,
    /// Player O (moves second).
    O,
}

/// A single square of a board snapshot.
///
/// The `highlighted` flag marks cells on the winning line. It is display
/// state only and is ignored by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Mark in this cell, if any.
    pub mark: Option<Mark>,
    /// Whether this cell belongs to the winning line.
    pub highlighted: bool,
}

impl Cell {
    /// An empty, unhighlighted cell.
    pub const EMPTY: Cell = Cell {
        mark: None,
        highlighted: false,
    };

    /// Creates an unhighlighted cell holding `mark`.
    pub fn marked(mark: Mark) -> Self {
        Self {
            mark: Some(mark),
            highlighted: false,
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }
}

/// Immutable 3x3 board snapshot.
///
/// Cells are stored in row-major order, so index = row * 3 + col.
/// Every move produces a new `Board`; no method mutates a snapshot in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; 9],
        }
    }

    /// Builds a board from marks in row-major order.
    pub fn from_marks(marks: [Option<Mark>; 9]) -> Self {
        Self {
            cells: marks.map(|mark| Cell {
                mark,
                highlighted: false,
            }),
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, or `None` when the index is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the mark at the given position.
    pub fn mark(&self, pos: Position) -> Option<Mark> {
        self.get(pos).mark
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true when the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Evaluates the board for a winning line.
    pub fn evaluate_winner(&self) -> Option<WinResult> {
        rules::evaluate_winner(self)
    }

    /// Returns true if a winning line exists.
    pub fn is_decided(&self) -> bool {
        self.evaluate_winner().is_some()
    }

    /// Places `mark` at `index`, returning the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Board::validate_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize, mark: Mark) -> Result<Board, IllegalMoveError> {
        let mov = self.validate_move(index, mark)?;
        Ok(self.place(mov))
    }

    /// Checks that `mark` may be placed at `index` and returns the move.
    ///
    /// # Errors
    ///
    /// - [`IllegalMoveError::GameDecided`] if this board already has a winner
    /// - [`IllegalMoveError::OutOfBounds`] if `index` is not in 0..=8
    /// - [`IllegalMoveError::CellOccupied`] if the cell already holds a mark
    pub fn validate_move(&self, index: usize, mark: Mark) -> Result<Move, IllegalMoveError> {
        if self.is_decided() {
            return Err(IllegalMoveError::GameDecided);
        }

        let pos = Position::from_index(index).ok_or(IllegalMoveError::OutOfBounds(index))?;
        if !self.is_empty(pos) {
            return Err(IllegalMoveError::CellOccupied(pos));
        }
        Ok(Move::new(mark, pos))
    }

    /// Returns a copy with the move's mark placed. Only call with a move
    /// returned by [`Board::validate_move`] on this board.
    pub(crate) fn place(&self, mov: Move) -> Board {
        let mut next = *self;
        next.cells[mov.position().to_index()] = Cell::marked(mov.player());
        debug!(position = %mov.position(), mark = %mov.player(), "Mark placed on new snapshot");
        next
    }

    /// Returns a copy with the cells on `line` flagged as highlighted.
    pub fn with_highlight(&self, line: &[Position; 3]) -> Board {
        let mut next = *self;
        for pos in line {
            next.cells[pos.to_index()].highlighted = true;
        }
        next
    }

    /// Returns a copy with the winning line highlighted, if there is one.
    pub fn highlighted(&self) -> Board {
        match self.evaluate_winner() {
            Some(result) => self.with_highlight(&result.line),
            None => *self,
        }
    }

    /// Returns positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a player can type it back in.
    /// Highlighted marks are wrapped in brackets.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let cell = self.cells[index];
                let symbol = match (cell.mark, cell.highlighted) {
                    (None, _) => format!(" {} ", index),
                    (Some(mark), false) => format!(" {} ", mark),
                    (Some(mark), true) => format!("[{}]", mark),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(Cell::is_empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_returns_new_snapshot() {
        let board = Board::new();
        let next = board.apply_move(4, Mark::X).unwrap();
        assert_eq!(next.mark(Position::Center), Some(Mark::X));
        assert!(board.is_empty(Position::Center));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::new().apply_move(0, Mark::X).unwrap();
        assert_eq!(
            board.apply_move(0, Mark::O),
            Err(IllegalMoveError::CellOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_validate_move_returns_position() {
        let board = Board::new().apply_move(0, Mark::X).unwrap();
        let mov = board.validate_move(5, Mark::O).unwrap();
        assert_eq!(mov, Move::new(Mark::O, Position::MiddleRight));
        assert!(board.is_empty(Position::MiddleRight));
    }

    #[test]
    fn test_empty_positions_skip_marks() {
        let board = Board::new()
            .apply_move(0, Mark::X)
            .and_then(|b| b.apply_move(4, Mark::O))
            .unwrap();
        let open = board.empty_positions();
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::TopLeft));
        assert!(!open.contains(&Position::Center));
        assert_eq!(open.first(), Some(&Position::TopCenter));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        assert_eq!(
            Board::new().apply_move(9, Mark::X),
            Err(IllegalMoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_apply_move_rejects_decided_board() {
        let x = Some(Mark::X);
        let board = Board::from_marks([x, x, x, None, None, None, None, None, None]);
        assert_eq!(
            board.apply_move(5, Mark::O),
            Err(IllegalMoveError::GameDecided)
        );
    }

    #[test]
    fn test_highlighted_leaves_original_untouched() {
        let o = Some(Mark::O);
        let board = Board::from_marks([o, None, None, None, o, None, None, None, o]);
        let lit = board.highlighted();
        assert!(lit.get(Position::TopLeft).highlighted);
        assert!(lit.get(Position::Center).highlighted);
        assert!(lit.get(Position::BottomRight).highlighted);
        assert!(!lit.get(Position::TopRight).highlighted);
        assert!(board.cells().iter().all(|c| !c.highlighted));
    }

    #[test]
    fn test_display_marks_and_indices() {
        let board = Board::new().apply_move(0, Mark::X).unwrap();
        let text = board.display();
        assert!(text.starts_with(" X | 1 | 2 "));
        assert!(text.ends_with(" 6 | 7 | 8 "));
    }

    #[test]
    fn test_display_brackets_winning_line() {
        let x = Some(Mark::X);
        let board = Board::from_marks([x, x, x, None, None, None, None, None, None]);
        assert!(board.highlighted().display().starts_with("[X]|[X]|[X]"));
    }
}
