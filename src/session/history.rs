//! History entries and the derived move list.

use crate::tictactoe::{Board, Mark, Move};
use serde::{Deserialize, Serialize};

/// One snapshot in a game's history.
///
/// Entry 0 is the empty starting board and carries no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) last_move: Option<Move>,
}

impl HistoryEntry {
    /// The starting entry: empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Board snapshot at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this snapshot.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Mark that moved into this snapshot.
    pub fn player(&self) -> Option<Mark> {
        self.last_move.map(|mov| mov.player())
    }

    /// Where the mark went, as `(col,row)`.
    pub fn move_description(&self) -> Option<String> {
        self.last_move.map(|mov| mov.description())
    }

    /// Display label for this entry when it sits at `step` in the history.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(mov) => format!("Move #{}: {}", step, mov),
            None => "Game start".to_string(),
        }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// True for chronological order.
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// One row of the move list shown to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History index this row jumps to. Unaffected by sort order.
    pub step: usize,
    /// "Game start" or "Move #n: X moved to (col,row)".
    pub label: String,
    /// Whether this is the entry currently shown.
    pub is_current: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Position;

    #[test]
    fn test_initial_label() {
        assert_eq!(HistoryEntry::initial().label(0), "Game start");
        assert_eq!(HistoryEntry::initial().player(), None);
        assert_eq!(HistoryEntry::initial().move_description(), None);
    }

    #[test]
    fn test_move_label() {
        let mov = Move::new(Mark::X, Position::BottomCenter);
        let entry = HistoryEntry {
            board: Board::new().apply_move(7, Mark::X).unwrap(),
            last_move: Some(mov),
        };
        assert_eq!(entry.label(3), "Move #3: X moved to (1,2)");
        assert_eq!(entry.move_description().as_deref(), Some("(1,2)"));
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle().label(), "Ascending");
    }
}
