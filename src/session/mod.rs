//! Game session: history, time travel and move list.
//!
//! A [`Session`] owns every snapshot of one game. Moves append a new
//! snapshot, jumps move the viewing position, and a move made after
//! jumping back discards everything past that position first.

mod error;
mod history;
pub mod invariants;
mod status;

pub use error::OutOfRangeError;
pub use history::{HistoryEntry, MoveListEntry, SortOrder};
pub use status::GameStatus;

use crate::tictactoe::{Board, IllegalMoveError, Mark};
use invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One game of tic-tac-toe with its full history.
///
/// Whose turn it is comes from `current_index` alone: X moves whenever the
/// index is even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_index: usize,
    pub(crate) sort_order: SortOrder,
}

impl Session {
    /// Creates a new session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a new session with the given move list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        info!(order = sort_order.label(), "Creating new game session");
        Self {
            history: vec![HistoryEntry::initial()],
            current_index: 0,
            sort_order,
        }
    }

    /// Selects a cell for the player to move.
    ///
    /// Illegal selections (occupied cell, index off the board, game already
    /// won) leave the session untouched.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn select_cell(&mut self, index: usize) {
        if let Err(err) = self.try_select_cell(index) {
            debug!(%err, "Ignoring illegal cell selection");
        }
    }

    /// Selects a cell, reporting why an illegal selection was refused.
    ///
    /// On success any entries past the current index are dropped, the new
    /// snapshot is appended and becomes current. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] when the current snapshot rejects the move.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn try_select_cell(&mut self, index: usize) -> Result<(), IllegalMoveError> {
        let current = *self.current_entry().board();
        let mov = current.validate_move(index, self.to_move())?;
        let board = current.place(mov);
        let (mark, position) = (mov.player(), mov.position());

        let discarded = self.history.len() - (self.current_index + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating history past current step");
        }
        self.history.truncate(self.current_index + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(mov),
        });
        self.current_index = self.history.len() - 1;

        info!(%mark, %position, step = self.current_index, "Move applied");
        if let Some(result) = board.evaluate_winner() {
            info!(winner = %result.winner, line = ?result.indices(), "Game decided");
        }

        debug_assert!(
            self.verify().is_ok(),
            "history invariants violated: {:?}",
            self.verify()
        );
        Ok(())
    }

    /// Moves the viewing position to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `step` is not a history index.
    #[instrument(skip(self), fields(current_index = self.current_index))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), OutOfRangeError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Rejected jump outside history");
            return Err(OutOfRangeError { step, len });
        }
        self.current_index = step;
        debug!(step, "Jumped to history step");
        Ok(())
    }

    /// Flips the move list between chronological and reverse order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(order = self.sort_order.label(), "Toggled move list order");
    }

    /// Status of the snapshot currently shown.
    pub fn status(&self) -> GameStatus {
        let board = self.current_entry().board();
        match board.evaluate_winner() {
            Some(result) => GameStatus::Won {
                winner: result.winner,
                line: result.line,
            },
            None if board.is_full() => GameStatus::Draw {
                next: self.to_move(),
            },
            None => GameStatus::InProgress {
                next: self.to_move(),
            },
        }
    }

    /// One row per history entry, in the current sort order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let mut moves: Vec<MoveListEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry {
                step,
                label: entry.label(step),
                is_current: step == self.current_index,
            })
            .collect();
        if !self.sort_order.is_ascending() {
            moves.reverse();
        }
        moves
    }

    /// Every snapshot in play order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the entry currently shown.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The entry currently shown.
    pub fn current_entry(&self) -> &HistoryEntry {
        // current_index is kept in 0..history.len() by every mutator
        &self.history[self.current_index]
    }

    /// Current snapshot with the winning line highlighted.
    pub fn current_board(&self) -> Board {
        self.current_entry().board().highlighted()
    }

    /// True when X plays from the current step.
    pub fn x_is_next(&self) -> bool {
        self.current_index % 2 == 0
    }

    /// Mark that would play from the current step.
    pub fn to_move(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Mark whose turn it is, or `None` when the current snapshot is won.
    pub fn next_mark(&self) -> Option<Mark> {
        self.status().next_mark()
    }

    /// Winner of the current snapshot.
    pub fn winner(&self) -> Option<Mark> {
        self.status().winner()
    }

    /// True when the current snapshot has a winning line.
    pub fn is_decided(&self) -> bool {
        self.current_entry().board().is_decided()
    }

    /// True when the current snapshot is full with no winner.
    pub fn is_draw(&self) -> bool {
        self.current_entry().board().is_draw()
    }

    /// Current move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// True when the move list is chronological.
    pub fn sort_ascending(&self) -> bool {
        self.sort_order.is_ascending()
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// Returns all violated invariants.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }

    /// Read model for adapters that draw the game.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.current_board(),
            status: self.status(),
            current_index: self.current_index,
            x_is_next: self.x_is_next(),
            sort_ascending: self.sort_ascending(),
            moves: self.move_list(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a view needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Current snapshot, winning line highlighted.
    pub board: Board,
    /// Status of the current snapshot.
    pub status: GameStatus,
    /// Index of the entry shown.
    pub current_index: usize,
    /// True when X plays from the current step.
    pub x_is_next: bool,
    /// True when the move list is chronological.
    pub sort_ascending: bool,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
}
