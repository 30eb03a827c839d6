//! Decided-is-terminal invariant: nothing is played after a win.

use super::Invariant;
use crate::session::Session;

/// Invariant: Only the last history entry may hold a winning line.
pub struct DecidedIsTerminalInvariant;

impl Invariant<Session> for DecidedIsTerminalInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|entry| !entry.board().is_decided())
    }

    fn description() -> &'static str {
        "No move follows a decided board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Mark, Move, Position};

    #[test]
    fn test_won_game_holds() {
        let mut session = Session::new();
        for index in [0, 1, 3, 4, 6] {
            session.select_cell(index);
        }
        assert!(session.is_decided());
        assert!(DecidedIsTerminalInvariant::holds(&session));
    }

    #[test]
    fn test_entry_after_win_violates() {
        let mut session = Session::new();
        for index in [0, 1, 3, 4, 6] {
            session.select_cell(index);
        }
        // Force a sixth entry past the win, bypassing the rules.
        let board = *session.history[5].board();
        session.history.push(HistoryEntry {
            board,
            last_move: Some(Move::new(Mark::O, Position::BottomRight)),
        });
        assert!(!DecidedIsTerminalInvariant::holds(&session));
    }
}
