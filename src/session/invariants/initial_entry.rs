//! Initial entry invariant: history starts from an empty board.

use super::Invariant;
use crate::session::Session;

/// Invariant: Entry 0 exists, holds an empty board and records no move.
pub struct InitialEntryInvariant;

impl Invariant<Session> for InitialEntryInvariant {
    fn holds(session: &Session) -> bool {
        session.history().first().is_some_and(|entry| {
            entry.last_move().is_none() && entry.board().cells().iter().all(|c| c.is_empty())
        })
    }

    fn description() -> &'static str {
        "History begins with an empty board and no move"
    }
}
