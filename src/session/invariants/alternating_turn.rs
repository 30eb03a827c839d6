//! Alternating turn invariant: X opens and players alternate.

use super::Invariant;
use crate::Mark;
use crate::session::Session;

/// Invariant: The move recorded at entry `i` was made by X when `i` is odd
/// and by O when `i` is even.
///
/// This is the same rule that derives `x_is_next` from the current index.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| {
                let expected = if (step - 1) % 2 == 0 { Mark::X } else { Mark::O };
                entry.player() == Some(expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_alternating_moves_hold() {
        let mut session = Session::new();
        for index in [0, 1, 2, 3] {
            session.select_cell(index);
        }
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_repeated_player_violates() {
        let mut session = Session::new();
        session.select_cell(0);
        session.select_cell(1);
        if let Some(mov) = session.history[2].last_move.as_mut() {
            mov.player = Mark::X;
        }
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
