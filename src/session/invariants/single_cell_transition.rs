//! Single cell transition invariant: each move changes exactly one cell.

use super::Invariant;
use crate::session::{HistoryEntry, Session};

/// Invariant: Every entry after the first differs from its predecessor in
/// exactly one cell, which went from empty to the recorded player's mark.
pub struct SingleCellTransitionInvariant;

impl SingleCellTransitionInvariant {
    fn step_holds(before: &HistoryEntry, after: &HistoryEntry) -> bool {
        let Some(mov) = after.last_move() else {
            return false;
        };

        let changed: Vec<usize> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .enumerate()
            .filter(|(_, (b, a))| b.mark != a.mark)
            .map(|(index, _)| index)
            .collect();

        let index = mov.position().to_index();
        changed == [index]
            && before.board().cells()[index].is_empty()
            && after.board().cells()[index].mark == Some(mov.player())
    }
}

impl Invariant<Session> for SingleCellTransitionInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .windows(2)
            .all(|pair| Self::step_holds(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty cell with the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_played_game_holds() {
        let mut session = Session::new();
        for index in [0, 4, 8, 2, 6] {
            session.select_cell(index);
        }
        assert!(SingleCellTransitionInvariant::holds(&session));
    }

    #[test]
    fn test_extra_cell_violates() {
        let mut session = Session::new();
        session.select_cell(4);
        let corrupted = session.history[1].board.apply_move(0, Mark::O).unwrap();
        session.history[1].board = corrupted;
        assert!(!SingleCellTransitionInvariant::holds(&session));
    }

    #[test]
    fn test_unchanged_board_violates() {
        let mut session = Session::new();
        session.select_cell(4);
        session.history[1].board = Board::new();
        assert!(!SingleCellTransitionInvariant::holds(&session));
    }
}
