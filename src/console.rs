//! Plain-text adapter between stdin/stdout and a [`Session`].
//!
//! Reads only the session's view and forwards three kinds of input:
//! cell selections, history jumps and the sort toggle.

use std::io::{BufRead, Write};
use tictactoe_timeline::{Position, Session, SessionView};
use tracing::{instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark on a cell.
    Select(usize),
    /// Show an earlier (or later) history step.
    Jump(usize),
    /// Flip the move list order.
    ToggleSort,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

impl Input {
    /// Parses a line of input. Returns `None` for anything unrecognized.
    #[instrument]
    pub fn parse(line: &str) -> Option<Input> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        match words.next()?.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Input::Quit),
            "s" | "sort" => Some(Input::ToggleSort),
            "h" | "help" | "?" => Some(Input::Help),
            "j" | "jump" => words.next()?.parse().ok().map(Input::Jump),
            _ => Position::from_label_or_number(line).map(|pos| Input::Select(pos.to_index())),
        }
    }
}

const HELP: &str = "Commands: <cell 0-8 or name> | jump <step> | sort | help | quit";

/// Renders one frame: board, status, open cells, sort order and move list.
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();
    out.push_str(&view.board.display());
    out.push_str("\n\n");
    out.push_str(&view.status.to_string());
    out.push('\n');
    if view.status.winner().is_none() && !view.board.is_full() {
        let open: Vec<String> = view
            .board
            .empty_positions()
            .iter()
            .map(|pos| pos.to_index().to_string())
            .collect();
        out.push_str(&format!("Open cells: {}\n", open.join(", ")));
    }
    let order = if view.sort_ascending {
        "Ascending"
    } else {
        "Descending"
    };
    out.push_str(&format!("Sort: {}\n", order));
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, entry.step, entry.label));
    }
    out
}

/// Runs the interactive loop until quit or end of input.
#[instrument(skip_all)]
pub fn run(
    session: &mut Session,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    writeln!(output, "{}", HELP)?;
    writeln!(output, "{}", render(&session.view()))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Input::parse(&line) {
            Some(Input::Quit) => break,
            Some(Input::Help) => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Some(Input::Select(index)) => session.select_cell(index),
            Some(Input::Jump(step)) => {
                if let Err(err) = session.jump_to(step) {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            }
            Some(Input::ToggleSort) => session.toggle_sort_order(),
            None => {
                warn!(input = %line, "Unrecognized input");
                writeln!(output, "Unrecognized input. {}", HELP)?;
                continue;
            }
        }
        writeln!(output, "{}", render(&session.view()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("4"), Some(Input::Select(4)));
        assert_eq!(Input::parse("center"), Some(Input::Select(4)));
        assert_eq!(Input::parse("jump 2"), Some(Input::Jump(2)));
        assert_eq!(Input::parse("j 0"), Some(Input::Jump(0)));
        assert_eq!(Input::parse(" SORT "), Some(Input::ToggleSort));
        assert_eq!(Input::parse("q"), Some(Input::Quit));
        assert_eq!(Input::parse("jump"), None);
        assert_eq!(Input::parse("9"), None);
    }

    #[test]
    fn test_render_shows_status_and_current_move() {
        let mut session = Session::new();
        session.select_cell(0);
        let frame = render(&session.view());
        assert!(frame.contains("Next player: O"));
        assert!(frame.contains("Sort: Ascending"));
        assert!(frame.contains("Open cells: 1, 2, 3, 4, 5, 6, 7, 8"));
        assert!(frame.contains(">  1. Move #1: X moved to (0,0)"));
        assert!(frame.contains("   0. Game start"));
    }

    #[test]
    fn test_render_omits_open_cells_once_won() {
        let mut session = Session::new();
        for index in [0, 1, 3, 4, 6] {
            session.select_cell(index);
        }
        let frame = render(&session.view());
        assert!(frame.contains("Winner: X"));
        assert!(!frame.contains("Open cells"));
    }

    #[test]
    fn test_run_scripted_game() {
        let mut session = Session::new();
        let script = "0\n1\n3\n4\n6\n8\njump 1\nsort\nquit\n5\n";
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Winner: X"));
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.current_index(), 1);
        assert!(!session.sort_ascending());
    }
}
