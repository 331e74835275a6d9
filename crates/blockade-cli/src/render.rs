//! Plain-text rendering of the board, the player panel and status lines.

use blockade_core::{Cell, Coord, PlayerId, BOARD_SIZE};
use std::fmt::Write;

use crate::session::{ActionMode, Session, Status, Tone};

/// Draw the board with row letters and reversed column digits.
///
/// The armed piece is bracketed and its legal destinations marked with `*`.
pub fn board(session: &Session) -> String {
    let game = session.game();
    let highlights = session.highlights();
    let armed = session.armed();

    let mut out = String::new();
    out.push_str("    ");
    for col in 0..BOARD_SIZE {
        let digit = BOARD_SIZE - col;
        let _ = write!(out, " {} ", digit);
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let letter = Coord::new(row, 0).to_label().remove(0);
        let _ = write!(out, " {}  ", letter);
        for col in 0..BOARD_SIZE {
            let coord = Coord::new(row, col);
            let cell = game.board().get(coord).unwrap_or_default();
            let symbol = match cell {
                Cell::Empty if highlights.contains(&coord) => '*',
                Cell::Empty => '.',
                other => other.symbol(),
            };
            if armed == Some(coord) {
                let _ = write!(out, "[{}]", symbol);
            } else {
                let _ = write!(out, " {} ", symbol);
            }
        }
        out.push('\n');
    }

    out
}

/// Current player and obstacles left for both sides
pub fn player_panel(session: &Session) -> String {
    let game = session.game();
    let mode = match session.mode() {
        ActionMode::Move => "move",
        ActionMode::Obstacle => "obstacle",
    };

    let mut out = format!(
        "Current player: {} ({})  mode: {}\n",
        game.current_player(),
        game.current().name,
        mode
    );
    for id in PlayerId::ALL {
        let _ = writeln!(
            out,
            "Obstacles left for {}: {}",
            id,
            game.player(id).obstacles_remaining
        );
    }
    out
}

/// Status line with a marker for its tone
pub fn status(status: &Status) -> String {
    let marker = match status.tone {
        Tone::Info => "  ",
        Tone::Success => "+ ",
        Tone::Error => "! ",
    };
    format!("{}{}", marker, status.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new(["X".to_string(), "O".to_string()])
    }

    #[test]
    fn test_initial_board() {
        let text = board(&session());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "     9  8  7  6  5  4  3  2  1 ");
        assert_eq!(lines[1], " A   .  .  .  .  X  .  .  .  . ");
        assert_eq!(lines[9], " I   .  .  .  .  O  .  .  .  . ");
    }

    #[test]
    fn test_armed_piece_and_highlights() {
        let mut s = session();
        s.select(Coord::new(0, 4));
        let text = board(&s);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " A   .  .  .  * [X] *  .  .  . ");
        assert_eq!(lines[2], " B   .  .  .  .  *  .  .  .  . ");
    }

    #[test]
    fn test_player_panel() {
        let panel = player_panel(&session());
        assert_eq!(
            panel,
            "Current player: X (X)  mode: move\nObstacles left for X: 3\nObstacles left for O: 3\n"
        );
    }

    #[test]
    fn test_status_markers() {
        assert_eq!(status(&Status::error("nope")), "! nope");
        assert_eq!(status(&Status::success("yes")), "+ yes");
    }
}
