//! Text commands typed at the prompt.

use blockade_core::{Coord, CoordError};
use thiserror::Error;

use crate::session::ActionMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command {0:?} (type `help`)")]
    Unknown(String),

    #[error(transparent)]
    BadSquare(#[from] CoordError),
}

/// Commands read from the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch between moving and placing obstacles
    SetMode(ActionMode),

    /// Click on a square: arm a piece, pick a destination, or drop an obstacle
    Select(Coord),

    /// Move in one go, e.g. `A5 B5`
    Move { from: Coord, to: Coord },

    /// Forget the armed piece
    Cancel,

    /// Redraw the board
    Board,

    /// Print the full game state as JSON
    State,

    /// Start over
    NewGame,

    Help,

    Quit,
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|w| !w.is_empty())
            .collect();

        let first = match words.first() {
            Some(word) => word.to_ascii_lowercase(),
            None => return Err(CommandError::Empty),
        };

        let command = match (first.as_str(), words.len()) {
            ("move" | "m", 1) => Command::SetMode(ActionMode::Move),
            ("obstacle" | "block" | "b", 1) => Command::SetMode(ActionMode::Obstacle),
            ("cancel" | "c", 1) => Command::Cancel,
            ("board", 1) => Command::Board,
            ("state", 1) => Command::State,
            ("new", 1) => Command::NewGame,
            ("help" | "?", 1) => Command::Help,
            ("quit" | "exit" | "q", 1) => Command::Quit,
            (_, 1) if first.len() == 2 => Command::Select(Coord::from_label(words[0])?),
            (_, 2) if first.len() == 2 => Command::Move {
                from: Coord::from_label(words[0])?,
                to: Coord::from_label(words[1])?,
            },
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };

        Ok(command)
    }
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  move | m          switch to move mode
  obstacle | b      switch to obstacle mode
  <square>          select a square, e.g. E5 (piece, destination or obstacle)
  <from> <to>       move in one go, e.g. A5 B5
  cancel | c        drop the selected piece
  board             redraw the board
  state             print the game state as JSON
  new               start a new game
  help | ?          show this help
  quit | q          leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("move"), Ok(Command::SetMode(ActionMode::Move)));
        assert_eq!(
            Command::parse("  Obstacle "),
            Ok(Command::SetMode(ActionMode::Obstacle))
        );
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("new"), Ok(Command::NewGame));
    }

    #[test]
    fn test_parse_squares() {
        assert_eq!(
            Command::parse("e5"),
            Ok(Command::Select(Coord::new(4, 4)))
        );
        assert_eq!(
            Command::parse("A5 B5"),
            Ok(Command::Move {
                from: Coord::new(0, 4),
                to: Coord::new(1, 4)
            })
        );
        assert_eq!(
            Command::parse("A5-A4"),
            Ok(Command::Move {
                from: Coord::new(0, 4),
                to: Coord::new(0, 5)
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("Z5"),
            Err(CommandError::BadSquare(CoordError::BadRow('Z')))
        );
        assert!(matches!(
            Command::parse("dance"),
            Err(CommandError::Unknown(_))
        ));
    }
}
