//! A local hot-seat session: one engine plus the selection state the engine
//! does not track.

use blockade_core::{Cell, Coord, GameAction, GameError, GameEvent, GameState};
use tracing::debug;

/// What a click on the board does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionMode {
    #[default]
    Move,
    Obstacle,
}

/// How a status line should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// A message for the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }
}

/// One match between two people sharing a terminal.
pub struct Session {
    game: GameState,
    mode: ActionMode,
    /// Piece chosen in move mode, waiting for a destination
    armed: Option<Coord>,
}

impl Session {
    pub fn new(player_names: [String; 2]) -> Self {
        Self {
            game: GameState::new(player_names),
            mode: ActionMode::Move,
            armed: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn mode(&self) -> ActionMode {
        self.mode
    }

    pub fn armed(&self) -> Option<Coord> {
        self.armed
    }

    /// Destinations to highlight for the armed piece
    pub fn highlights(&self) -> Vec<Coord> {
        self.armed
            .map(|from| self.game.valid_moves(from))
            .unwrap_or_default()
    }

    /// Prompt describing what the current player should do next
    pub fn prompt(&self) -> Status {
        let player = self.game.current();
        match self.mode {
            ActionMode::Move => Status::info(format!(
                "Player {}'s turn ({}). Select your piece to move.",
                player.id, player.name
            )),
            ActionMode::Obstacle => Status::info(format!(
                "Player {}'s turn ({}). Select an empty square for an obstacle. Obstacles left: {}",
                player.id, player.name, player.obstacles_remaining
            )),
        }
    }

    /// Switch action mode; any armed piece is dropped
    pub fn set_mode(&mut self, mode: ActionMode) -> Status {
        self.mode = mode;
        self.armed = None;
        self.prompt()
    }

    /// Drop the armed piece
    pub fn cancel(&mut self) -> Status {
        self.armed = None;
        self.prompt()
    }

    /// Start a new game with the same players
    pub fn new_game(&mut self) -> Status {
        self.game.reset();
        self.mode = ActionMode::Move;
        self.armed = None;
        Status::info(self.game.welcome_message())
    }

    /// Handle a click on `coord` according to the current mode
    pub fn select(&mut self, coord: Coord) -> Status {
        if self.game.is_finished() {
            return Status::info("The game is over. Type `new` to play again.");
        }

        match self.mode {
            ActionMode::Move => match self.armed {
                None => {
                    let player = self.game.current_player();
                    if self.game.board().get(coord) == Some(Cell::Piece(player)) {
                        self.armed = Some(coord);
                        debug!(%coord, "Piece armed");
                        Status::info(format!(
                            "Piece {} selected at {}. Now choose the destination.",
                            player, coord
                        ))
                    } else {
                        Status::info("Select your piece to move.")
                    }
                }
                Some(from) => self.play(GameAction::Move { from, to: coord }),
            },
            ActionMode::Obstacle => self.play(GameAction::PlaceObstacle(coord)),
        }
    }

    /// Move in one go without arming first
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Status {
        if self.game.is_finished() {
            return Status::info("The game is over. Type `new` to play again.");
        }
        self.mode = ActionMode::Move;
        self.armed = Some(from);
        self.play(GameAction::Move { from, to })
    }

    fn play(&mut self, action: GameAction) -> Status {
        let player = self.game.current_player();
        match self.game.apply_action(player, action) {
            Ok(events) => {
                self.armed = None;
                let text = events
                    .iter()
                    .filter(|e| !matches!(e, GameEvent::TurnEnded { .. }))
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                Status::success(text)
            }
            Err(e) => {
                // A rejected move keeps the piece armed so another destination can be tried
                if matches!(e, GameError::NotYourPiece(_)) {
                    self.armed = None;
                }
                Status::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockade_core::PlayerId;
    use pretty_assertions::assert_eq;

    fn sq(label: &str) -> Coord {
        Coord::from_label(label).unwrap()
    }

    fn session() -> Session {
        Session::new(["Ana".to_string(), "Rui".to_string()])
    }

    #[test]
    fn test_arm_then_move() {
        let mut s = session();
        let status = s.select(sq("A5"));
        assert_eq!(status.tone, Tone::Info);
        assert_eq!(s.armed(), Some(sq("A5")));
        assert_eq!(s.highlights().len(), 3);

        let status = s.select(sq("B5"));
        assert_eq!(status, Status::success("Player X moved from A5 to B5."));
        assert_eq!(s.armed(), None);
        assert_eq!(s.game().current_player(), PlayerId::O);
    }

    #[test]
    fn test_select_empty_square_does_not_arm() {
        let mut s = session();
        let status = s.select(sq("E5"));
        assert_eq!(status, Status::info("Select your piece to move."));
        assert_eq!(s.armed(), None);

        // The opponent's piece cannot be armed either
        s.select(sq("I5"));
        assert_eq!(s.armed(), None);
    }

    #[test]
    fn test_rejected_move_keeps_selection() {
        let mut s = session();
        s.select(sq("A5"));
        let status = s.select(sq("C5"));
        assert_eq!(status.tone, Tone::Error);
        assert_eq!(
            status.text,
            "Invalid move: only one square horizontally or vertically"
        );
        assert_eq!(s.armed(), Some(sq("A5")));
        assert_eq!(s.game().current_player(), PlayerId::X);
    }

    #[test]
    fn test_switching_mode_clears_selection() {
        let mut s = session();
        s.select(sq("A5"));
        s.set_mode(ActionMode::Obstacle);
        assert_eq!(s.armed(), None);
        assert_eq!(s.mode(), ActionMode::Obstacle);
        assert!(s.prompt().text.ends_with("Obstacles left: 3"));
    }

    #[test]
    fn test_obstacle_mode() {
        let mut s = session();
        s.set_mode(ActionMode::Obstacle);
        let status = s.select(sq("E5"));
        assert_eq!(status.tone, Tone::Success);
        assert_eq!(s.game().player(PlayerId::X).obstacles_remaining, 2);
        assert_eq!(s.game().current_player(), PlayerId::O);

        let status = s.select(sq("E5"));
        assert_eq!(
            status,
            Status::error("Cannot place an obstacle on an occupied square")
        );
        assert_eq!(s.game().current_player(), PlayerId::O);
    }

    #[test]
    fn test_input_ignored_after_win() {
        let mut s = session();
        let x_path = ["A5", "B5", "C5", "D5", "E5", "F5", "G5", "H5", "I5"];
        let o_path = ["I5", "I4", "I3", "I4", "I3", "I4", "I3", "I4"];
        for i in 0..x_path.len() - 1 {
            s.move_piece(sq(x_path[i]), sq(x_path[i + 1]));
            if s.game().is_finished() {
                break;
            }
            s.move_piece(sq(o_path[i]), sq(o_path[i + 1]));
        }

        assert_eq!(s.game().winner(), Some(PlayerId::X));
        let status = s.select(sq("H5"));
        assert_eq!(status.text, "The game is over. Type `new` to play again.");

        let status = s.new_game();
        assert!(status.text.starts_with("Welcome!"));
        assert!(!s.game().is_finished());
    }
}
