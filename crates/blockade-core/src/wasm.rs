//! WebAssembly bindings for the Blockade game engine.
//!
//! This module exposes the engine contract to JavaScript through wasm-bindgen.
//! Every call returns JSON; rejected actions come back as
//! `{"ok": false, "reason": "...", "message": "..."}` rather than exceptions.

use wasm_bindgen::prelude::*;

use crate::actions::{GameAction, GameEvent};
use crate::board::PlayerId;
use crate::coord::Coord;
use crate::game::{GameError, GameState};
use serde::Serialize;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Result of an attempted action, as seen by JavaScript
#[derive(Debug, Serialize)]
struct ActionOutcome {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    message: String,
    events: Vec<GameEvent>,
}

impl ActionOutcome {
    fn from_result(result: Result<Vec<GameEvent>, GameError>) -> Self {
        match result {
            Ok(events) => Self {
                ok: true,
                reason: None,
                message: events
                    .first()
                    .map(|e| e.to_string())
                    .unwrap_or_default(),
                events,
            },
            Err(e) => Self {
                ok: false,
                reason: Some(e.reason()),
                message: e.to_string(),
                events: Vec::new(),
            },
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
    }
}

/// Convert a grid index pair to its label (`"A5"`), or `null` off the board
#[wasm_bindgen(js_name = indexToLabel)]
pub fn index_to_label(row: i32, col: i32) -> Option<String> {
    Coord::new(row, col).label()
}

/// Convert a label to `[row, col]`, or `null` if it is not a square
#[wasm_bindgen(js_name = labelToIndex)]
pub fn label_to_index(label: &str) -> Option<Vec<i32>> {
    Coord::from_label(label).ok().map(|c| vec![c.row, c.col])
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game with the given display names for X and O
    #[wasm_bindgen(constructor)]
    pub fn new(name_x: &str, name_o: &str) -> WasmGame {
        WasmGame {
            state: GameState::new([name_x.to_string(), name_o.to_string()]),
        }
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get board state as JSON (for rendering)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        let board_json = self.state.board().to_json_friendly();
        serde_json::to_string(&board_json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the current player's symbol ("X" or "O")
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> String {
        self.state.current_player().to_string()
    }

    /// Obstacles left for the given player symbol
    #[wasm_bindgen(js_name = getObstaclesRemaining)]
    pub fn get_obstacles_remaining(&self, player: &str) -> Option<u32> {
        parse_player(player).map(|p| self.state.player(p).obstacles_remaining)
    }

    /// Move the current player's piece; the turn passes on unless the move wins
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> String {
        let action = GameAction::Move {
            from: Coord::new(from_row, from_col),
            to: Coord::new(to_row, to_col),
        };
        self.play(action)
    }

    /// Place an obstacle for the current player; the turn passes on
    #[wasm_bindgen(js_name = attemptPlaceObstacle)]
    pub fn attempt_place_obstacle(&mut self, row: i32, col: i32) -> String {
        self.play(GameAction::PlaceObstacle(Coord::new(row, col)))
    }

    /// Whether the given player symbol stands on its objective
    #[wasm_bindgen(js_name = checkWin)]
    pub fn check_win(&self, player: &str) -> bool {
        parse_player(player).is_some_and(|p| self.state.check_win(p))
    }

    /// Squares the piece at (row, col) may step to, as a JSON array of `[row, col]`
    #[wasm_bindgen(js_name = getValidMoves)]
    pub fn get_valid_moves(&self, row: i32, col: i32) -> String {
        let moves: Vec<[i32; 2]> = self
            .state
            .valid_moves(Coord::new(row, col))
            .into_iter()
            .map(|c| [c.row, c.col])
            .collect();
        serde_json::to_string(&moves).unwrap_or_else(|_| "[]".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner's symbol (if game is finished)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<String> {
        self.state.winner().map(|p| p.to_string())
    }

    /// Opening message naming starts and objectives
    #[wasm_bindgen(js_name = getWelcomeMessage)]
    pub fn get_welcome_message(&self) -> String {
        self.state.welcome_message()
    }

    /// Start a new game with the same names
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl WasmGame {
    fn play(&mut self, action: GameAction) -> String {
        let player = self.state.current_player();
        ActionOutcome::from_result(self.state.apply_action(player, action)).to_json()
    }
}

fn parse_player(symbol: &str) -> Option<PlayerId> {
    match symbol {
        "X" | "x" => Some(PlayerId::X),
        "O" | "o" => Some(PlayerId::O),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_outcome_json() {
        let mut game = WasmGame::new("X", "O");
        let json: serde_json::Value =
            serde_json::from_str(&game.attempt_move(0, 4, 1, 4)).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["message"], "Player X moved from A5 to B5.");
        assert_eq!(game.get_current_player(), "O");
    }

    #[test]
    fn test_rejection_carries_reason() {
        let mut game = WasmGame::new("X", "O");
        let json: serde_json::Value =
            serde_json::from_str(&game.attempt_move(0, 4, 2, 5)).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["reason"], "not-adjacent");
        assert_eq!(game.get_current_player(), "X");
    }

    #[test]
    fn test_label_helpers() {
        assert_eq!(index_to_label(0, 0).as_deref(), Some("A9"));
        assert_eq!(label_to_index("I1"), Some(vec![8, 8]));
        assert_eq!(label_to_index("Z1"), None);
    }

    #[test]
    fn test_obstacles_remaining() {
        let mut game = WasmGame::new("X", "O");
        game.attempt_place_obstacle(4, 4);
        assert_eq!(game.get_obstacles_remaining("X"), Some(2));
        assert_eq!(game.get_obstacles_remaining("?"), None);
    }
}
