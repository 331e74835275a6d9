//! Core game state machine.
//!
//! This module contains the `GameState` struct, which owns the board, both
//! players and the turn pointer, and arbitrates every state transition.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, Cell, PlayerId};
use crate::coord::Coord;
use crate::player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players are taking turns
    InProgress,
    /// A player reached their objective; nothing can change any more
    Finished { winner: PlayerId },
}

/// Errors that can occur when applying actions.
///
/// Rule rejections are ordinary gameplay outcomes meant for display.
/// `InvalidCoordinate` is the one that points at a bug in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("The game is over")]
    GameOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("You already acted this turn")]
    ActionAlreadyTaken,

    #[error("There is no piece of yours on {0}")]
    NotYourPiece(Coord),

    #[error("Invalid square {0}")]
    InvalidCoordinate(Coord),

    #[error("Invalid move: off the board")]
    OffBoard,

    #[error("Invalid move: the way is blocked by an obstacle")]
    Blocked,

    #[error("Invalid move: the square is occupied by the opponent's piece")]
    OccupiedByOpponent,

    #[error("Invalid move: only one square horizontally or vertically")]
    NotAdjacent,

    #[error("You have no obstacles left to place")]
    NoObstaclesLeft,

    #[error("Cannot place an obstacle on an occupied square")]
    Occupied,
}

impl GameError {
    /// Stable machine-readable reason code
    pub fn reason(&self) -> &'static str {
        match self {
            GameError::GameOver => "game-over",
            GameError::NotYourTurn => "not-your-turn",
            GameError::ActionAlreadyTaken => "action-already-taken",
            GameError::NotYourPiece(_) => "not-your-piece",
            GameError::InvalidCoordinate(_) => "invalid-input",
            GameError::OffBoard => "off-board",
            GameError::Blocked => "blocked",
            GameError::OccupiedByOpponent => "occupied-by-opponent",
            GameError::NotAdjacent => "not-adjacent",
            GameError::NoObstaclesLeft => "no-obstacles-left",
            GameError::Occupied => "occupied",
        }
    }
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// Indexed by `PlayerId::index`
    players: [Player; 2],
    current_player: PlayerId,
    phase: GamePhase,
    /// Turn number (starts at 1)
    turn_number: u32,
    /// Whether the current player already moved or placed an obstacle
    acted_this_turn: bool,
}

impl GameState {
    /// Create a new game with both pieces on their starting squares and X to move
    pub fn new(player_names: [String; 2]) -> Self {
        let [name_x, name_o] = player_names;
        let players = [
            Player::new(PlayerId::X, name_x),
            Player::new(PlayerId::O, name_o),
        ];

        let mut board = Board::new();
        for player in &players {
            board.place_piece(player.position, player.id);
        }

        Self {
            board,
            players,
            current_player: PlayerId::X,
            phase: GamePhase::InProgress,
            turn_number: 1,
            acted_this_turn: false,
        }
    }

    /// Discard everything and start over with the same player names
    pub fn reset(&mut self) {
        let names = self.players.clone().map(|p| p.name);
        *self = Self::new(names);
        info!("New game started");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The player whose turn it is
    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Whether the current player already used this turn's action
    pub fn has_acted(&self) -> bool {
        self.acted_this_turn
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, GamePhase::Finished { .. })
    }

    /// Get the winner if the game is finished
    pub fn winner(&self) -> Option<PlayerId> {
        if let GamePhase::Finished { winner } = self.phase {
            Some(winner)
        } else {
            None
        }
    }

    /// Whether a player's piece stands on their objective
    pub fn check_win(&self, player: PlayerId) -> bool {
        self.player(player).has_reached_objective()
    }

    /// Opening message naming each player's start and objective
    pub fn welcome_message(&self) -> String {
        let [x, o] = &self.players;
        format!(
            "Welcome! Player {} starts at {} and heads for {}. Player {} starts at {} and heads for {}. Player {} moves first.",
            x.id, x.position, x.objective, o.id, o.position, o.objective, self.current_player
        )
    }

    fn ensure_can_act(&self) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if self.acted_this_turn {
            return Err(GameError::ActionAlreadyTaken);
        }
        Ok(())
    }

    /// Rule checks for a single step, in priority order
    fn check_move(&self, player: PlayerId, from: Coord, to: Coord) -> Result<(), GameError> {
        let target = self.board.get(to).ok_or(GameError::OffBoard)?;

        if target.is_obstacle() {
            return Err(GameError::Blocked);
        }

        if target == Cell::Piece(player.opponent()) {
            return Err(GameError::OccupiedByOpponent);
        }

        if !from.is_adjacent(&to) {
            return Err(GameError::NotAdjacent);
        }

        Ok(())
    }

    fn try_move(&mut self, from: Coord, to: Coord) -> Result<GameEvent, GameError> {
        self.ensure_can_act()?;

        let player = self.current_player;
        if !from.is_on_board() {
            return Err(GameError::InvalidCoordinate(from));
        }
        if self.board.get(from) != Some(Cell::Piece(player)) {
            return Err(GameError::NotYourPiece(from));
        }

        self.check_move(player, from, to)?;

        self.board.move_piece(from, to);
        self.player_mut(player).position = to;
        self.acted_this_turn = true;

        info!(%player, %from, %to, "Piece moved");

        if self.check_win(player) {
            self.phase = GamePhase::Finished { winner: player };
            info!(%player, "Game won");
        }

        Ok(GameEvent::PieceMoved { player, from, to })
    }

    /// Move the current player's piece from `from` to `to`.
    ///
    /// A move that lands on the mover's objective finishes the game.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> Result<GameEvent, GameError> {
        self.try_move(from, to).map_err(|e| {
            debug!(player = %self.current_player, %from, %to, reason = e.reason(), "Move rejected");
            e
        })
    }

    fn try_place_obstacle(&mut self, at: Coord) -> Result<GameEvent, GameError> {
        self.ensure_can_act()?;

        let cell = self
            .board
            .get(at)
            .ok_or(GameError::InvalidCoordinate(at))?;

        let player = self.current_player;
        if !self.player(player).can_place_obstacle() {
            return Err(GameError::NoObstaclesLeft);
        }

        if !cell.is_empty() {
            return Err(GameError::Occupied);
        }

        self.board.place_obstacle(at);
        self.player_mut(player).spend_obstacle();
        self.acted_this_turn = true;

        let remaining = self.player(player).obstacles_remaining;
        info!(%player, %at, remaining, "Obstacle placed");

        Ok(GameEvent::ObstaclePlaced {
            player,
            at,
            remaining,
        })
    }

    /// Spend one of the current player's obstacles on an empty square
    pub fn attempt_place_obstacle(&mut self, at: Coord) -> Result<GameEvent, GameError> {
        self.try_place_obstacle(at).map_err(|e| {
            debug!(player = %self.current_player, %at, reason = e.reason(), "Obstacle rejected");
            e
        })
    }

    /// Hand the turn to the other player and return who is up next
    pub fn advance_turn(&mut self) -> Result<PlayerId, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        self.current_player = self.current_player.opponent();
        self.acted_this_turn = false;
        self.turn_number += 1;

        debug!(player = %self.current_player, turn = self.turn_number, "Turn advanced");
        Ok(self.current_player)
    }

    /// Apply a full action for `player`: the move or placement itself,
    /// followed by either the win or the turn hand-over.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: GameAction,
    ) -> Result<Vec<GameEvent>, GameError> {
        // Check game not over
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }

        let mut events = vec![match action {
            GameAction::Move { from, to } => self.attempt_move(from, to)?,
            GameAction::PlaceObstacle(at) => self.attempt_place_obstacle(at)?,
        }];

        if let Some(winner) = self.winner() {
            events.push(GameEvent::GameWon {
                player: winner,
                at: self.player(winner).position,
            });
        } else {
            let next_player = self.advance_turn()?;
            events.push(GameEvent::TurnEnded {
                player,
                next_player,
            });
        }

        Ok(events)
    }

    /// Squares the piece on `from` could step to right now
    pub fn valid_moves(&self, from: Coord) -> Vec<Coord> {
        let owner = match self.board.get(from).and_then(|cell| cell.owner()) {
            Some(owner) => owner,
            None => return Vec::new(),
        };

        from.neighbors()
            .into_iter()
            .filter(|&to| self.check_move(owner, from, to).is_ok())
            .collect()
    }

    /// Get all currently valid actions for a player
    pub fn valid_actions(&self, player: PlayerId) -> Vec<GameAction> {
        if player != self.current_player || self.ensure_can_act().is_err() {
            return Vec::new();
        }

        let from = self.player(player).position;
        let mut actions: Vec<GameAction> = self
            .valid_moves(from)
            .into_iter()
            .map(|to| GameAction::Move { from, to })
            .collect();

        if self.player(player).can_place_obstacle() {
            actions.extend(
                self.board
                    .iter()
                    .filter(|(_, cell)| cell.is_empty())
                    .map(|(coord, _)| GameAction::PlaceObstacle(coord)),
            );
        }

        actions
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(["X".to_string(), "O".to_string()])
    }
}
