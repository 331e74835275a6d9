//! Game actions that players can take.
//!
//! This module defines both possible actions in the game and the events
//! that result from them.

use crate::board::PlayerId;
use crate::coord::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All possible actions a player can take on their turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Step the player's piece one square orthogonally
    Move { from: Coord, to: Coord },
    /// Spend one obstacle from the budget on an empty square
    PlaceObstacle(Coord),
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece moved one square
    PieceMoved {
        player: PlayerId,
        from: Coord,
        to: Coord,
    },

    /// An obstacle was placed
    ObstaclePlaced {
        player: PlayerId,
        at: Coord,
        remaining: u32,
    },

    /// Turn passed to the other player
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A player reached their objective
    GameWon { player: PlayerId, at: Coord },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PieceMoved { player, from, to } => {
                write!(f, "Player {} moved from {} to {}.", player, from, to)
            }
            GameEvent::ObstaclePlaced {
                player,
                at,
                remaining,
            } => write!(
                f,
                "Player {} placed an obstacle at {} ({} left).",
                player, at, remaining
            ),
            GameEvent::TurnEnded { next_player, .. } => {
                write!(f, "It is player {}'s turn.", next_player)
            }
            GameEvent::GameWon { player, at } => {
                write!(f, "Player {} reached {} and wins the game!", player, at)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_messages_use_labels() {
        let moved = GameEvent::PieceMoved {
            player: PlayerId::X,
            from: Coord::new(0, 4),
            to: Coord::new(1, 4),
        };
        assert_eq!(moved.to_string(), "Player X moved from A5 to B5.");

        let placed = GameEvent::ObstaclePlaced {
            player: PlayerId::O,
            at: Coord::new(2, 8),
            remaining: 2,
        };
        assert_eq!(placed.to_string(), "Player O placed an obstacle at C1 (2 left).");
    }

    #[test]
    fn test_action_json_shape() {
        let action = GameAction::PlaceObstacle(Coord::new(3, 3));
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"PlaceObstacle":{"row":3,"col":3}}"#);
        let back: GameAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
