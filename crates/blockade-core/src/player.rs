//! Player state: where each piece stands, where it is headed, and how many
//! obstacles it may still place.

use crate::board::PlayerId;
use crate::coord::Coord;
use serde::{Deserialize, Serialize};

/// Obstacles each player may place over a whole game
pub const STARTING_OBSTACLES: u32 = 3;

/// Starting square of X (A5)
pub const X_START: Coord = Coord::new(0, 4);

/// Starting square of O (I5)
pub const O_START: Coord = Coord::new(8, 4);

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Current square of the piece (mirrors the board)
    pub position: Coord,
    /// Square the piece must reach to win: the opponent's starting square
    pub objective: Coord,
    /// Obstacles still available to place
    pub obstacles_remaining: u32,
}

impl Player {
    /// Create a player on its starting square
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            position: Self::start_for(id),
            objective: Self::start_for(id.opponent()),
            obstacles_remaining: STARTING_OBSTACLES,
        }
    }

    /// Fixed starting square for a player
    pub const fn start_for(id: PlayerId) -> Coord {
        match id {
            PlayerId::X => X_START,
            PlayerId::O => O_START,
        }
    }

    /// Whether the piece stands on its objective
    pub fn has_reached_objective(&self) -> bool {
        self.position == self.objective
    }

    /// Whether any obstacles are left
    pub fn can_place_obstacle(&self) -> bool {
        self.obstacles_remaining > 0
    }

    /// Use up one obstacle. Returns false, changing nothing, when none are left.
    pub fn spend_obstacle(&mut self) -> bool {
        if !self.can_place_obstacle() {
            return false;
        }
        self.obstacles_remaining -= 1;
        true
    }

    /// Obstacles placed so far this game
    pub fn obstacles_placed(&self) -> u32 {
        STARTING_OBSTACLES - self.obstacles_remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_positions() {
        let x = Player::new(PlayerId::X, "Alice".to_string());
        assert_eq!(x.position, Coord::new(0, 4));
        assert_eq!(x.objective, Coord::new(8, 4));

        let o = Player::new(PlayerId::O, "Bob".to_string());
        assert_eq!(o.position, Coord::new(8, 4));
        assert_eq!(o.objective, Coord::new(0, 4));
    }

    #[test]
    fn test_not_at_objective_initially() {
        for id in PlayerId::ALL {
            assert!(!Player::new(id, id.to_string()).has_reached_objective());
        }
    }

    #[test]
    fn test_spend_obstacles_floor_at_zero() {
        let mut player = Player::new(PlayerId::X, "X".to_string());
        assert!(player.spend_obstacle());
        assert!(player.spend_obstacle());
        assert!(player.spend_obstacle());
        assert_eq!(player.obstacles_remaining, 0);
        assert_eq!(player.obstacles_placed(), 3);

        assert!(!player.spend_obstacle());
        assert_eq!(player.obstacles_remaining, 0);
    }
}
