//! Blockade - a two-player race across a 9x9 board
//!
//! Each player owns one piece and wins by reaching the opponent's starting
//! square. On every turn a player either steps one square orthogonally or
//! spends one of three obstacles to block a square.
//!
//! This crate provides the core game logic:
//! - Square coordinates and the letter/digit label scheme
//! - Board representation with pieces and obstacles
//! - Player state and obstacle budgets
//! - Game state machine with full rule enforcement
//!
//! # Architecture
//!
//! The engine is pure and synchronous and knows nothing about input or
//! rendering. Presentation layers keep their own selection state and call
//! into [`GameState`] with fully formed moves. It can be compiled to:
//! - Native Rust for terminal front ends
//! - WebAssembly for browser front ends (`wasm` feature)
//!
//! # Modules
//!
//! - [`coord`]: Square coordinates and label conversion
//! - [`board`]: Board cells and snapshots
//! - [`player`]: Player positions, objectives and obstacle budgets
//! - [`actions`]: Actions and the events they produce
//! - [`game`]: Game state machine

pub mod actions;
pub mod board;
pub mod coord;
pub mod game;
pub mod player;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardJson, Cell, CellJson, PlayerId};
pub use coord::{Coord, CoordError, BOARD_SIZE};
pub use game::{GameError, GamePhase, GameState};
pub use player::{Player, STARTING_OBSTACLES};
