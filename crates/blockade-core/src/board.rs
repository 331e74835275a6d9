//! Board representation: the 9x9 grid and what stands on each square.
//!
//! This module contains:
//! - Player identifiers (X moves first, O second)
//! - Cell contents (empty, a piece, or an obstacle)
//! - The board grid with query and mutation helpers
//! - A JSON-friendly snapshot for presentation layers

use crate::coord::{Coord, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Identity of one of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// Player 1, starts on row A and moves first
    X,
    /// Player 2, starts on row I
    O,
}

impl PlayerId {
    /// Both players in turn order
    pub const ALL: [PlayerId; 2] = [PlayerId::X, PlayerId::O];

    /// The other player
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::X => PlayerId::O,
            PlayerId::O => PlayerId::X,
        }
    }

    /// Symbol drawn on the board for this player's piece
    pub const fn symbol(self) -> char {
        match self {
            PlayerId::X => 'X',
            PlayerId::O => 'O',
        }
    }

    /// Index into per-player arrays (X = 0, O = 1)
    pub const fn index(self) -> usize {
        match self {
            PlayerId::X => 0,
            PlayerId::O => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What occupies a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PlayerId),
    Obstacle,
}

impl Cell {
    /// Owner of the piece on this square, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Cell::Piece(player) => Some(*player),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    /// Single-character rendering: `' '`, `'X'`, `'O'` or `'#'`
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Piece(player) => player.symbol(),
            Cell::Obstacle => '#',
        }
    }
}

/// The 9x9 grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Content of a square, or `None` if it lies off the board
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if !coord.is_on_board() {
            return None;
        }
        Some(self.cells[coord.row as usize][coord.col as usize])
    }

    /// Whether a square is on the board and empty
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|cell| cell.is_empty())
    }

    /// Overwrite a square. Callers guarantee the square is on the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(coord.is_on_board(), "set called with off-board {:?}", coord);
        self.cells[coord.row as usize][coord.col as usize] = cell;
    }

    /// Put a player's piece on a square
    pub(crate) fn place_piece(&mut self, coord: Coord, player: PlayerId) {
        self.set(coord, Cell::Piece(player));
    }

    /// Move whatever piece stands on `from` to `to`, leaving `from` empty
    pub(crate) fn move_piece(&mut self, from: Coord, to: Coord) {
        let cell = self.cells[from.row as usize][from.col as usize];
        self.set(from, Cell::Empty);
        self.set(to, cell);
    }

    /// Drop an obstacle on a square
    pub(crate) fn place_obstacle(&mut self, coord: Coord) {
        self.set(coord, Cell::Obstacle);
    }

    /// Iterate over every square and its content in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.cells[coord.row as usize][coord.col as usize]))
    }

    /// Where a player's piece stands
    pub fn find_piece(&self, player: PlayerId) -> Option<Coord> {
        self.iter()
            .find(|(_, cell)| cell.owner() == Some(player))
            .map(|(coord, _)| coord)
    }

    /// Number of squares holding a piece
    pub fn piece_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.owner().is_some()).count()
    }

    /// Number of squares holding an obstacle
    pub fn obstacle_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_obstacle()).count()
    }

    /// Rows as strings of cell symbols, top row first
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::symbol).collect())
            .collect()
    }

    /// Convert to a JSON-friendly representation listing only occupied squares
    pub fn to_json_friendly(&self) -> BoardJson {
        BoardJson {
            size: BOARD_SIZE,
            rows: self.rows(),
            occupied: self
                .iter()
                .filter(|(_, cell)| !cell.is_empty())
                .map(|(coord, cell)| CellJson {
                    row: coord.row,
                    col: coord.col,
                    label: coord.to_label(),
                    content: cell,
                })
                .collect(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON-friendly board snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardJson {
    pub size: i32,
    pub rows: Vec<String>,
    pub occupied: Vec<CellJson>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellJson {
    pub row: i32,
    pub col: i32,
    pub label: String,
    pub content: Cell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.iter().count(), 81);
        assert!(board.iter().all(|(_, cell)| cell.is_empty()));
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.obstacle_count(), 0);
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(Coord::new(-1, 0)), None);
        assert_eq!(board.get(Coord::new(0, 9)), None);
        assert_eq!(board.get(Coord::new(8, 8)), Some(Cell::Empty));
        assert!(!board.is_empty_at(Coord::new(9, 9)));
    }

    #[test]
    fn test_move_piece() {
        let mut board = Board::new();
        board.place_piece(Coord::new(0, 4), PlayerId::X);
        board.move_piece(Coord::new(0, 4), Coord::new(1, 4));

        assert_eq!(board.get(Coord::new(0, 4)), Some(Cell::Empty));
        assert_eq!(board.get(Coord::new(1, 4)), Some(Cell::Piece(PlayerId::X)));
        assert_eq!(board.find_piece(PlayerId::X), Some(Coord::new(1, 4)));
        assert_eq!(board.find_piece(PlayerId::O), None);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_rows_and_json() {
        let mut board = Board::new();
        board.place_piece(Coord::new(0, 4), PlayerId::X);
        board.place_piece(Coord::new(8, 4), PlayerId::O);
        board.place_obstacle(Coord::new(4, 0));

        let rows = board.rows();
        assert_eq!(rows[0], "    X    ");
        assert_eq!(rows[4], "#        ");
        assert_eq!(rows[8], "    O    ");

        let json = board.to_json_friendly();
        assert_eq!(json.size, 9);
        let labels: Vec<&str> = json.occupied.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["A5", "E9", "I5"]);
        assert_eq!(json.occupied[1].content, Cell::Obstacle);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(PlayerId::X.opponent(), PlayerId::O);
        assert_eq!(PlayerId::O.opponent(), PlayerId::X);
        assert_eq!(PlayerId::X.to_string(), "X");
        assert_eq!(Cell::Piece(PlayerId::O).symbol(), 'O');
        assert_eq!(Cell::Obstacle.symbol(), '#');
    }
}
