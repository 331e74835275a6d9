//! Square coordinates on the 9x9 board.
//!
//! Squares have two interchangeable names:
//! - grid indices `(row, col)`, each in `0..9`
//! - a two-character label: a row letter `A`-`I` (A = row 0) followed by a
//!   column digit, where the digit axis runs backwards (`'9'` is column 0,
//!   `'1'` is column 8)
//!
//! Row and column are signed so a move target that falls off the edge is still
//! representable and can be rejected as such.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rows and columns on the board
pub const BOARD_SIZE: i32 = 9;

const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Errors produced when converting labels or indices
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CoordError {
    #[error("Square label must be exactly two characters, got {0:?}")]
    BadLength(String),

    #[error("Unknown row letter {0:?} (expected A-I)")]
    BadRow(char),

    #[error("Unknown column digit {0:?} (expected 1-9)")]
    BadColumn(char),

    #[error("Square ({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },
}

/// A square on the board, addressed by grid indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top (label letter A)
    pub row: i32,
    /// Column index, 0 at the left (label digit 9)
    pub col: i32,
}

impl Coord {
    /// Create a coordinate without checking bounds
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether both indices fall inside the board
    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Fail with `CoordError::OffBoard` unless the square is on the board
    pub fn validate(self) -> Result<Self, CoordError> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(CoordError::OffBoard {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Manhattan distance to another square
    pub fn manhattan_distance(&self, other: &Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one orthogonal step away
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four orthogonal neighbours (up, down, left, right), on the board or not
    pub fn neighbors(&self) -> [Coord; 4] {
        [
            Coord::new(self.row - 1, self.col),
            Coord::new(self.row + 1, self.col),
            Coord::new(self.row, self.col - 1),
            Coord::new(self.row, self.col + 1),
        ]
    }

    /// Every square of the board in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Human label such as `"A5"`, or `None` for an off-board square
    pub fn label(&self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let letter = ROW_LETTERS[self.row as usize];
        let digit = char::from(b'1' + (BOARD_SIZE - 1 - self.col) as u8);
        Some(format!("{}{}", letter, digit))
    }

    /// Human label, falling back to `"(row,col)"` for off-board squares
    pub fn to_label(&self) -> String {
        self.label()
            .unwrap_or_else(|| format!("({},{})", self.row, self.col))
    }

    /// Parse a label such as `"E5"` (row letter is case-insensitive)
    pub fn from_label(label: &str) -> Result<Self, CoordError> {
        let mut chars = label.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter, digit),
            _ => return Err(CoordError::BadLength(label.to_string())),
        };

        let upper = letter.to_ascii_uppercase();
        let row = ROW_LETTERS
            .iter()
            .position(|&l| l == upper)
            .ok_or(CoordError::BadRow(letter))? as i32;

        let col = match digit.to_digit(10) {
            Some(d @ 1..=9) => BOARD_SIZE - d as i32,
            _ => return Err(CoordError::BadColumn(digit)),
        };

        Ok(Coord::new(row, col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_label())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::from_label(s.trim())
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}
