//! Board coordinates and their human-readable labels.
//!
//! A label is a row letter `A`-`J` (any case) followed by a column number
//! `1`-`10`, e.g. `"A1"`, `"j10"`. Internally rows and columns are zero-based.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::common::CoordError;
use crate::config::{BOARD_SIZE, ROW_LABELS};

/// A validated cell position; always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Build a coordinate from zero-based indices, `None` when off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE as usize && col < BOARD_SIZE as usize {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Top-left and bottom-right corners of the rectangle spanned by `a` and `b`.
    pub fn corners(a: Coord, b: Coord) -> (Coord, Coord) {
        (
            Coord {
                row: a.row.min(b.row),
                col: a.col.min(b.col),
            },
            Coord {
                row: a.row.max(b.row),
                col: a.col.max(b.col),
            },
        )
    }

    /// Decode a label such as `"B7"` into a coordinate.
    pub fn parse(label: &str) -> Result<Self, CoordError> {
        let mut chars = label.chars();
        let first = chars.next().ok_or(CoordError::Empty)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(CoordError::TooShort);
        }
        let letter = first.to_ascii_uppercase();
        let row = ROW_LABELS
            .iter()
            .position(|&l| l == letter)
            .ok_or(CoordError::BadRow(first))?;
        let number: usize = rest
            .parse()
            .map_err(|_| CoordError::BadColumn(rest.to_string()))?;
        if number == 0 || number > BOARD_SIZE as usize {
            return Err(CoordError::OutOfRange(number));
        }
        Ok(Self {
            row,
            col: number - 1,
        })
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s)
    }
}

/// Canonical label: upper-case row letter, one-based column.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LABELS[self.row], self.col + 1)
    }
}
