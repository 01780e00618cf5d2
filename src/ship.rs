//! Ship definitions and the straight segments they occupy.

use alloc::vec::Vec;

use crate::bitboard::BitBoardError;
use crate::board::BB;
use crate::coord::Coord;

/// Orientation of a straight run of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Rectangle spanned by two cells, with `start <= end` on both axes.
///
/// Only a segment whose endpoints share a row or a column describes a ship;
/// see [`Segment::orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: Coord,
    end: Coord,
}

impl Segment {
    /// Span the two endpoints in either order.
    pub fn new(a: Coord, b: Coord) -> Self {
        let (start, end) = Coord::corners(a, b);
        Segment { start, end }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    /// `None` when the endpoints differ in both row and column.
    /// A single cell counts as horizontal.
    pub fn orientation(&self) -> Option<Orientation> {
        if self.start.row() == self.end.row() {
            Some(Orientation::Horizontal)
        } else if self.start.col() == self.end.col() {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }

    /// Number of cells along the varying axis.
    pub fn span(&self) -> usize {
        let rows = self.end.row() - self.start.row() + 1;
        let cols = self.end.col() - self.start.col() + 1;
        rows.max(cols)
    }

    /// Cells covered, from `start` to `end`.
    pub fn cells(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.span());
        for r in self.start.row()..=self.end.row() {
            for c in self.start.col()..=self.end.col() {
                if let Some(coord) = Coord::new(r, c) {
                    out.push(coord);
                }
            }
        }
        out
    }

    /// Occupancy mask of the covered cells.
    pub fn mask(&self) -> Result<BB, BitBoardError> {
        BB::from_cells(self.cells().iter().map(|c| (c.row(), c.col())))
    }
}
