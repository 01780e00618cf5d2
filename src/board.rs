//! Game board state: ship occupancy plus hit and miss marks.
//!
//! The board is one canonical grid per player. The opponent's picture of it
//! (the fog view) is computed at render time by [`BoardView`] instead of
//! being stored separately.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, HIT_GLYPH, MISS_GLYPH, ROW_LABELS, SHIP_GLYPH, WATER_GLYPH};
use crate::coord::Coord;
use crate::ship::Segment;

/// Bitboard type covering the whole grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    ShipPresent,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used in the owner's view.
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => WATER_GLYPH,
            Cell::ShipPresent => SHIP_GLYPH,
            Cell::Hit => HIT_GLYPH,
            Cell::Miss => MISS_GLYPH,
        }
    }

    /// Glyph used in the opponent's view; intact ship cells look like water.
    pub fn fog_glyph(&self) -> char {
        match self {
            Cell::ShipPresent => WATER_GLYPH,
            other => other.glyph(),
        }
    }
}

/// Plain-data snapshot of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub ship_map: BB,
    pub hits: BB,
    pub misses: BB,
}

/// Ship placements, hits and misses for one player.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// Create an empty board (all water, no shots).
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            ship_map: empty,
            hits: empty,
            misses: empty,
        }
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Derive the state of the cell at `at`.
    ///
    /// A hit is only legal on a ship cell and a miss only on water; any
    /// other combination of marks is reported as `CorruptCell`.
    pub fn cell(&self, at: Coord) -> Result<Cell, BoardError> {
        let (r, c) = (at.row(), at.col());
        let ship = self.ship_map.get(r, c)?;
        let hit = self.hits.get(r, c)?;
        let miss = self.misses.get(r, c)?;
        match (ship, hit, miss) {
            (false, false, false) => Ok(Cell::Empty),
            (true, false, false) => Ok(Cell::ShipPresent),
            (true, true, false) => Ok(Cell::Hit),
            (false, false, true) => Ok(Cell::Miss),
            _ => Err(BoardError::CorruptCell(at)),
        }
    }

    /// Mark every cell of `segment` as holding a ship.
    pub fn occupy(&mut self, segment: &Segment) -> Result<(), BoardError> {
        self.ship_map = self.ship_map | segment.mask()?;
        Ok(())
    }

    /// Record a hit on a ship cell.
    pub fn mark_hit(&mut self, at: Coord) -> Result<(), BoardError> {
        self.hits.set(at.row(), at.col())?;
        Ok(())
    }

    /// Record a miss on a water cell.
    pub fn mark_miss(&mut self, at: Coord) -> Result<(), BoardError> {
        self.misses.set(at.row(), at.col())?;
        Ok(())
    }

    /// Owner's view: ships visible.
    pub fn own_view(&self) -> BoardView<'_> {
        BoardView {
            board: self,
            fog: false,
        }
    }

    /// Opponent's view: only hits and misses visible.
    pub fn fog_view(&self) -> BoardView<'_> {
        BoardView {
            board: self,
            fog: true,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ship_map, self.hits, self.misses
        )
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            ship_map: b.ship_map,
            hits: b.hits,
            misses: b.misses,
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board {
            ship_map: state.ship_map,
            hits: state.hits,
            misses: state.misses,
        }
    }
}

/// Text rendering of a board: a header of column numbers and one line per
/// row letter, each line newline-terminated.
pub struct BoardView<'a> {
    board: &'a Board,
    fog: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 1..=BOARD_SIZE as usize {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (r, label) in ROW_LABELS.iter().enumerate() {
            write!(f, "{}", label)?;
            for c in 0..BOARD_SIZE as usize {
                let glyph = match Coord::new(r, c).map(|at| self.board.cell(at)) {
                    Some(Ok(cell)) if self.fog => cell.fog_glyph(),
                    Some(Ok(cell)) => cell.glyph(),
                    _ => '?',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
