//! Common types for the game: error enums and shot results.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::coord::Coord;

/// Outcome of a shot fired at a player's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its name. The shooter fires again.
    Sink(&'static str),
    /// Shot sank the last ship afloat, carrying its name.
    Win(&'static str),
    /// Cell was already hit; nothing changed.
    AlreadyHit,
    /// Cell was already a miss; nothing changed.
    AlreadyMissed,
}

impl ShotResult {
    /// Whether this outcome hands the move to the other player.
    pub fn passes_turn(&self) -> bool {
        matches!(self, ShotResult::Miss | ShotResult::Hit)
    }

    /// Whether the board was changed by the shot.
    pub fn is_fresh(&self) -> bool {
        !matches!(self, ShotResult::AlreadyHit | ShotResult::AlreadyMissed)
    }
}

/// Errors produced while decoding a coordinate label such as `"B7"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Nothing was entered.
    Empty,
    /// Fewer than two characters.
    TooShort,
    /// Leading character is not a row letter A-J.
    BadRow(char),
    /// Trailing part is not a number.
    BadColumn(String),
    /// Column number outside 1-10.
    OutOfRange(usize),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::Empty => write!(f, "no coordinate entered"),
            CoordError::TooShort => write!(f, "coordinate needs a row letter and a column number"),
            CoordError::BadRow(ch) => write!(f, "row '{}' must be a letter A-J", ch),
            CoordError::BadColumn(s) => write!(f, "column '{}' must be a number 1-10", s),
            CoordError::OutOfRange(n) => write!(f, "column {} out of bounds, must be 1-10", n),
        }
    }
}

/// Reasons a proposed ship segment is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Endpoints share neither a row nor a column.
    WrongOrientation,
    /// Straight segment whose span differs from the ship's length.
    WrongLength { ship: &'static str, expected: usize },
    /// Segment touches another ship, diagonals included.
    TooClose,
    /// A covered cell falls outside the grid.
    OffGrid,
}

impl From<BitBoardError> for PlacementError {
    fn from(_: BitBoardError) -> Self {
        PlacementError::OffGrid
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongOrientation | PlacementError::OffGrid => {
                write!(f, "Wrong ship location!")
            }
            PlacementError::WrongLength { ship, .. } => write!(f, "Wrong length of the {}!", ship),
            PlacementError::TooClose => write!(f, "You placed it too close to another one."),
        }
    }
}

/// Errors returned by board and fleet operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (index outside the grid).
    BitBoard(BitBoardError),
    /// Cell carries a combination of marks no legal move produces.
    CorruptCell(Coord),
    /// Ship cell with no owner in the fleet.
    UnknownShipHit(Coord),
    /// A ship with this name is already registered.
    ShipAlreadyPlaced(&'static str),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::CorruptCell(c) => write!(f, "Unexpected value in the board at {}", c),
            BoardError::UnknownShipHit(c) => write!(f, "No ship in the fleet occupies {}", c),
            BoardError::ShipAlreadyPlaced(name) => write!(f, "{} is already placed", name),
        }
    }
}

/// Errors surfaced by the turn engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Operation does not belong to the current phase.
    WrongPhase,
    Placement(PlacementError),
    Board(BoardError),
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase => write!(f, "Operation not allowed in the current phase"),
            GameError::Placement(e) => write!(f, "{}", e),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
