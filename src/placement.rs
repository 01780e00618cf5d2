//! Ship placement rules.
//!
//! A proposed ship is checked against three rules, in order, and the first
//! failure is reported:
//!
//! 1. the endpoints share a row or a column,
//! 2. the span along that axis equals the ship's length,
//! 3. no cell within one step of the segment (diagonals included) already
//!    holds a ship.
//!
//! Validation never touches the board; committing an accepted segment is
//! done by [`PlayerState::place_ship`](crate::PlayerState::place_ship).

use crate::board::Board;
use crate::common::PlacementError;
use crate::coord::Coord;
use crate::ship::{Segment, ShipType};

/// Check the segment between `a` and `b` (either order) for `ship`.
pub fn validate_placement(
    board: &Board,
    a: Coord,
    b: Coord,
    ship: ShipType,
) -> Result<Segment, PlacementError> {
    let segment = Segment::new(a, b);
    check_segment(board, &segment, ship)?;
    Ok(segment)
}

/// Apply the placement rules to an already normalised segment.
pub fn check_segment(board: &Board, segment: &Segment, ship: ShipType) -> Result<(), PlacementError> {
    if segment.orientation().is_none() {
        return Err(PlacementError::WrongOrientation);
    }
    if segment.span() != ship.length() {
        return Err(PlacementError::WrongLength {
            ship: ship.name(),
            expected: ship.length(),
        });
    }
    let halo = segment.mask()?.neighbourhood();
    if halo.intersects(&board.ship_map()) {
        return Err(PlacementError::TooClose);
    }
    Ok(())
}
