use log::{debug, error};

use crate::board::{Board, Cell};
use crate::common::{BoardError, GameError, ShotResult};
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::placement::validate_placement;
use crate::ship::{Segment, ShipType};

/// Board and fleet owned by one player.
///
/// Placement mutates it during that player's setup; afterwards only the
/// opponent's shots do, through [`PlayerState::receive_shot`].
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    board: Board,
    fleet: Fleet,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            fleet: Fleet::new(),
        }
    }

    /// Assemble a state from an existing board and fleet.
    pub fn from_parts(board: Board, fleet: Fleet) -> Self {
        Self { board, fleet }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Validate and commit `ship` between `a` and `b`.
    ///
    /// A refused placement leaves board and fleet untouched.
    pub fn place_ship(&mut self, ship: ShipType, a: Coord, b: Coord) -> Result<Segment, GameError> {
        if self.fleet.get(ship.name()).is_some() {
            return Err(BoardError::ShipAlreadyPlaced(ship.name()).into());
        }
        let segment = validate_placement(&self.board, a, b, ship)?;
        self.board.occupy(&segment)?;
        self.fleet.register(ship, segment.cells())?;
        debug!(
            "placed {} from {} to {} ({} ship cells on the board)",
            ship.name(),
            segment.start(),
            segment.end(),
            self.board.ship_map().count_ones()
        );
        Ok(segment)
    }

    /// Resolve an opponent's shot at `at`.
    ///
    /// Repeat shots report the existing mark and change nothing. Errors
    /// are returned before any mutation.
    pub fn receive_shot(&mut self, at: Coord) -> Result<ShotResult, BoardError> {
        let cell = self.board.cell(at).map_err(|e| {
            error!("{}", e);
            e
        })?;
        let result = match cell {
            Cell::Empty => {
                self.board.mark_miss(at)?;
                ShotResult::Miss
            }
            Cell::ShipPresent => {
                if self.fleet.owner_of(at).is_none() {
                    error!("ship cell {} has no owner in the fleet", at);
                    return Err(BoardError::UnknownShipHit(at));
                }
                self.board.mark_hit(at)?;
                match self.fleet.record_hit(at) {
                    Some(report) if report.sunk && self.fleet.is_defeated() => {
                        ShotResult::Win(report.ship.name())
                    }
                    Some(report) if report.sunk => ShotResult::Sink(report.ship.name()),
                    _ => ShotResult::Hit,
                }
            }
            Cell::Hit => ShotResult::AlreadyHit,
            Cell::Miss => ShotResult::AlreadyMissed,
        };
        debug!("shot at {} -> {:?}", at, result);
        Ok(result)
    }

    /// True once every ship cell has been hit.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_defeated()
    }
}
