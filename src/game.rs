//! Turn engine: setup for both players, then alternating shots until one
//! fleet is gone.
//!
//! ```text
//! Setup(One) -> Setup(Two) -> Shooting(One) <-> Shooting(Two) -> GameOver
//! ```
//!
//! Each player places the standard fleet in order. While shooting, a miss or
//! a plain hit hands the move over; sinking a ship keeps it with the
//! shooter; repeat shots and errors change nothing.

use core::fmt;
use log::info;

use crate::common::{GameError, ShotResult};
use crate::config::{NUM_SHIPS, SHIPS};
use crate::coord::Coord;
use crate::player::PlayerState;
use crate::ship::{Segment, ShipType};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Current stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Player is placing ships.
    Setup(PlayerId),
    /// Player is firing at the opponent.
    Shooting(PlayerId),
    GameOver { winner: PlayerId },
}

/// An accepted ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: PlayerId,
    pub ship: ShipType,
    pub segment: Segment,
    /// This was the player's last ship.
    pub fleet_complete: bool,
}

/// Core game logic holding both players' boards and the phase.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: [PlayerState; 2],
    phase: Phase,
    next_ship: usize,
    shots: [usize; 2],
}

impl GameEngine {
    /// Fresh game: empty boards, Player 1 to place the first ship.
    pub fn new() -> Self {
        Self {
            players: [PlayerState::new(), PlayerState::new()],
            phase: Phase::Setup(PlayerId::One),
            next_ship: 0,
            shots: [0; 2],
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Ship waiting to be placed, if in setup.
    pub fn current_ship(&self) -> Option<ShipType> {
        match self.phase {
            Phase::Setup(_) => SHIPS.get(self.next_ship).copied(),
            _ => None,
        }
    }

    /// Player whose turn it is to shoot, if shooting.
    pub fn shooter(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Shooting(id) => Some(id),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Shots that changed the opponent's board, repeats excluded.
    pub fn shots_fired(&self, id: PlayerId) -> usize {
        self.shots[id.index()]
    }

    /// Place the current ship for the player in setup, endpoints in any order.
    ///
    /// On rejection nothing changes and the same ship is still pending.
    pub fn place_ship(&mut self, a: Coord, b: Coord) -> Result<Placement, GameError> {
        let Phase::Setup(id) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let ship = SHIPS.get(self.next_ship).copied().ok_or(GameError::WrongPhase)?;
        let segment = self.players[id.index()].place_ship(ship, a, b)?;
        self.next_ship += 1;
        let fleet_complete = self.next_ship == NUM_SHIPS;
        if fleet_complete {
            self.next_ship = 0;
            self.phase = match id {
                PlayerId::One => Phase::Setup(PlayerId::Two),
                PlayerId::Two => Phase::Shooting(PlayerId::One),
            };
            info!("{} finished placing ships", id);
            if let Phase::Shooting(_) = self.phase {
                info!("shooting phase starts");
            }
        }
        Ok(Placement {
            player: id,
            ship,
            segment,
            fleet_complete,
        })
    }

    /// Fire the current shooter's shot at `target` on the opponent's board.
    pub fn fire(&mut self, target: Coord) -> Result<ShotResult, GameError> {
        let Phase::Shooting(id) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let opponent = id.opponent();
        let result = self.players[opponent.index()].receive_shot(target)?;
        if result.is_fresh() {
            self.shots[id.index()] += 1;
        }
        if self.players[opponent.index()].is_defeated() {
            self.phase = Phase::GameOver { winner: id };
            info!(
                "game over: {} wins after {} shots",
                id,
                self.shots[id.index()]
            );
        } else if result.passes_turn() {
            self.phase = Phase::Shooting(opponent);
        }
        Ok(result)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
