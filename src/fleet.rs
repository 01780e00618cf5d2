//! Fleet tracking: which cells of each ship are still unhit.
//!
//! A hit removes the cell from its ship's remaining list; a ship whose list
//! is empty is sunk, and a fleet with no remaining cells at all is beaten.

use alloc::vec::Vec;

use crate::common::BoardError;
use crate::coord::Coord;
use crate::ship::ShipType;

/// One registered ship and the cells not yet hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetEntry {
    ship: ShipType,
    cells: Vec<Coord>,
    remaining: Vec<Coord>,
}

impl FleetEntry {
    pub fn ship(&self) -> ShipType {
        self.ship
    }

    /// Every cell the ship occupies, in placement order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cells not yet hit.
    pub fn remaining(&self) -> &[Coord] {
        &self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// What a hit did to the ship that owned the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitReport {
    pub ship: ShipType,
    pub sunk: bool,
}

/// Ships of one player, keyed by name, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register a ship with the cells it occupies. Names are unique.
    pub fn register(&mut self, ship: ShipType, cells: Vec<Coord>) -> Result<(), BoardError> {
        if self.get(ship.name()).is_some() {
            return Err(BoardError::ShipAlreadyPlaced(ship.name()));
        }
        self.entries.push(FleetEntry {
            ship,
            remaining: cells.clone(),
            cells,
        });
        Ok(())
    }

    /// Entry for the ship called `name`.
    pub fn get(&self, name: &str) -> Option<&FleetEntry> {
        self.entries.iter().find(|e| e.ship.name() == name)
    }

    /// Unhit cells of the ship called `name`.
    pub fn remaining(&self, name: &str) -> Option<&[Coord]> {
        self.get(name).map(FleetEntry::remaining)
    }

    /// Ship still holding `at` among its unhit cells.
    pub fn owner_of(&self, at: Coord) -> Option<&FleetEntry> {
        self.entries.iter().find(|e| e.remaining.contains(&at))
    }

    /// Remove `at` from its owner's remaining cells.
    ///
    /// Returns `None` when no ship holds the cell unhit.
    pub fn record_hit(&mut self, at: Coord) -> Option<HitReport> {
        let entry = self.entries.iter_mut().find(|e| e.remaining.contains(&at))?;
        entry.remaining.retain(|&c| c != at);
        Some(HitReport {
            ship: entry.ship,
            sunk: entry.remaining.is_empty(),
        })
    }

    /// True once no ship has an unhit cell left.
    pub fn is_defeated(&self) -> bool {
        self.entries.iter().all(FleetEntry::is_sunk)
    }

    /// Number of ships with at least one unhit cell.
    pub fn ships_afloat(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_sunk()).count()
    }

    /// Unhit cells across the whole fleet.
    pub fn cells_remaining(&self) -> usize {
        self.entries.iter().map(|e| e.remaining.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FleetEntry> {
        self.entries.iter()
    }
}
