#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
mod player;
pub mod prelude;
mod ship;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::Console;
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use fleet::{Fleet, FleetEntry, HitReport};
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{env_level, init_logging, LOG_ENV};
pub use placement::validate_placement;
pub use player::PlayerState;
pub use ship::*;
