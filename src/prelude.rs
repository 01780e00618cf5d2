//! Commonly used types for ease of import.

pub use crate::{Coord, GameEngine, Phase, PlayerId, ShotResult, SHIPS};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console};
