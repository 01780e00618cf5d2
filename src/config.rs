use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Aircraft Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Row labels, top to bottom.
pub const ROW_LABELS: [char; BOARD_SIZE as usize] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

pub const WATER_GLYPH: char = '~';
pub const SHIP_GLYPH: char = 'O';
pub const HIT_GLYPH: char = 'X';
pub const MISS_GLYPH: char = 'M';

/// Blank lines printed to hide the board when the move passes.
pub const CLEAR_LINES: usize = 50;

/// Look up a ship of the standard fleet by name.
pub fn ship_type(name: &str) -> Option<ShipType> {
    SHIPS.iter().copied().find(|def| def.name() == name)
}
