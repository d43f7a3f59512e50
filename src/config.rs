//! Fixed rules of the game: board dimensions and fleet composition.

/// Boards are square, `GRID_SIZE` cells on each axis.
pub const GRID_SIZE: usize = 5;

/// Number of ships in every player's fleet.
pub const NUM_SHIPS: usize = 4;

/// Fleet composition in placement order: one ship of each length.
pub const FLEET_LENGTHS: [usize; NUM_SHIPS] = [1, 2, 3, 4];

/// Total ship cells on a fully set-up grid (1 + 2 + 3 + 4). A grid whose
/// hit counter reaches this value has lost.
pub const TOTAL_SHIP_CELLS: usize = 10;
