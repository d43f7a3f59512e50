//! One player's board: ship layout, click-driven placement and shot marks.

use alloc::vec::Vec;

use crate::common::Coord;
use crate::config::{FLEET_LENGTHS, GRID_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS};
use crate::ship::Ship;

/// Layout state of a cell. Shot marks live next to the layout so a hit does
/// not erase which ship segment it struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// First coordinate of a placed ship; clicking it rotates the ship.
    ShipOrigin,
    Ship,
}

/// Combined per-cell view for rendering: layout overlaid with shot marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    Empty,
    ShipOrigin,
    Ship,
    Hit,
    Miss,
}

/// Rendered snapshot of a grid, optionally with ships hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardView {
    pub cells: [[CellView; GRID_SIZE]; GRID_SIZE],
}

/// Setup progress of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupStatus {
    /// At least one ship is unplaced.
    Setup,
    /// Every ship has a coordinate list.
    SetupDone,
}

/// Result of one placement click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementOutcome {
    /// The selected ship was placed (or re-placed after rotation).
    Placed,
    /// No facing fit around the clicked cell; the ship stays unplaced.
    Abandoned,
    /// All ships were already placed, nothing to select.
    FleetComplete,
}

/// One player's 5×5 board and fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    ships: [Ship; NUM_SHIPS],
    hits: [[bool; GRID_SIZE]; GRID_SIZE],
    misses: [[bool; GRID_SIZE]; GRID_SIZE],
    hits_taken: usize,
    status: SetupStatus,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Empty board with the full fleet unplaced.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: core::array::from_fn(|i| Ship::new(FLEET_LENGTHS[i])),
            hits: [[false; GRID_SIZE]; GRID_SIZE],
            misses: [[false; GRID_SIZE]; GRID_SIZE],
            hits_taken: 0,
            status: SetupStatus::Setup,
        }
    }

    pub fn status(&self) -> SetupStatus {
        self.status
    }

    /// Hits absorbed by this grid, monotone and bounded by
    /// [`TOTAL_SHIP_CELLS`].
    pub fn hits_taken(&self) -> usize {
        self.hits_taken
    }

    /// Immutable view of the fleet in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Whether the shot at `coord` was already resolved as a hit or miss.
    /// Callers must gate attacks on this before invoking [`Grid::get_hit`].
    pub fn is_resolved(&self, coord: Coord) -> bool {
        self.hits[coord.0][coord.1] || self.misses[coord.0][coord.1]
    }

    /// Handle one placement click at `coord`.
    ///
    /// Clicking a placed ship's origin lifts it off the board and rotates it
    /// to the next facing before re-placement is attempted; any other click
    /// selects the next unplaced ship of the fleet. Each failed facing
    /// advances the cycle; an exhausted cycle abandons the click and leaves
    /// the ship unplaced.
    pub fn add_ship(&mut self, coord: Coord) -> PlacementOutcome {
        let idx = if let Some(i) = self.ship_at_origin(coord) {
            self.lift_ship(i);
            self.ships[i].advance_facing();
            i
        } else if let Some(i) = self.ships.iter().position(|s| !s.is_placed()) {
            self.ships[i].reset_facing();
            i
        } else {
            self.status = SetupStatus::SetupDone;
            return PlacementOutcome::FleetComplete;
        };

        let outcome = loop {
            if self.ships[idx].is_exhausted() {
                break PlacementOutcome::Abandoned;
            }
            if let Some(cells) = self.candidate_cells(coord, idx) {
                self.commit_placement(idx, cells);
                break PlacementOutcome::Placed;
            }
            self.ships[idx].advance_facing();
        };

        self.status = if self.ships.iter().all(Ship::is_placed) {
            SetupStatus::SetupDone
        } else {
            SetupStatus::Setup
        };
        outcome
    }

    /// Resolve a shot at `coord`: `true` when it strikes a ship segment, in
    /// which case the hit counter advances and the cell is marked for
    /// rendering.
    ///
    /// Bounds and the already-resolved gate are the caller's contract; a
    /// repeated call on the same ship cell double-counts.
    pub fn get_hit(&mut self, coord: Coord) -> bool {
        match self.cells[coord.0][coord.1] {
            Cell::Ship | Cell::ShipOrigin => {
                self.hits[coord.0][coord.1] = true;
                self.hits_taken += 1;
                debug_assert!(self.hits_taken <= TOTAL_SHIP_CELLS);
                true
            }
            Cell::Empty => false,
        }
    }

    /// Record a miss mark for rendering.
    pub fn mark_miss(&mut self, coord: Coord) {
        self.misses[coord.0][coord.1] = true;
    }

    /// Ship cells that were never hit, across the whole fleet. Used at game
    /// over to reveal where the surviving ships were; empty on a fully-hit
    /// grid.
    pub fn game_over_coordinates(&self) -> Vec<Coord> {
        self.ships
            .iter()
            .flat_map(|s| s.cells().iter().copied())
            .filter(|&(r, c)| !self.hits[r][c])
            .collect()
    }

    /// Snapshot for rendering. With `reveal_ships` false, unhit ship cells
    /// show as empty (the opponent's perspective).
    pub fn view(&self, reveal_ships: bool) -> BoardView {
        let cells = core::array::from_fn(|r| {
            core::array::from_fn(|c| {
                if self.hits[r][c] {
                    CellView::Hit
                } else if self.misses[r][c] {
                    CellView::Miss
                } else {
                    match self.cells[r][c] {
                        Cell::ShipOrigin if reveal_ships => CellView::ShipOrigin,
                        Cell::Ship if reveal_ships => CellView::Ship,
                        _ => CellView::Empty,
                    }
                }
            })
        });
        BoardView { cells }
    }

    fn ship_at_origin(&self, coord: Coord) -> Option<usize> {
        self.ships.iter().position(|s| s.origin() == Some(coord))
    }

    /// Remove a placed ship's cells from the layout, keeping the ship
    /// selected for re-placement.
    fn lift_ship(&mut self, idx: usize) {
        for &(r, c) in self.ships[idx].cells() {
            self.cells[r][c] = Cell::Empty;
        }
        self.ships[idx].clear_cells();
    }

    /// Cells the ship would occupy from `coord` under its current facing, or
    /// `None` if any of them is off-board or occupied. Nothing is mutated,
    /// so a failed facing leaves no partial state behind.
    fn candidate_cells(&self, coord: Coord, idx: usize) -> Option<Vec<Coord>> {
        let ship = &self.ships[idx];
        let mut cells = Vec::with_capacity(ship.length());
        for i in 0..ship.length() {
            let cell = ship.facing().step(coord, i)?;
            if self.cells[cell.0][cell.1] != Cell::Empty {
                return None;
            }
            cells.push(cell);
        }
        Some(cells)
    }

    fn commit_placement(&mut self, idx: usize, cells: Vec<Coord>) {
        for (i, &(r, c)) in cells.iter().enumerate() {
            self.cells[r][c] = if i == 0 { Cell::ShipOrigin } else { Cell::Ship };
        }
        self.ships[idx].set_cells(cells);
    }
}
