//! Ship state: length, facing cycle and occupied coordinates.

use alloc::vec::Vec;

use crate::common::Coord;
use crate::config::GRID_SIZE;

/// Direction a ship extends from its origin cell.
///
/// Directionless placement (the old `NONE` sentinel) is modelled by the
/// separate [`Ship::is_exhausted`] flag instead of an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    East,
    South,
    West,
    North,
}

impl Facing {
    /// Coordinate `dist` steps from `origin` in this direction, or `None`
    /// when it leaves the board.
    pub fn step(&self, origin: Coord, dist: usize) -> Option<Coord> {
        let (r, c) = (origin.0 as isize, origin.1 as isize);
        let d = dist as isize;
        let (nr, nc) = match self {
            Facing::East => (r, c + d),
            Facing::South => (r + d, c),
            Facing::West => (r, c - d),
            Facing::North => (r - d, c),
        };
        let max = GRID_SIZE as isize;
        if nr >= 0 && nr < max && nc >= 0 && nc < max {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    }
}

/// One ship of the fleet. Coordinates are empty until placed; once set they
/// are contiguous from the origin in the current facing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    facing: Facing,
    exhausted: bool,
    cells: Vec<Coord>,
}

impl Ship {
    pub fn new(length: usize) -> Self {
        debug_assert!(length >= 1 && length <= GRID_SIZE);
        Ship {
            length,
            facing: Facing::East,
            exhausted: false,
            cells: Vec::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Whether the facing cycle has run out for the current click.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn is_placed(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Occupied coordinates, origin first. Empty while unplaced.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Origin cell of a placed ship.
    pub fn origin(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Advance to the next candidate facing. East → South → West → North →
    /// exhausted, wrapping back to East from the exhausted state. Length-1
    /// ships have a single candidate and exhaust immediately.
    pub fn advance_facing(&mut self) {
        if self.exhausted {
            self.exhausted = false;
            self.facing = Facing::East;
        } else if self.length == 1 {
            self.exhausted = true;
        } else {
            match self.facing {
                Facing::East => self.facing = Facing::South,
                Facing::South => self.facing = Facing::West,
                Facing::West => self.facing = Facing::North,
                Facing::North => self.exhausted = true,
            }
        }
    }

    /// Restart the cycle after a previous click exhausted it. A ship that is
    /// mid-cycle keeps its facing.
    pub fn reset_facing(&mut self) {
        if self.exhausted {
            self.exhausted = false;
            self.facing = Facing::East;
        }
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<Coord>) {
        debug_assert_eq!(cells.len(), self.length);
        self.cells = cells;
    }

    pub(crate) fn clear_cells(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_cycle_wraps_through_exhaustion() {
        let mut ship = Ship::new(2);
        assert_eq!(ship.facing(), Facing::East);
        ship.advance_facing();
        assert_eq!(ship.facing(), Facing::South);
        ship.advance_facing();
        ship.advance_facing();
        assert_eq!(ship.facing(), Facing::North);
        ship.advance_facing();
        assert!(ship.is_exhausted());
        ship.advance_facing();
        assert!(!ship.is_exhausted());
        assert_eq!(ship.facing(), Facing::East);
    }

    #[test]
    fn length_one_exhausts_after_single_candidate() {
        let mut ship = Ship::new(1);
        assert!(!ship.is_exhausted());
        ship.advance_facing();
        assert!(ship.is_exhausted());
    }

    #[test]
    fn step_rejects_off_board_coordinates() {
        assert_eq!(Facing::East.step((0, 3), 1), Some((0, 4)));
        assert_eq!(Facing::East.step((0, 4), 1), None);
        assert_eq!(Facing::North.step((0, 0), 1), None);
        assert_eq!(Facing::West.step((2, 0), 1), None);
        assert_eq!(Facing::South.step((4, 2), 1), None);
    }
}
