use crate::GridSizeError;

use super::cell::Cell;

/// Board geometry: a square of `size × size` cells whose outermost ring is
/// wall.
///
/// The playable interior spans `1..=size-2` on both axes; the classic
/// 15×15 board has a 13×13 interior. `Grid` is a value type; board
/// contents (snake, apple) live in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: u8,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl Grid {
    /// Side length of the classic board, wall ring included.
    pub const DEFAULT_SIZE: u8 = 15;
    /// Smallest supported side length. Below this the random snake spawn
    /// has no room for its margins.
    pub const MIN_SIZE: u8 = 10;
    /// Largest supported side length; keeps the rendered board inside a
    /// standard 80×24 terminal.
    pub const MAX_SIZE: u8 = 22;

    pub fn new(size: u8) -> Result<Self, GridSizeError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(GridSizeError { size });
        }
        Ok(Self { size })
    }

    #[must_use]
    pub const fn size(self) -> u8 {
        self.size
    }

    /// Side length of the playable interior (`size - 2`).
    #[must_use]
    pub const fn interior_size(self) -> u8 {
        self.size - 2
    }

    /// Whether the cell lies strictly inside the wall ring.
    #[must_use]
    pub const fn interior_contains(self, cell: Cell) -> bool {
        let max = self.size - 2;
        cell.col() >= 1 && cell.col() <= max && cell.row() >= 1 && cell.row() <= max
    }

    /// Whether the cell is wall: the border ring, or anything beyond it.
    #[must_use]
    pub const fn is_wall(self, cell: Cell) -> bool {
        !self.interior_contains(cell)
    }

    /// Iterates the playable interior in row-major order.
    pub fn interior_cells(self) -> impl Iterator<Item = Cell> {
        let max = self.size - 2;
        (1..=max).flat_map(move |row| (1..=max).map(move |col| Cell::new(col, row)))
    }
}
