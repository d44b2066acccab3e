use super::{cell::Cell, grid::Grid};

/// A single interior cell in the render snapshot.
///
/// `Tile` carries semantic information for display layers; collision logic
/// never consults it. The wall ring is not represented here; renderers draw
/// it as the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    /// Empty playing-field cell.
    #[default]
    Empty,
    /// The snake's head segment.
    SnakeHead,
    /// A snake body segment.
    SnakeBody,
    /// The apple.
    Apple,
}

/// Cell-by-cell snapshot of the playable interior for rendering.
///
/// Rows are `Vec`-backed because the board side length is runtime
/// configuration, not a compile-time constant.
#[derive(Debug, Clone)]
pub struct TileGrid {
    interior: u8,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates an all-empty snapshot of the grid's interior.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let interior = grid.interior_size();
        Self {
            interior,
            tiles: vec![Tile::Empty; usize::from(interior) * usize::from(interior)],
        }
    }

    /// Side length of the snapshot (the grid's interior size).
    #[must_use]
    pub const fn interior_size(&self) -> u8 {
        self.interior
    }

    /// Sets the tile for an interior cell. Cells on or beyond the wall ring
    /// are ignored.
    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(index) = self.index_of(cell) {
            self.tiles[index] = tile;
        }
    }

    /// Returns the tile at an interior cell, or `None` on the wall ring and
    /// beyond.
    #[must_use]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.index_of(cell).map(|index| self.tiles[index])
    }

    /// Iterates interior rows top to bottom; each row is one slice of tiles.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(usize::from(self.interior))
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        let col = cell.col().checked_sub(1)?;
        let row = cell.row().checked_sub(1)?;
        if col >= self.interior || row >= self.interior {
            return None;
        }
        Some(usize::from(row) * usize::from(self.interior) + usize::from(col))
    }
}
