use rand::{Rng, distr::StandardUniform, prelude::Distribution};

/// A single board cell addressed by column and row.
///
/// Coordinates include the wall ring: `(0, 0)` is the top-left wall corner
/// and the playable interior starts at `(1, 1)`. Cells are immutable;
/// [`step`](Self::step) returns a new cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    col: u8,
    row: u8,
}

impl Cell {
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the adjacent cell in the given direction, or `None` if the
    /// step would leave the coordinate space entirely.
    ///
    /// This is pure coordinate math; whether the result is a wall is the
    /// board's concern, not the cell's.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (col, row) = match direction {
            Direction::Up => (Some(self.col), self.row.checked_sub(1)),
            Direction::Down => (Some(self.col), self.row.checked_add(1)),
            Direction::Left => (self.col.checked_sub(1), Some(self.row)),
            Direction::Right => (self.col.checked_add(1), Some(self.row)),
        };
        Some(Self::new(col?, row?))
    }
}

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in arrow-keycode order (left, up, right, down).
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Returns the 180° reverse of this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Allows drawing a uniformly random direction with `rng.random()`,
/// used for the snake's spawn heading.
impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.random_range(0..Direction::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_step_moves_one_cell() {
        let cell = Cell::new(5, 5);

        assert_eq!(cell.step(Direction::Up), Some(Cell::new(5, 4)));
        assert_eq!(cell.step(Direction::Down), Some(Cell::new(5, 6)));
        assert_eq!(cell.step(Direction::Left), Some(Cell::new(4, 5)));
        assert_eq!(cell.step(Direction::Right), Some(Cell::new(6, 5)));
    }

    #[test]
    fn test_step_off_the_coordinate_space() {
        let origin = Cell::new(0, 0);

        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Cell::new(0, 1)));
        assert_eq!(origin.step(Direction::Right), Some(Cell::new(1, 0)));
    }

    #[test]
    fn test_opposite_is_involutive() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_random_direction_covers_all_variants() {
        let mut rng = Pcg32::from_seed([7; 16]);
        let mut seen = [false; 4];
        for _ in 0..100 {
            let direction: Direction = rng.random();
            let index = Direction::ALL
                .iter()
                .position(|d| *d == direction)
                .unwrap();
            seen[index] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
