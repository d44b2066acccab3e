use std::collections::VecDeque;

use rand::Rng;

use crate::{
    ReverseDirectionError,
    core::{
        cell::{Cell, Direction},
        grid::Grid,
    },
};

/// The snake: ordered body segments plus a two-stage direction state
/// machine.
///
/// Steering writes a *pending* direction; the pending value becomes the
/// *applied* direction only when the next tick commits it. Reversal checks
/// run against the applied direction, so a 180° turn cannot be smuggled in
/// with two quick presses between ticks.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Head first, tail last.
    segments: VecDeque<Cell>,
    direction: Direction,
    pending: Direction,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the classic three-segment snake in the top-left corner,
    /// heading right.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: VecDeque::from([Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)]),
            direction: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Creates a three-segment snake at a random position with a random
    /// heading.
    ///
    /// The head's coordinate along the movement axis stays within
    /// `4..=size-6`, leaving room for the two trailing segments behind it
    /// and several free cells ahead; the cross-axis coordinate may be
    /// anywhere in the interior.
    pub fn spawn<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let direction: Direction = rng.random();
        let lead = rng.random_range(4..=grid.size() - 6);
        let side = rng.random_range(1..=grid.size() - 2);

        let head = match direction {
            Direction::Up | Direction::Down => Cell::new(side, lead),
            Direction::Left | Direction::Right => Cell::new(lead, side),
        };
        // Trailing segments extend directly opposite the heading. The lead
        // margin keeps both of them inside the interior.
        let segments = match direction {
            Direction::Up => [
                head,
                Cell::new(head.col(), head.row() + 1),
                Cell::new(head.col(), head.row() + 2),
            ],
            Direction::Down => [
                head,
                Cell::new(head.col(), head.row() - 1),
                Cell::new(head.col(), head.row() - 2),
            ],
            Direction::Left => [
                head,
                Cell::new(head.col() + 1, head.row()),
                Cell::new(head.col() + 2, head.row()),
            ],
            Direction::Right => [
                head,
                Cell::new(head.col() - 1, head.row()),
                Cell::new(head.col() - 2, head.row()),
            ],
        };

        Self {
            segments: segments.into(),
            direction,
            pending: direction,
        }
    }

    /// The head cell.
    ///
    /// # Panics
    ///
    /// Panics if the snake has no segments (should never happen; every
    /// constructor creates three).
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .segments
            .front()
            .expect("Snake should never be empty")
    }

    /// Iterates all segments, head first.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The direction applied at the last tick.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Requests a direction change for the next tick.
    ///
    /// The exact reverse of the applied direction is rejected; any other
    /// direction overwrites the pending value, so the last accepted press
    /// before a tick wins.
    pub fn try_steer(&mut self, direction: Direction) -> Result<(), ReverseDirectionError> {
        if direction == self.direction.opposite() {
            return Err(ReverseDirectionError);
        }
        self.pending = direction;
        Ok(())
    }

    /// Commits the pending steer and returns the direction for this tick.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.pending;
        self.direction
    }

    /// Pushes a new head segment; drops the tail unless growing.
    ///
    /// The caller has already collision-checked `next_head`.
    pub fn advance(&mut self, next_head: Cell, grow: bool) {
        self.segments.push_front(next_head);
        if !grow {
            self.segments.pop_back();
        }
    }

    /// Whether any segment (tail included) occupies the cell.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_classic_layout() {
        let snake = Snake::new();
        assert_eq!(snake.head(), Cell::new(3, 1));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)],
        );
    }

    #[test]
    fn test_advance_moves_the_tail() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(4, 1), false);

        assert_eq!(snake.head(), Cell::new(4, 1));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Cell::new(1, 1)), "tail cell vacated");
    }

    #[test]
    fn test_advance_with_growth_keeps_the_tail() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(4, 1), true);

        assert_eq!(snake.head(), Cell::new(4, 1));
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Cell::new(1, 1)));
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut snake = Snake::new();
        assert!(snake.try_steer(Direction::Left).is_err());
        assert!(snake.try_steer(Direction::Up).is_ok());
        assert!(snake.try_steer(Direction::Down).is_ok());
        assert!(snake.try_steer(Direction::Right).is_ok());
    }

    #[test]
    fn test_reversal_check_uses_the_applied_direction() {
        let mut snake = Snake::new();

        // Heading right; queue an upward turn, then try to reverse. The
        // reversal is still measured against the applied direction.
        snake.try_steer(Direction::Up).unwrap();
        assert!(snake.try_steer(Direction::Left).is_err());

        // Once the turn is committed, left becomes legal.
        assert_eq!(snake.commit_direction(), Direction::Up);
        assert!(snake.try_steer(Direction::Left).is_ok());
        assert_eq!(snake.commit_direction(), Direction::Left);
    }

    #[test]
    fn test_last_accepted_steer_wins() {
        let mut snake = Snake::new();
        snake.try_steer(Direction::Up).unwrap();
        snake.try_steer(Direction::Down).unwrap();
        assert_eq!(snake.commit_direction(), Direction::Down);
    }

    #[test]
    fn test_occupies_includes_the_tail() {
        let snake = Snake::new();
        assert!(snake.occupies(Cell::new(3, 1)));
        assert!(snake.occupies(Cell::new(2, 1)));
        assert!(snake.occupies(Cell::new(1, 1)));
        assert!(!snake.occupies(Cell::new(4, 1)));
    }

    #[test]
    fn test_spawn_respects_margins_and_trails_backwards() {
        let grid = Grid::default();
        for seed in 0..100u8 {
            let mut rng = Pcg32::from_seed([seed; 16]);
            let snake = Snake::spawn(grid, &mut rng);

            assert_eq!(snake.len(), 3);
            for cell in snake.segments() {
                assert!(
                    grid.interior_contains(cell),
                    "segment {cell:?} outside the interior (seed {seed})",
                );
            }

            // The two trailing segments sit directly behind the head.
            let segments: Vec<_> = snake.segments().collect();
            let behind = snake.direction().opposite();
            assert_eq!(segments[0].step(behind), Some(segments[1]));
            assert_eq!(segments[1].step(behind), Some(segments[2]));

            // Lead-axis margin: at least three free cells ahead of the head.
            let mut probe = snake.head();
            for _ in 0..3 {
                probe = probe.step(snake.direction()).unwrap();
                assert!(!grid.is_wall(probe), "no room ahead (seed {seed})");
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_for_a_fixed_rng() {
        let grid = Grid::default();
        let mut rng1 = Pcg32::from_seed([42; 16]);
        let mut rng2 = Pcg32::from_seed([42; 16]);

        let snake1 = Snake::spawn(grid, &mut rng1);
        let snake2 = Snake::spawn(grid, &mut rng2);

        assert_eq!(snake1.direction(), snake2.direction());
        assert_eq!(
            snake1.segments().collect::<Vec<_>>(),
            snake2.segments().collect::<Vec<_>>(),
        );
    }
}
