use std::time::Duration;

use rand::Rng as _;

use crate::{
    ReverseDirectionError,
    core::{
        cell::{Cell, Direction},
        grid::Grid,
        tile::{Tile, TileGrid},
    },
};

use super::{
    GameStats,
    snake::Snake,
    spawner::{SpawnSeed, Spawner},
};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Paused,
    GameOver,
    /// The snake covers the whole interior and no apple can be placed.
    Won,
}

/// A full game of snake: the grid, the snake, the apple, and the rules
/// that advance them one step at a time.
///
/// The caller owns the clock. Call [`Self::step`] once per tick at the pace
/// given by [`Self::step_interval`]; everything else (steering, pausing)
/// happens between ticks.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    snake: Snake,
    apple: Option<Cell>,
    spawner: Spawner,
    stats: GameStats,
    session_state: SessionState,
}

fn step_millis(level: u64) -> u64 {
    100 + u64::saturating_sub(200, level * 50)
}

impl GameSession {
    /// Starts a session with a random seed.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::with_seed(grid, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible
    /// session.
    #[must_use]
    pub fn with_seed(grid: Grid, seed: SpawnSeed) -> Self {
        let mut spawner = Spawner::with_seed(seed);
        let snake = spawner.spawn_snake(grid);
        let apple = spawner.spawn_apple(grid, &snake);
        Self {
            grid,
            snake,
            apple,
            spawner,
            stats: GameStats::new(),
            session_state: SessionState::Playing,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub const fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub const fn apple(&self) -> Option<Cell> {
        self.apple
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub const fn session_state(&self) -> &SessionState {
        &self.session_state
    }

    /// Time between steps at the current level.
    ///
    /// Starts at 300 ms and shortens by 50 ms per level, down to a floor of
    /// 100 ms.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(step_millis(self.stats.level() as u64))
    }

    /// Requests a direction change for the next step.
    ///
    /// The reverse of the currently applied direction is rejected; between
    /// two steps the last accepted request wins.
    pub fn try_steer(&mut self, direction: Direction) -> Result<(), ReverseDirectionError> {
        self.snake.try_steer(direction)
    }

    pub fn toggle_pause(&mut self) {
        self.session_state = match self.session_state {
            SessionState::Playing => SessionState::Paused,
            SessionState::Paused => SessionState::Playing,
            // No change once the session has ended
            SessionState::GameOver => SessionState::GameOver,
            SessionState::Won => SessionState::Won,
        };
    }

    /// Advances the game by one step.
    ///
    /// Commits the pending steer, moves the head one cell, and resolves the
    /// contact: wall or body ends the session, an apple grows the snake and
    /// respawns the apple, an empty cell just moves the snake. Does nothing
    /// unless the session is playing.
    pub fn step(&mut self) {
        if !self.session_state.is_playing() {
            return;
        }

        let direction = self.snake.commit_direction();
        let Some(next) = self.snake.head().step(direction) else {
            self.session_state = SessionState::GameOver;
            return;
        };
        // The tail counts: moving onto the cell the tail is about to vacate
        // still ends the session.
        if self.grid.is_wall(next) || self.snake.occupies(next) {
            self.session_state = SessionState::GameOver;
            return;
        }

        let ate_apple = self.apple == Some(next);
        self.snake.advance(next, ate_apple);
        self.stats.complete_step(ate_apple);

        if ate_apple {
            self.apple = self.spawner.spawn_apple(self.grid, &self.snake);
            if self.apple.is_none() {
                self.session_state = SessionState::Won;
            }
        }
    }

    /// Builds the render snapshot of the current position.
    #[must_use]
    pub fn tile_grid(&self) -> TileGrid {
        let mut tiles = TileGrid::new(self.grid);
        for cell in self.snake.segments().skip(1) {
            tiles.set(cell, Tile::SnakeBody);
        }
        tiles.set(self.snake.head(), Tile::SnakeHead);
        if let Some(apple) = self.apple {
            tiles.set(apple, Tile::Apple);
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(byte: u8) -> SpawnSeed {
        format!("{byte:032x}").parse().unwrap()
    }

    /// Builds a session around a hand-placed snake and apple.
    fn session_with(grid: Grid, snake: Snake, apple: Option<Cell>) -> GameSession {
        GameSession {
            grid,
            snake,
            apple,
            spawner: Spawner::with_seed(seed(99)),
            stats: GameStats::new(),
            session_state: SessionState::Playing,
        }
    }

    fn classic_session(apple: Cell) -> GameSession {
        session_with(Grid::default(), Snake::new(), Some(apple))
    }

    #[test]
    fn test_step_millis_ramp() {
        assert_eq!(step_millis(0), 300);
        assert_eq!(step_millis(1), 250);
        assert_eq!(step_millis(2), 200);
        assert_eq!(step_millis(3), 150);
        assert_eq!(step_millis(4), 100);
        assert_eq!(step_millis(5), 100);
        assert_eq!(step_millis(100), 100);
    }

    #[test]
    fn test_step_interval_follows_the_score() {
        let mut session = classic_session(Cell::new(7, 7));
        assert_eq!(session.step_interval(), Duration::from_millis(300));

        for _ in 0..10 {
            session.stats.complete_step(true);
        }
        assert_eq!(session.step_interval(), Duration::from_millis(250));

        for _ in 0..30 {
            session.stats.complete_step(true);
        }
        assert_eq!(session.step_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_step_advances_the_snake() {
        let mut session = classic_session(Cell::new(7, 7));
        session.step();

        assert_eq!(session.snake().head(), Cell::new(4, 1));
        assert_eq!(session.snake().len(), 3);
        assert_eq!(session.stats().steps(), 1);
        assert_eq!(session.stats().score(), 0);
        assert!(session.session_state().is_playing());
    }

    #[test]
    fn test_step_applies_the_pending_steer() {
        let mut session = classic_session(Cell::new(7, 7));
        session.try_steer(Direction::Down).unwrap();
        session.step();

        assert_eq!(session.snake().head(), Cell::new(3, 2));
    }

    #[test]
    fn test_running_into_the_wall_ends_the_session() {
        let mut session = classic_session(Cell::new(7, 7));

        // Head starts at column 3 heading right; the last interior column
        // is 13, so ten steps are fine and the eleventh hits the wall.
        for _ in 0..10 {
            session.step();
            assert!(session.session_state().is_playing());
        }
        session.step();

        assert!(session.session_state().is_game_over());
        assert_eq!(session.snake().head(), Cell::new(13, 1), "death does not move the snake");
        assert_eq!(session.stats().steps(), 10, "the fatal step is not counted");
    }

    #[test]
    fn test_running_into_the_body_ends_the_session() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(4, 1), true);
        snake.advance(Cell::new(4, 2), true);
        snake.advance(Cell::new(3, 2), false);

        let mut session = session_with(Grid::default(), snake, Some(Cell::new(7, 7)));
        session.try_steer(Direction::Up).unwrap();
        session.step();

        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn test_running_onto_the_tail_cell_ends_the_session() {
        let mut snake = Snake::new();
        snake.advance(Cell::new(3, 2), true);
        snake.advance(Cell::new(2, 2), false);
        assert_eq!(snake.segments().last(), Some(Cell::new(2, 1)));

        // The tail would vacate (2, 1) this step, but contact still kills.
        let mut session = session_with(Grid::default(), snake, Some(Cell::new(7, 7)));
        session.try_steer(Direction::Up).unwrap();
        session.step();

        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn test_eating_an_apple_grows_and_scores_and_respawns() {
        let mut session = classic_session(Cell::new(4, 1));
        session.step();

        assert!(session.session_state().is_playing());
        assert_eq!(session.snake().head(), Cell::new(4, 1));
        assert_eq!(session.snake().len(), 4, "the tail stays put on an apple step");
        assert_eq!(session.stats().score(), 1);

        let apple = session.apple().unwrap();
        assert!(!session.snake().occupies(apple));
        assert!(session.grid().interior_contains(apple));
    }

    #[test]
    fn test_filling_the_board_wins_the_session() {
        let grid = Grid::new(Grid::MIN_SIZE).unwrap();

        // Grow the snake over every interior cell except the last one and
        // park the apple there. Row-major order leaves the head right next
        // to the gap.
        let last = Cell::new(grid.size() - 2, grid.size() - 2);
        let mut snake = Snake::new();
        for cell in grid.interior_cells() {
            if cell != last && !snake.occupies(cell) {
                snake.advance(cell, true);
            }
        }
        assert_eq!(snake.head(), Cell::new(grid.size() - 3, grid.size() - 2));

        let mut session = session_with(grid, snake, Some(last));
        session.step();

        assert!(session.session_state().is_won());
        assert_eq!(session.apple(), None);
        assert_eq!(
            session.snake().len(),
            usize::from(grid.interior_size()) * usize::from(grid.interior_size()),
        );
    }

    #[test]
    fn test_paused_sessions_do_not_step() {
        let mut session = classic_session(Cell::new(7, 7));
        session.toggle_pause();
        assert!(session.session_state().is_paused());

        session.step();
        assert_eq!(session.snake().head(), Cell::new(3, 1));
        assert_eq!(session.stats().steps(), 0);

        session.toggle_pause();
        session.step();
        assert_eq!(session.snake().head(), Cell::new(4, 1));
    }

    #[test]
    fn test_ended_sessions_ignore_steps_and_pauses() {
        let mut session = classic_session(Cell::new(7, 7));
        for _ in 0..11 {
            session.step();
        }
        assert!(session.session_state().is_game_over());

        session.toggle_pause();
        assert!(session.session_state().is_game_over());

        session.step();
        assert_eq!(session.snake().head(), Cell::new(13, 1));
        assert_eq!(session.stats().steps(), 10);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let grid = Grid::default();
        let mut session1 = GameSession::with_seed(grid, seed(42));
        let mut session2 = GameSession::with_seed(grid, seed(42));

        for _ in 0..5 {
            session1.step();
            session2.step();
        }

        assert_eq!(session1.snake().head(), session2.snake().head());
        assert_eq!(session1.apple(), session2.apple());
        assert_eq!(session1.session_state(), session2.session_state());
    }

    #[test]
    fn test_tile_grid_snapshot() {
        let session = classic_session(Cell::new(7, 7));
        let tiles = session.tile_grid();

        assert_eq!(tiles.tile(Cell::new(3, 1)), Some(Tile::SnakeHead));
        assert_eq!(tiles.tile(Cell::new(2, 1)), Some(Tile::SnakeBody));
        assert_eq!(tiles.tile(Cell::new(1, 1)), Some(Tile::SnakeBody));
        assert_eq!(tiles.tile(Cell::new(7, 7)), Some(Tile::Apple));
        assert_eq!(tiles.tile(Cell::new(5, 5)), Some(Tile::Empty));
        assert_eq!(tiles.tile(Cell::new(0, 0)), None, "walls are not tiles");
    }
}
