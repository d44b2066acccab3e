//! Game logic and state management.
//!
//! This module provides the high-level game logic that orchestrates the core
//! data structures to implement snake gameplay:
//!
//! - [`GameSession`] - A running game (grid, snake, apple, state machine)
//! - [`GameStats`] - Game statistics (score, level, steps)
//! - [`Snake`] - The snake body and its direction state machine
//! - [`Spawner`] - Seeded placement of the snake and apples
//! - [`SpawnSeed`] - Seed for deterministic spawning
//!
//! # Game Flow
//!
//! A typical game progresses as follows:
//!
//! 1. Initialize a [`GameSession`] for a [`Grid`](crate::Grid)
//! 2. The player steers with [`GameSession::try_steer`]
//! 3. A timer calls [`GameSession::step`] at the pace of
//!    [`GameSession::step_interval`]
//! 4. Each step moves the snake, eats apples, and raises the speed level
//! 5. Repeat until the snake hits a wall or itself (or fills the board)
//!
//! # Example
//!
//! ```
//! use sidewinder_engine::{Direction, GameSession, Grid};
//!
//! let mut session = GameSession::new(Grid::default());
//!
//! // Steer, then let the timer tick.
//! session.try_steer(Direction::Down).ok();
//! session.step();
//!
//! if session.session_state().is_game_over() {
//!     println!("Game over!");
//! }
//! ```

pub use self::{game_session::*, game_stats::*, snake::*, spawner::*};

mod game_session;
mod game_stats;
mod snake;
mod spawner;
