use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::IteratorRandom as _,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ParseSeedError,
    core::{cell::Cell, grid::Grid},
};

use super::snake::Snake;

/// Places the snake and every apple of a session.
///
/// A single random number generator drives both kinds of placement, so one
/// seed reproduces the whole session layout: the initial snake position and
/// heading, plus the full sequence of apple positions (given the same
/// sequence of snake states).
///
/// Apples are drawn uniformly from the free interior cells, so an apple
/// never lands on the snake and never on the wall ring.
///
/// # Example
///
/// ```
/// use sidewinder_engine::{Grid, engine::Spawner};
///
/// let grid = Grid::default();
/// let mut spawner = Spawner::new();
///
/// let snake = spawner.spawn_snake(grid);
/// let apple = spawner.spawn_apple(grid, &snake);
/// assert!(apple.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed for deterministic spawning.
///
/// This is a 128-bit (16-byte) seed used to initialize the random number
/// generator behind [`Spawner`]. Using the same seed reproduces the same
/// snake spawn and apple sequence, enabling:
///
/// - Reproducible gameplay for debugging
/// - Sharing a board layout as a short string
/// - Deterministic testing
///
/// The textual form is a 32-character lowercase hex string, accepted by
/// both [`FromStr`] and the serde implementations.
///
/// # Example
///
/// ```
/// use sidewinder_engine::{GameSession, Grid, SpawnSeed};
/// use rand::Rng as _;
///
/// let seed: SpawnSeed = rand::rng().random();
///
/// // Two sessions with the same seed start out identical.
/// let session1 = GameSession::with_seed(Grid::default(), seed);
/// let session2 = GameSession::with_seed(Grid::default(), seed);
/// assert_eq!(session1.apple(), session2.apple());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SpawnSeed([u8; 16]);

impl fmt::Display for SpawnSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for SpawnSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|source| ParseSeedError::Digit {
            input: s.to_owned(),
            source,
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SpawnSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SpawnSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SpawnSeed` values using the standard random distribution.
///
/// This implementation enables idiomatic seed generation with `rng.random()`.
impl Distribution<SpawnSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SpawnSeed(seed)
    }
}

impl Spawner {
    /// Creates a spawner with a random seed.
    ///
    /// For a reproducible session, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for deterministic spawning.
    #[must_use]
    pub fn with_seed(seed: SpawnSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// Spawns a snake at a random interior position with a random heading.
    pub fn spawn_snake(&mut self, grid: Grid) -> Snake {
        Snake::spawn(grid, &mut self.rng)
    }

    /// Picks an apple cell uniformly from the interior cells the snake does
    /// not occupy.
    ///
    /// Returns `None` when the snake covers the whole interior.
    pub fn spawn_apple(&mut self, grid: Grid, snake: &Snake) -> Option<Cell> {
        grid.interior_cells()
            .filter(|cell| !snake.occupies(*cell))
            .choose(&mut self.rng)
    }
}
