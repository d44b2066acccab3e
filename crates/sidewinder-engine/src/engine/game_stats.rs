/// Number of apples required to advance one speed level.
const APPLES_PER_LEVEL: usize = 10;

/// Game statistics tracking score and elapsed steps.
///
/// Tracks the metrics of a session:
///
/// - **Score**: one point per apple eaten
/// - **Level**: derived from score (1 level per 10 apples)
/// - **Steps**: total moves the snake has survived
///
/// # Example
///
/// ```
/// use sidewinder_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_step(true); // this step ate an apple
/// stats.complete_step(false);
///
/// assert_eq!(stats.score(), 1);
/// assert_eq!(stats.steps(), 2);
/// assert_eq!(stats.level(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct GameStats {
    score: usize,
    steps: usize,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { score: 0, steps: 0 }
    }

    /// Returns the current score (one point per apple).
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Returns the current speed level.
    ///
    /// The level increases by 1 for every 10 apples eaten (integer division).
    #[must_use]
    pub const fn level(&self) -> usize {
        self.score / APPLES_PER_LEVEL
    }

    /// Returns the total number of steps the snake has taken.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Updates statistics after a completed step.
    ///
    /// This should be called each time the snake moves without dying.
    pub const fn complete_step(&mut self, ate_apple: bool) {
        self.steps += 1;
        if ate_apple {
            self.score += 1;
        }
    }
}
