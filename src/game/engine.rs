use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, Position, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// What a single [`SimulationState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake advanced one cell without growing
    Moved,
    /// Head landed on the food; the snake grew by one segment
    AteFood,
    /// The move was fatal; the snake was left untouched
    Died(CollisionType),
    /// The round is already over, nothing happened
    Idle,
}

/// Snake body, heading, food, speed and the game-over flag, plus the rules
/// that move them forward. Knows nothing about wall-clock time or I/O.
pub struct SimulationState {
    config: GameConfig,
    snake: Snake,
    food: Position,
    speed: f32,
    game_over: bool,
    rng: StdRng,
}

impl SimulationState {
    /// Start a round with food placed from an entropy-seeded generator
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a round with a reproducible food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(Self::spawn_point(&config), Direction::Right),
            food: Position::new(0, 0),
            speed: config.initial_speed,
            game_over: false,
            config,
            rng,
        };
        state.spawn_food();
        state
    }

    /// Replace the snake with an explicit body, e.g. to set up a scenario.
    ///
    /// Returns `false` and leaves the state untouched if the body is empty,
    /// overlaps itself, or leaves the grid.
    pub fn place_snake(&mut self, body: Vec<Position>, direction: Direction) -> bool {
        if body.iter().any(|pos| !self.is_in_bounds(*pos)) {
            return false;
        }
        match Snake::from_segments(body, direction) {
            Some(snake) => {
                self.snake = snake;
                true
            }
            None => false,
        }
    }

    /// Put the food on a specific cell. Out-of-grid cells are ignored.
    pub fn place_food(&mut self, pos: Position) -> bool {
        if !self.is_in_bounds(pos) {
            return false;
        }
        self.food = pos;
        true
    }

    /// Move the food to a uniformly random cell of the grid.
    ///
    /// Cells covered by the snake are not excluded.
    pub fn spawn_food(&mut self) {
        let x = self.rng.gen_range(0..self.config.cols());
        let y = self.rng.gen_range(0..self.config.rows());
        self.food = Position::new(x, y);
    }

    /// Request a new heading. Only perpendicular turns are applied.
    pub fn set_heading(&mut self, requested: Direction) -> bool {
        self.snake.turn(requested)
    }

    /// Advance the simulation by exactly one grid step
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Idle;
        }

        let new_head = self.snake.next_head();

        if let Some(collision) = self.check_collision(new_head) {
            self.game_over = true;
            log::debug!(
                "Snake died ({:?}) at {:?} with length {}",
                collision,
                new_head,
                self.snake.len()
            );
            return TickOutcome::Died(collision);
        }

        let ate_food = new_head == self.food;
        self.snake.move_snake(ate_food);

        if ate_food {
            self.spawn_food();
            self.speed *= self.config.speed_decay;
            log::debug!(
                "Ate food at {:?}, length {}, tick interval {:.4}s",
                new_head,
                self.snake.len(),
                self.speed
            );
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    /// Begin a new round. Valid from any state.
    pub fn restart(&mut self) {
        self.game_over = false;
        self.snake = Snake::new(Self::spawn_point(&self.config), Direction::Right);
        self.speed = self.config.initial_speed;
        self.spawn_food();
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn spawn_point(config: &GameConfig) -> Position {
        Position::new(config.cols() / 2, config.rows() / 2)
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.cols() && pos.y >= 0 && pos.y < self.rows()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn heading(&self) -> Direction {
        self.snake.direction()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    /// Seconds that must pass between ticks
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false, see [`Snake::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn cols(&self) -> i32 {
        self.config.cols()
    }

    pub fn rows(&self) -> i32 {
        self.config.rows()
    }
}
