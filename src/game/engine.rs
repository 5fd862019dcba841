use anyhow::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

use super::{
    action::Direction,
    config::GameConfig,
    inbox::DirectionInbox,
    state::{GameOverReason, GameState, Position, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Set on the tick that ended the run
    pub game_over: Option<GameOverReason>,
}

impl TickOutcome {
    pub fn ended_game(&self) -> bool {
        self.game_over.is_some()
    }
}

/// Fixed-tick simulation that owns the game state.
///
/// Callers feed it direction requests and call [`GameLoop::tick`] on a
/// timer; renderers read [`GameLoop::state`] between ticks.
pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    inbox: DirectionInbox,
    rng: StdRng,
}

impl GameLoop {
    /// Create a game loop seeded from OS entropy
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a game loop with a deterministic food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;
        let state = initial_state(&config, &mut rng);

        Ok(Self {
            config,
            state,
            inbox: DirectionInbox::new(),
            rng,
        })
    }

    /// Adopt a prepared state. Only `config` is validated; the state is taken as-is.
    pub fn with_state(config: GameConfig, state: GameState, seed: u64) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            state,
            inbox: DirectionInbox::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Direction that will be applied on the next tick, if any
    pub fn pending_direction(&self) -> Option<Direction> {
        self.inbox.peek()
    }

    /// Queue a turn for the next tick.
    ///
    /// Returns false when the request was dropped: another turn is already
    /// queued for this tick, or `direction` would reverse the snake.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        let accepted = self.inbox.offer(direction, self.state.snake.direction);
        if !accepted {
            trace!(?direction, current = ?self.state.snake.direction, "direction request ignored");
        }
        accepted
    }

    /// Start a fresh run: initial snake, new food, score 0.
    ///
    /// Only allowed once the current run is over; returns false and leaves
    /// a live run untouched otherwise.
    pub fn restart(&mut self) -> bool {
        if self.state.running {
            trace!("restart ignored while running");
            return false;
        }

        self.state = initial_state(&self.config, &mut self.rng);
        self.inbox.clear();
        info!(food = ?self.state.food, "game restarted");
        true
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::default();
        }

        if let Some(direction) = self.inbox.take() {
            self.state.snake.direction = direction;
        }

        let new_head = self
            .state
            .snake
            .head()
            .moved_in_direction(self.state.snake.direction);

        // Growth has to be settled before the collision checks so the cell
        // the tail leaves this tick counts as free.
        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);
        self.state.steps += 1;

        let mut outcome = TickOutcome {
            ate_food,
            game_over: None,
        };

        if ate_food {
            self.state.score += self.config.food_reward;
            match place_food(
                &mut self.rng,
                self.state.grid_width,
                self.state.grid_height,
                &self.state.snake,
            ) {
                Some(food) => {
                    self.state.food = food;
                    debug!(score = self.state.score, ?food, "food eaten");
                }
                None => outcome.game_over = Some(GameOverReason::BoardFilled),
            }
        }

        if self.state.snake.collides_with_body(new_head) {
            outcome.game_over = Some(GameOverReason::SelfCollision);
        } else if !self.state.is_in_bounds(new_head) {
            outcome.game_over = Some(GameOverReason::Wall);
        }

        if let Some(reason) = outcome.game_over {
            self.state.end(reason);
            info!(
                score = self.state.score,
                steps = self.state.steps,
                length = self.state.snake.len(),
                ?reason,
                "game over"
            );
        }

        outcome
    }
}

fn initial_state<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> GameState {
    let center_x = (config.grid_width / 2) as i32;
    let center_y = (config.grid_height / 2) as i32;

    let snake = Snake::new(
        Position::new(center_x, center_y),
        Direction::Right,
        config.initial_snake_length,
    );

    // validate() guarantees a free cell on a fresh grid
    let food = place_food(rng, config.grid_width, config.grid_height, &snake);
    debug_assert!(food.is_some(), "fresh grid has no free cell");
    let food = food.unwrap_or(Position::new(0, 0));

    GameState::new(snake, food, config.grid_width, config.grid_height)
}

/// Pick a uniformly random cell not covered by `snake`.
///
/// Rejection-sampled; returns `None` when the snake covers the whole grid.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid_width: usize,
    grid_height: usize,
    snake: &Snake,
) -> Option<Position> {
    let cells = grid_width * grid_height;
    let occupied = snake
        .body
        .iter()
        .filter(|p| {
            p.x >= 0 && p.y >= 0 && (p.x as usize) < grid_width && (p.y as usize) < grid_height
        })
        .count();
    if occupied >= cells {
        return None;
    }

    loop {
        let x = rng.gen_range(0..grid_width) as i32;
        let y = rng.gen_range(0..grid_height) as i32;
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }
}
