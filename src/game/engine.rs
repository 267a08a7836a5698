use super::{
    config::GameConfig,
    direction::Direction,
    state::{Food, FoodTier, GameState, GameStatus, Position, Snake},
};
use rand::Rng;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the game is over after this tick
    pub game_over: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Build the initial state: snake of configured length trailing left from
    /// the start cell, heading right, with the first food placed
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            Position::new(self.config.start_x, self.config.start_y),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = self.place_food(0);

        GameState::new(
            snake,
            food,
            self.config.grid_width,
            self.config.grid_height,
            self.config.initial_delay_ms,
        )
    }

    /// Advance the game by one step
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if state.status == GameStatus::Over {
            return TickOutcome {
                ate_food: false,
                game_over: true,
            };
        }

        state.snake.slither();

        // Leaving the grid ends the run; the head stays where it crossed
        if !state.is_in_bounds(state.snake.head()) {
            state.status = GameStatus::Over;
            return TickOutcome {
                ate_food: false,
                game_over: true,
            };
        }

        let ate_food = state.snake.head() == state.food.pos;

        if ate_food {
            state.snake.grow();
            state.score += state.food.tier.points();
            state.delay_ms = state.delay_ms.min(self.delay_for_score(state.score));
            state.food = self.place_food(state.score);
        }

        TickOutcome {
            ate_food,
            game_over: false,
        }
    }

    /// Tick interval the score has earned; delay only ever ratchets down
    fn delay_for_score(&self, score: u32) -> u64 {
        if score >= 300 {
            120
        } else if score >= 100 {
            160
        } else {
            self.config.initial_delay_ms
        }
    }

    /// Place food uniformly at random per axis. Cells occupied by the snake
    /// are not excluded, so food may land on the body.
    fn place_food(&mut self, score: u32) -> Food {
        let x = self.rng.gen_range(0..self.config.grid_width) as i32;
        let y = self.rng.gen_range(0..self.config.grid_height) as i32;

        Food {
            pos: Position::new(x, y),
            tier: FoodTier::for_score(score),
        }
    }
}
