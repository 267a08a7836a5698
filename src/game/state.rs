use super::direction::Direction;

/// A position on the game grid, in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Food category determining color and point value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodTier {
    Low,
    Mid,
    High,
}

impl FoodTier {
    /// Tier the next food item takes at the given score
    pub fn for_score(score: u32) -> Self {
        if score < 100 {
            FoodTier::Low
        } else if score < 300 {
            FoodTier::Mid
        } else {
            FoodTier::High
        }
    }

    /// Points awarded for eating food of this tier
    pub fn points(&self) -> u32 {
        match self {
            FoodTier::Low => 10,
            FoodTier::Mid => 20,
            FoodTier::High => 50,
        }
    }
}

/// A food item on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub pos: Position,
    pub tier: FoodTier,
}

/// Whether the game is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given head position and direction, the body
    /// trailing one cell behind per segment
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Change direction unless the turn would be a 180-degree reversal,
    /// in which case the steer is ignored
    pub fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Advance one cell: each segment takes the cell its predecessor held
    /// before this step, tail-first so sources are read before being
    /// overwritten, then the head moves in the current direction.
    pub fn slither(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        self.body[0] = self.body[0].moved_in_direction(self.direction);
    }

    /// Append one tail segment. Its cell duplicates the current tail; the
    /// next slither overwrites it before it matters.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.last() {
            self.body.push(tail);
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Current tick interval in milliseconds; only ever decreases
    pub delay_ms: u64,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Food,
        grid_width: usize,
        grid_height: usize,
        delay_ms: u64,
    ) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            delay_ms,
            status: GameStatus::Running,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Queue a turn for the next tick. Inert once the game is over.
    pub fn handle_direction(&mut self, direction: Direction) {
        if self.status == GameStatus::Running {
            self.snake.steer(direction);
        }
    }

    /// Read-only view of the state for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: &self.snake.body,
            food: self.food,
            grid_width: self.grid_width,
            grid_height: self.grid_height,
            score: self.score,
            delay_ms: self.delay_ms,
            status: self.status,
        }
    }
}

/// What the renderer sees: no mutation happens through this view
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Snake segments, head first
    pub segments: &'a [Position],
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub delay_ms: u64,
    pub status: GameStatus,
}
