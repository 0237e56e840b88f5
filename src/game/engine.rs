use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use super::{
    action::Direction,
    config::GameConfig,
    error::GameError,
    fifo::{InputQueue, SegmentQueue},
    grid::Grid,
    keys,
    state::{CellStatus, CollisionType, GameStatus, Position},
};

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision that halted the game, on this tick or an earlier one
    pub collision: Option<CollisionType>,
    /// Delay the host should wait before calling `tick` again
    pub next_interval: Duration,
}

impl TickResult {
    pub fn halted(&self) -> bool {
        self.collision.is_some()
    }
}

/// Owns the arena, the snake and pending input, and advances them one tick
/// at a time. The engine never schedules itself and never performs I/O.
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    snake: SegmentQueue,
    input: InputQueue,
    direction: Direction,
    head: Position,
    status: GameStatus,
    interval_ms: f64,
    shades: Vec<(Position, u8)>,
    rng: StdRng,
}

impl GameEngine {
    /// Start a new session with an entropy-seeded food generator
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Start a new session with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;

        let row = config.start_row as i32;
        let start_col = config.start_col as i32;
        let mut engine = Self {
            grid: Grid::new(config.arena_size),
            snake: SegmentQueue::new(),
            input: InputQueue::new(),
            direction: Direction::Right,
            head: Position::new(row, start_col),
            status: GameStatus::Running,
            interval_ms: config.initial_interval_ms,
            shades: Vec::new(),
            rng,
            config,
        };

        for i in 0..engine.config.initial_snake_length as i32 {
            let segment = Position::new(row, start_col + i);
            engine.grid.set(segment, CellStatus::Snake)?;
            engine.snake.push_tail(segment);
            engine.head = segment;
        }

        for _ in 0..engine.config.initial_food {
            engine.spawn_food()?;
        }
        engine.paint_snake()?;

        Ok(engine)
    }

    /// Queue a raw key code for a later tick. Unbound codes are kept and
    /// discarded when their tick comes up.
    pub fn submit_key(&mut self, code: keys::Code) {
        self.input.push_tail(code);
    }

    /// Advance the game by one step.
    ///
    /// Once halted, further calls change nothing and report the same collision.
    pub fn tick(&mut self) -> Result<TickResult, GameError> {
        if let GameStatus::Halted(kind) = self.status {
            return Ok(self.result(false, Some(kind)));
        }

        self.handle_input()?;

        let candidate = self.head.moved_in_direction(self.direction);
        let ate_food = match self.grid.get(candidate)? {
            CellStatus::Wall => return Ok(self.halt(CollisionType::Wall)),
            CellStatus::Snake => return Ok(self.halt(CollisionType::SelfCollision)),
            CellStatus::Food => true,
            CellStatus::Empty => false,
        };

        self.head = candidate;
        self.snake.push_tail(candidate);
        self.grid.set(candidate, CellStatus::Snake)?;

        if ate_food {
            self.spawn_food()?;
        } else {
            let vacated = self.snake.pop_head()?;
            self.grid.set(vacated, CellStatus::Empty)?;
        }

        self.paint_snake()?;
        self.interval_ms =
            (self.interval_ms - self.config.interval_step_ms).max(self.config.min_interval_ms);

        Ok(self.result(ate_food, None))
    }

    /// Consume at most one queued key and apply it if it turns onto the
    /// other axis.
    fn handle_input(&mut self) -> Result<(), GameError> {
        if self.input.is_empty() {
            return Ok(());
        }
        let code = self.input.pop_head()?;

        if let Some(requested) = Direction::from_key(code) {
            let turned = self.direction.turned(requested);
            if turned != self.direction {
                trace!(from = ?self.direction, to = ?turned, "direction changed");
                self.direction = turned;
            }
        }
        Ok(())
    }

    fn halt(&mut self, kind: CollisionType) -> TickResult {
        info!(collision = ?kind, length = self.snake.len(), "game halted");
        self.status = GameStatus::Halted(kind);
        self.result(false, Some(kind))
    }

    fn result(&self, ate_food: bool, collision: Option<CollisionType>) -> TickResult {
        TickResult {
            ate_food,
            collision,
            next_interval: self.tick_interval(),
        }
    }

    /// Place one food cell on a random Empty cell of the spawn region.
    ///
    /// Candidates are drawn uniformly until an Empty one turns up. If the
    /// region has no Empty cell left the spawn is skipped and `false` is
    /// returned instead of retrying forever.
    fn spawn_food(&mut self) -> Result<bool, GameError> {
        let low = 2;
        let high = self.config.arena_size as i32 - 2;

        let has_room = self
            .grid
            .positions_with(CellStatus::Empty)
            .any(|pos| (low..=high).contains(&pos.row) && (low..=high).contains(&pos.col));
        if !has_room {
            warn!("no empty cell left to spawn food in");
            return Ok(false);
        }

        loop {
            let candidate = Position::new(
                self.rng.gen_range(low..=high),
                self.rng.gen_range(low..=high),
            );
            if self.grid.get(candidate)? == CellStatus::Empty {
                debug!(row = candidate.row, col = candidate.col, "food spawned");
                self.grid.set(candidate, CellStatus::Food)?;
                return Ok(true);
            }
        }
    }

    /// Mark every segment as Snake and recompute shade hints, newest first.
    ///
    /// The head gets `shade_ceiling` and the tail fades toward `shade_floor`,
    /// so the brightest cell shows where the snake is heading.
    fn paint_snake(&mut self) -> Result<(), GameError> {
        let mut shade = self.config.shade_ceiling;
        self.shades.clear();
        for &segment in self.snake.iter().rev() {
            self.grid.set(segment, CellStatus::Snake)?;
            self.shades.push((segment, shade));
            shade = shade
                .saturating_sub(self.config.shade_step)
                .max(self.config.shade_floor);
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_halted(&self) -> bool {
        self.status.is_halted()
    }

    pub fn status_at(&self, pos: Position) -> Result<CellStatus, GameError> {
        self.grid.get(pos)
    }

    /// Every cell of the arena in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellStatus)> + '_ {
        self.grid.cells()
    }

    pub fn food(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid.positions_with(CellStatus::Food)
    }

    /// Snake segments from oldest to newest
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.iter().copied()
    }

    /// Shade hint per segment, newest first
    pub fn segment_shades(&self) -> &[(Position, u8)] {
        &self.shades
    }

    pub fn head(&self) -> Position {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn pending_inputs(&self) -> usize {
        self.input.len()
    }

    pub fn arena_size(&self) -> usize {
        self.grid.size()
    }

    /// Delay before the next tick, non-increasing over a session
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros((self.interval_ms * 1000.0).round() as u64)
    }
}
