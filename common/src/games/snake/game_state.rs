use std::time::Duration;

use crate::animation::Animator;
use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{CellKind, Direction, GameOverReason, GameStatus, Point, TickOutcome};

const MAX_FOOD_PLACEMENT_ATTEMPTS: usize = 100;

/// Single-player snake on a walled square grid.
///
/// Actions that make no sense in the current status (turning while idle, reversing
/// into the body, starting twice) are ignored rather than reported as errors; the
/// returned `bool`/[`TickOutcome`] only tells the caller whether anything changed.
#[derive(Clone, Debug)]
pub struct SnakeGameState {
    settings: SnakeSettings,
    snake: Snake,
    food: Option<Point>,
    direction: Direction,
    pending_direction: Option<Direction>,
    status: GameStatus,
    score: u32,
    high_score: u32,
    game_over_reason: Option<GameOverReason>,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings) -> Self {
        let (x, y) = settings.start_position();
        let (food_x, food_y) = settings.initial_food_position();
        Self {
            settings,
            snake: Snake::new(Point::new(x, y)),
            food: Some(Point::new(food_x, food_y)),
            direction: Direction::Right,
            pending_direction: None,
            status: GameStatus::Idle,
            score: 0,
            high_score: 0,
            game_over_reason: None,
        }
    }

    /// Begins a fresh session from `Idle` or `GameOver`. The high score survives.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Playing {
            return false;
        }

        let (x, y) = self.settings.start_position();
        let (food_x, food_y) = self.settings.initial_food_position();
        self.snake = Snake::new(Point::new(x, y));
        self.food = Some(Point::new(food_x, food_y));
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.score = 0;
        self.game_over_reason = None;
        self.status = GameStatus::Playing;

        log!("Snake session started (high score {})", self.high_score);
        true
    }

    /// Abandons a running session and returns to `Idle`.
    pub fn stop(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        self.record_high_score();
        self.pending_direction = None;
        self.status = GameStatus::Idle;
        log!("Snake session stopped at score {}", self.score);
        true
    }

    /// Queues a turn for the next tick. Requests made between two ticks coalesce:
    /// the most recent accepted one wins. Reversals are dropped.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Playing || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Playing {
            return TickOutcome::Ignored;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let Some(next_head) = self.snake.head().step(self.direction, self.settings.grid_size)
        else {
            return self.finish(GameOverReason::WallCollision);
        };

        if self.snake.occupies(&next_head) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if self.food != Some(next_head) {
            self.snake.pop_tail();
            return TickOutcome::Moved;
        }

        self.score += self.settings.points_per_food;
        self.food = self.place_food(rng);
        match self.food {
            Some(food) => {
                log!(
                    "Ate food at ({}, {}). Score: {}. Next food at ({}, {})",
                    next_head.x,
                    next_head.y,
                    self.score,
                    food.x,
                    food.y
                );
                TickOutcome::AteFood { score: self.score }
            }
            None => self.finish(GameOverReason::BoardFilled),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        self.settings.tick_interval(self.score)
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn cell(&self, point: Point) -> CellKind {
        if self.snake.head() == point {
            CellKind::Head
        } else if self.snake.occupies(&point) {
            CellKind::Body
        } else if self.food == Some(point) {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        self.pending_direction = None;
        self.record_high_score();
        log!(
            "Game over ({:?}) with score {}, high score {}",
            reason,
            self.score,
            self.high_score
        );
        TickOutcome::GameOver(reason)
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Uniform random free cell. Falls back to a row-major scan after a bounded
    /// number of misses so a crowded grid cannot stall the tick.
    fn place_food(&self, rng: &mut SessionRng) -> Option<Point> {
        let size = self.settings.grid_size;

        for _ in 0..MAX_FOOD_PLACEMENT_ATTEMPTS {
            let (x, y) = rng.grid_cell(size);
            let candidate = Point::new(x, y);
            if !self.snake.occupies(&candidate) {
                return Some(candidate);
            }
        }

        (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .find(|candidate| !self.snake.occupies(candidate))
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, segments: &[Point], direction: Direction, food: Point) {
        if let Some(snake) = Snake::from_segments(segments) {
            self.snake = snake;
        }
        self.direction = direction;
        self.pending_direction = None;
        self.food = Some(food);
    }
}

impl Default for SnakeGameState {
    fn default() -> Self {
        Self::new(SnakeSettings::default())
    }
}

impl Animator for SnakeGameState {
    fn next_delay(&self) -> Option<Duration> {
        (self.status == GameStatus::Playing).then(|| self.tick_interval())
    }

    fn step(&mut self, rng: &mut SessionRng) {
        self.tick(rng);
    }
}
