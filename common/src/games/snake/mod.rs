mod game_state;
mod input;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::SnakeGameState;
pub use input::{GameKey, direction_for_key};
pub use session::SnakeSession;
pub use settings::{
    BASE_TICK_INTERVAL_MS, GRID_SIZE, MAX_SPEEDUP_MS, MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD,
    SnakeSettings,
};
pub use snake::Snake;
pub use types::{CellKind, Direction, GameOverReason, GameStatus, Point, TickOutcome};
