use std::sync::Arc;

use tokio::sync::Mutex;

use crate::animation::{ScheduledTask, spawn_animator};
use crate::games::SessionRng;
use crate::log;
use super::game_state::SnakeGameState;
use super::settings::SnakeSettings;
use super::types::{Direction, GameStatus};

/// Owns the shared game state and the tick loop that advances it.
///
/// The loop starts with the session, ends by itself on game over, and is cancelled on
/// `stop` or when the session is dropped.
pub struct SnakeSession {
    session_id: String,
    state: Arc<Mutex<SnakeGameState>>,
    ticker: Option<ScheduledTask>,
}

impl SnakeSession {
    pub fn new(session_id: impl Into<String>, settings: SnakeSettings) -> Self {
        Self {
            session_id: session_id.into(),
            state: Arc::new(Mutex::new(SnakeGameState::new(settings))),
            ticker: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn start(&mut self, rng: SessionRng) -> bool {
        let started = self.state.lock().await.start();
        if !started {
            return false;
        }

        if let Some(previous) = self.ticker.take() {
            previous.cancel();
        }
        log!("[session:{}] tick loop started (seed {})", self.session_id, rng.seed());
        self.ticker = Some(spawn_animator(self.state.clone(), rng));
        true
    }

    pub async fn set_direction(&self, direction: Direction) -> bool {
        self.state.lock().await.set_direction(direction)
    }

    pub async fn stop(&mut self) -> bool {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
        let stopped = self.state.lock().await.stop();
        if stopped {
            log!("[session:{}] stopped", self.session_id);
        }
        stopped
    }

    pub async fn snapshot(&self) -> SnakeGameState {
        self.state.lock().await.clone()
    }

    pub async fn status(&self) -> GameStatus {
        self.state.lock().await.status()
    }

    /// True while a tick loop is alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|ticker| !ticker.is_finished())
    }
}
