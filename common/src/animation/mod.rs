mod alien;
mod boot_loader;
mod cursor;
mod scheduled_task;
mod typing;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::games::SessionRng;

pub use alien::{ALIEN_PATTERN, PixelAlien};
pub use boot_loader::{BootLoader, LoaderPhase};
pub use cursor::{CursorFollower, Spring, SpringConfig};
pub use scheduled_task::ScheduledTask;
pub use typing::{TypingAnimator, TypingTimings};

/// A timer-driven state machine: it says how long to wait, then takes one step.
pub trait Animator: Send + 'static {
    /// Delay before the next step, or `None` once the animation has finished.
    fn next_delay(&self) -> Option<Duration>;

    fn step(&mut self, rng: &mut SessionRng);
}

/// Drives `animator` on its own schedule until it finishes or the task is cancelled.
///
/// The token is re-checked under the lock so a step never lands after cancellation.
pub fn spawn_animator<A: Animator>(animator: Arc<Mutex<A>>, mut rng: SessionRng) -> ScheduledTask {
    ScheduledTask::spawn(move |token| async move {
        loop {
            let Some(delay) = animator.lock().await.next_delay() else {
                break;
            };

            tokio::select! {
                _ = token.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }

            let mut guard = animator.lock().await;
            if token.is_cancelled() {
                break;
            }
            guard.step(&mut rng);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        remaining: u32,
        steps: u32,
    }

    impl Animator for Countdown {
        fn next_delay(&self) -> Option<Duration> {
            (self.remaining > 0).then_some(Duration::from_millis(20))
        }

        fn step(&mut self, _rng: &mut SessionRng) {
            self.remaining -= 1;
            self.steps += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_animator_runs_until_finished() {
        let countdown = Arc::new(Mutex::new(Countdown { remaining: 3, steps: 0 }));
        let task = spawn_animator(countdown.clone(), SessionRng::new(1));

        task.join().await;
        assert_eq!(countdown.lock().await.steps, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_animator_takes_no_more_steps() {
        let countdown = Arc::new(Mutex::new(Countdown { remaining: 100, steps: 0 }));
        let task = spawn_animator(countdown.clone(), SessionRng::new(1));

        tokio::time::sleep(Duration::from_millis(50)).await;
        task.cancel();
        task.join().await;

        let steps = countdown.lock().await.steps;
        assert_eq!(steps, 2);
    }
}
