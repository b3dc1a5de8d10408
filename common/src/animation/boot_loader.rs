use std::time::Duration;

use super::Animator;
use crate::games::SessionRng;
use crate::log;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(30);
const LOADING_DURATION_MS: f64 = 2500.0;
const PROGRESS_JITTER: f64 = 0.5;
const LINE_DELAY: Duration = Duration::from_millis(200);
const EXPAND_DELAY: Duration = Duration::from_millis(100);
const DONE_DELAY: Duration = Duration::from_millis(800);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    Loading,
    Line,
    Expand,
    Done,
}

/// CRT-style boot sequence: a jittery progress bar, then the screen collapses to a
/// line and expands before the page shows.
#[derive(Clone, Debug)]
pub struct BootLoader {
    phase: LoaderPhase,
    progress: f64,
}

impl Default for BootLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl BootLoader {
    pub fn new() -> Self {
        Self {
            phase: LoaderPhase::Loading,
            progress: 0.0,
        }
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoaderPhase::Done
    }

    /// Zero-padded whole percent, e.g. `"007%"`.
    pub fn percentage_label(&self) -> String {
        format!("{:03}%", self.progress.floor() as u32)
    }

    pub fn skip(&mut self) {
        self.progress = 100.0;
        self.phase = LoaderPhase::Done;
    }

    fn increment() -> f64 {
        100.0 / LOADING_DURATION_MS * PROGRESS_INTERVAL.as_millis() as f64
    }
}

impl Animator for BootLoader {
    fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            LoaderPhase::Loading if self.progress < 100.0 => Some(PROGRESS_INTERVAL),
            LoaderPhase::Loading => Some(LINE_DELAY),
            LoaderPhase::Line => Some(EXPAND_DELAY),
            LoaderPhase::Expand => Some(DONE_DELAY),
            LoaderPhase::Done => None,
        }
    }

    fn step(&mut self, rng: &mut SessionRng) {
        match self.phase {
            LoaderPhase::Loading if self.progress < 100.0 => {
                let jitter = rng.jitter(PROGRESS_JITTER);
                self.progress = (self.progress + Self::increment() + jitter).min(100.0);
            }
            LoaderPhase::Loading => self.phase = LoaderPhase::Line,
            LoaderPhase::Line => self.phase = LoaderPhase::Expand,
            LoaderPhase::Expand => {
                self.phase = LoaderPhase::Done;
                log!("Boot sequence complete");
            }
            LoaderPhase::Done => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reaches_exactly_one_hundred() {
        let mut loader = BootLoader::new();
        let mut rng = SessionRng::new(3);
        let mut steps = 0;
        while loader.progress() < 100.0 {
            let before = loader.progress();
            loader.step(&mut rng);
            assert!(loader.progress() > before);
            steps += 1;
        }
        assert_eq!(loader.progress(), 100.0);
        assert_eq!(loader.phase(), LoaderPhase::Loading);
        assert!((59..=84).contains(&steps), "took {} steps", steps);
    }

    #[test]
    fn test_phase_sequence_and_delays() {
        crate::logger::init_test_logger();
        let mut loader = BootLoader::new();
        let mut rng = SessionRng::new(3);
        while loader.progress() < 100.0 {
            assert_eq!(loader.next_delay(), Some(Duration::from_millis(30)));
            loader.step(&mut rng);
        }

        assert_eq!(loader.next_delay(), Some(Duration::from_millis(200)));
        loader.step(&mut rng);
        assert_eq!(loader.phase(), LoaderPhase::Line);

        assert_eq!(loader.next_delay(), Some(Duration::from_millis(100)));
        loader.step(&mut rng);
        assert_eq!(loader.phase(), LoaderPhase::Expand);

        assert_eq!(loader.next_delay(), Some(Duration::from_millis(800)));
        loader.step(&mut rng);
        assert!(loader.is_done());
        assert_eq!(loader.next_delay(), None);
    }

    #[test]
    fn test_percentage_label_is_zero_padded() {
        let mut loader = BootLoader::new();
        assert_eq!(loader.percentage_label(), "000%");
        loader.progress = 7.9;
        assert_eq!(loader.percentage_label(), "007%");
        loader.skip();
        assert_eq!(loader.percentage_label(), "100%");
    }
}
