use std::time::Duration;

use super::Animator;
use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            deleting: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

/// Types each role out, holds it, deletes it, and moves on to the next one forever.
#[derive(Clone, Debug)]
pub struct TypingAnimator {
    roles: Vec<String>,
    timings: TypingTimings,
    role_index: usize,
    display: String,
    shown_chars: usize,
    deleting: bool,
}

impl TypingAnimator {
    pub fn new(roles: Vec<String>, timings: TypingTimings) -> Result<Self, String> {
        if roles.is_empty() {
            return Err("Typing animation needs at least one role".to_string());
        }
        Ok(Self {
            roles,
            timings,
            role_index: 0,
            display: String::new(),
            shown_chars: 0,
            deleting: false,
        })
    }

    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }
}

impl Animator for TypingAnimator {
    fn next_delay(&self) -> Option<Duration> {
        let delay = match (self.deleting, self.shown_chars) {
            (false, shown) if shown < self.role_len() => self.timings.typing,
            (false, _) => self.timings.pause,
            (true, 0) => Duration::ZERO,
            (true, _) => self.timings.deleting,
        };
        Some(delay)
    }

    fn step(&mut self, _rng: &mut SessionRng) {
        if !self.deleting {
            match self.current_role().chars().nth(self.shown_chars) {
                Some(next) => {
                    self.display.push(next);
                    self.shown_chars += 1;
                }
                None => self.deleting = true,
            }
        } else if self.display.pop().is_some() {
            self.shown_chars -= 1;
        } else {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(roles: &[&str]) -> TypingAnimator {
        TypingAnimator::new(
            roles.iter().map(|r| r.to_string()).collect(),
            TypingTimings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_roles_rejected() {
        assert!(TypingAnimator::new(vec![], TypingTimings::default()).is_err());
    }

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut typing = animator(&["ab", "c"]);
        let mut rng = SessionRng::new(0);

        assert_eq!(typing.next_delay(), Some(Duration::from_millis(100)));
        typing.step(&mut rng);
        assert_eq!(typing.text(), "a");
        typing.step(&mut rng);
        assert_eq!(typing.text(), "ab");

        assert_eq!(typing.next_delay(), Some(Duration::from_millis(2000)));
        typing.step(&mut rng);
        assert!(typing.is_deleting());

        assert_eq!(typing.next_delay(), Some(Duration::from_millis(50)));
        typing.step(&mut rng);
        assert_eq!(typing.text(), "a");
        typing.step(&mut rng);
        assert_eq!(typing.text(), "");

        assert_eq!(typing.next_delay(), Some(Duration::ZERO));
        typing.step(&mut rng);
        assert_eq!(typing.role_index(), 1);
        assert!(!typing.is_deleting());

        typing.step(&mut rng);
        assert_eq!(typing.text(), "c");
    }

    #[test]
    fn test_wraps_back_to_first_role() {
        let mut typing = animator(&["x"]);
        let mut rng = SessionRng::new(0);
        // type, hold, delete, switch
        for _ in 0..4 {
            typing.step(&mut rng);
        }
        assert_eq!(typing.role_index(), 0);
        typing.step(&mut rng);
        assert_eq!(typing.text(), "x");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut typing = animator(&["héllo"]);
        let mut rng = SessionRng::new(0);
        typing.step(&mut rng);
        typing.step(&mut rng);
        assert_eq!(typing.text(), "hé");
    }
}
