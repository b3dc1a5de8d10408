use std::time::Duration;

const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;
const MAX_SIMULATED: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const CURSOR: SpringConfig = SpringConfig::new(300.0, 25.0);
    pub const CURSOR_TRAIL: SpringConfig = SpringConfig::new(200.0, 35.0);
    pub const ALIEN: SpringConfig = SpringConfig::new(150.0, 20.0);

    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }
}

/// One-dimensional damped spring chasing a target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f32) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Integrates in equal substeps of at most `MAX_SUBSTEP_SECS`. Gaps longer than
    /// `MAX_SIMULATED` are treated as `MAX_SIMULATED`; every spring has settled by then.
    pub fn update(&mut self, target: f32, dt: Duration) {
        let secs = dt.min(MAX_SIMULATED).as_secs_f32();
        if secs <= 0.0 {
            return;
        }
        let steps = (secs / MAX_SUBSTEP_SECS).ceil().max(1.0) as u32;
        let h = secs / steps as f32;
        for _ in 0..steps {
            let displacement = self.position - target;
            let acceleration = (-self.config.stiffness * displacement
                - self.config.damping * self.velocity)
                / self.config.mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
        }
    }
}

/// Pointer follower: a snappy dot plus a slower trailing ring.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    target: (f32, f32),
    main: (Spring, Spring),
    trail: (Spring, Spring),
    visible: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            target: (0.0, 0.0),
            main: (
                Spring::new(SpringConfig::CURSOR, 0.0),
                Spring::new(SpringConfig::CURSOR, 0.0),
            ),
            trail: (
                Spring::new(SpringConfig::CURSOR_TRAIL, 0.0),
                Spring::new(SpringConfig::CURSOR_TRAIL, 0.0),
            ),
            visible: false,
        }
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        self.target = (x, y);
        self.visible = true;
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn on_enter(&mut self) {
        self.visible = true;
    }

    pub fn update(&mut self, dt: Duration) {
        self.main.0.update(self.target.0, dt);
        self.main.1.update(self.target.1, dt);
        self.trail.0.update(self.target.0, dt);
        self.trail.1.update(self.target.1, dt);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn main_position(&self) -> (f32, f32) {
        (self.main.0.position(), self.main.1.position())
    }

    pub fn trail_position(&self) -> (f32, f32) {
        (self.trail.0.position(), self.trail.1.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
        ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::CURSOR, 0.0);
        spring.update(100.0, Duration::from_secs(2));
        assert!((spring.position() - 100.0).abs() < 0.5);
    }

    #[test]
    fn test_huge_frame_gap_returns_settled() {
        let mut spring = Spring::new(SpringConfig::CURSOR, 0.0);
        spring.update(10.0, Duration::from_secs(200_000));
        assert!((spring.position() - 10.0).abs() < 0.5);

        let mut trail = Spring::new(SpringConfig::CURSOR_TRAIL, 0.0);
        trail.update(-40.0, Duration::MAX);
        assert!((trail.position() + 40.0).abs() < 0.5);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut spring = Spring::new(SpringConfig::ALIEN, 3.0);
        spring.update(50.0, Duration::ZERO);
        assert_eq!(spring.position(), 3.0);
    }

    #[test]
    fn test_hidden_until_first_move() {
        let mut cursor = CursorFollower::new();
        assert!(!cursor.is_visible());
        cursor.on_move(10.0, 10.0);
        assert!(cursor.is_visible());
        cursor.on_leave();
        assert!(!cursor.is_visible());
        cursor.on_enter();
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_trail_lags_behind_main_cursor() {
        let mut cursor = CursorFollower::new();
        cursor.on_move(80.0, 40.0);
        cursor.update(Duration::from_millis(50));

        let target = (80.0, 40.0);
        assert!(distance(cursor.trail_position(), target) > distance(cursor.main_position(), target));

        cursor.update(Duration::from_secs(3));
        assert!(distance(cursor.main_position(), target) < 0.5);
        assert!(distance(cursor.trail_position(), target) < 0.5);
    }
}
