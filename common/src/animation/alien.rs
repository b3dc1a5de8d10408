use std::f32::consts::PI;
use std::time::Duration;

use super::cursor::{Spring, SpringConfig};

pub const ALIEN_PATTERN: [[u8; 16]; 8] = [
    [0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 0, 1, 1, 1, 1, 0, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0],
];

const POINTER_RANGE: (f32, f32) = (-100.0, 100.0);
const MAX_TILT_DEGREES: f32 = 15.0;
const BOB_PERIOD_SECS: f32 = 2.0;
const BOB_HEIGHT: f32 = 10.0;

/// Space-invader sprite that leans toward the pointer and bobs in place.
#[derive(Clone, Debug)]
pub struct PixelAlien {
    pointer: (f32, f32),
    x: Spring,
    y: Spring,
    hovering: bool,
    elapsed: Duration,
}

impl Default for PixelAlien {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelAlien {
    pub fn new() -> Self {
        Self {
            pointer: (0.0, 0.0),
            x: Spring::new(SpringConfig::ALIEN, 0.0),
            y: Spring::new(SpringConfig::ALIEN, 0.0),
            hovering: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Pointer offset relative to the sprite's centre.
    pub fn on_pointer_move(&mut self, offset_x: f32, offset_y: f32) {
        self.pointer = (offset_x, offset_y);
        self.hovering = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = (0.0, 0.0);
        self.hovering = false;
    }

    pub fn update(&mut self, dt: Duration) {
        self.x.update(self.pointer.0, dt);
        self.y.update(self.pointer.1, dt);
        self.elapsed += dt;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        ALIEN_PATTERN
            .get(row)
            .and_then(|cells| cells.get(col))
            .is_some_and(|cell| *cell == 1)
    }

    /// `(rotate_x, rotate_y)` in degrees.
    pub fn tilt(&self) -> (f32, f32) {
        let rotate_x = map_range(
            self.y.position(),
            POINTER_RANGE,
            (MAX_TILT_DEGREES, -MAX_TILT_DEGREES),
        );
        let rotate_y = map_range(
            self.x.position(),
            POINTER_RANGE,
            (-MAX_TILT_DEGREES, MAX_TILT_DEGREES),
        );
        (rotate_x, rotate_y)
    }

    pub fn eye_offset(&self) -> (f32, f32) {
        (
            map_range(self.x.position(), POINTER_RANGE, (-3.0, 3.0)),
            map_range(self.y.position(), POINTER_RANGE, (-2.0, 2.0)),
        )
    }

    /// Vertical offset of the idle float: 0 -> -10 -> 0 every two seconds.
    pub fn bob_offset(&self) -> f32 {
        let t = (self.elapsed.as_secs_f32() % BOB_PERIOD_SECS) / BOB_PERIOD_SECS;
        let (from, to, local) = if t < 0.5 {
            (0.0, -BOB_HEIGHT, t * 2.0)
        } else {
            (-BOB_HEIGHT, 0.0, t * 2.0 - 1.0)
        };
        from + (to - from) * ease_in_out(local)
    }
}

fn ease_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (PI * t).cos()
}

/// Linear interpolation between ranges, clamped to the output range.
fn map_range(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let progress = ((value - from.0) / (from.1 - from.0)).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * progress
}
