use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one game or animation. Seeds make tests and benches repeatable.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// Uniform `(x, y)` on a square grid of side `size`. `size` must be non-zero.
    pub fn grid_cell(&mut self, size: usize) -> (usize, usize) {
        (self.rng.random_range(0..size), self.rng.random_range(0..size))
    }

    /// Uniform value in `[0, upper)`; zero when `upper` is not positive.
    pub fn jitter(&mut self, upper: f64) -> f64 {
        if upper <= 0.0 {
            return 0.0;
        }
        self.rng.random::<f64>() * upper
    }
}
