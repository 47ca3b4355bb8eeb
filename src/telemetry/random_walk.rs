use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::power::PowerReading;

use super::TelemetrySource;

/// A bounded random walk, for exercising the bar with irregular input.
///
/// Each reading moves the previous one by a uniform step in
/// `[-max_step, max_step]` and clamps to `[min, max]`. The generator is seeded,
/// so [`TelemetrySource::restart`] replays the exact same sequence.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    pub min: i32,
    pub max: i32,
    pub max_step: i32,
    seed: u64,
    value: i32,
    rng: StdRng,
}

impl RandomWalk {
    /// Creates a walk starting at zero (clamped into the bounds).
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or `max_step <= 0`.
    pub fn new(min: i32, max: i32, max_step: i32, seed: u64) -> Self {
        assert!(min < max, "random walk min must be < max");
        assert!(max_step > 0, "random walk max_step must be > 0");
        Self {
            min,
            max,
            max_step,
            seed,
            value: 0i32.clamp(min, max),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomWalk {
    type Item = PowerReading;

    fn next(&mut self) -> Option<PowerReading> {
        let delta = self.rng.random_range(-self.max_step..=self.max_step);
        self.value = self.value.saturating_add(delta).clamp(self.min, self.max);
        Some(PowerReading::new(self.value))
    }
}

impl TelemetrySource for RandomWalk {
    fn restart(&mut self) {
        self.value = 0i32.clamp(self.min, self.max);
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn source_kind(&self) -> &'static str {
        "random_walk"
    }
}
