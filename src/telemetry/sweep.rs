use crate::power::PowerReading;

use super::TelemetrySource;

/// A triangle wave bouncing between two bounds.
///
/// The value starts at `min`, moves by `step` on every call and reverses
/// direction when it reaches either bound. The first emitted value is
/// `min + step`.
///
/// # Examples
///
/// ```
/// use ebike_dash::telemetry::Sweep;
///
/// let mut sweep = Sweep::new(0, 3, 1);
/// let values: Vec<i32> = (0..7).map(|_| sweep.next_value()).collect();
/// assert_eq!(values, vec![1, 2, 3, 2, 1, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Sweep {
    /// Lower bound (inclusive)
    pub min: i32,
    /// Upper bound (inclusive)
    pub max: i32,
    /// Change per call
    pub step: i32,
    value: i32,
    rising: bool,
}

impl Sweep {
    /// Creates a sweep over `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min >= max` or `step <= 0`.
    pub fn new(min: i32, max: i32, step: i32) -> Self {
        assert!(min < max, "sweep min must be < max");
        assert!(step > 0, "sweep step must be > 0");
        Self {
            min,
            max,
            step,
            value: min,
            rising: true,
        }
    }

    /// Demo power sweep: -3 kW to 9 kW in 100 W steps.
    pub fn demo_power() -> Self {
        Self::new(-3000, 9000, 100)
    }

    /// Demo speed sweep: 0 to 80 in steps of 1.
    pub fn demo_speed() -> Self {
        Self::new(0, 80, 1)
    }

    /// Advances one step and returns the new value.
    pub fn next_value(&mut self) -> i32 {
        let delta = if self.rising { self.step } else { -self.step };
        let next = self.value.saturating_add(delta);

        if next >= self.max {
            self.value = self.max;
            self.rising = false;
        } else if next <= self.min {
            self.value = self.min;
            self.rising = true;
        } else {
            self.value = next;
        }
        self.value
    }
}

impl Iterator for Sweep {
    type Item = PowerReading;

    fn next(&mut self) -> Option<PowerReading> {
        Some(PowerReading::new(self.next_value()))
    }
}

impl TelemetrySource for Sweep {
    fn restart(&mut self) {
        self.value = self.min;
        self.rising = true;
    }

    fn source_kind(&self) -> &'static str {
        "sweep"
    }
}
