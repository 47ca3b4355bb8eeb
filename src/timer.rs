/// A periodic timer advanced by simulated time.
///
/// Mirrors the host toolkit's timer facility: the caller advances time and
/// the interval reports how many periods elapsed, carrying the remainder.
///
/// # Examples
///
/// ```
/// use ebike_dash::timer::Interval;
///
/// let mut every_100 = Interval::new(100);
/// assert_eq!(every_100.advance(50), 0);
/// assert_eq!(every_100.advance(50), 1);
/// assert_eq!(every_100.advance(250), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Interval {
    period_ms: u64,
    elapsed_ms: u64,
}

impl Interval {
    /// Creates an interval firing every `period_ms`.
    ///
    /// # Panics
    ///
    /// Panics if `period_ms` is zero.
    pub fn new(period_ms: u64) -> Self {
        assert!(period_ms > 0, "interval period must be > 0");
        Self {
            period_ms,
            elapsed_ms: 0,
        }
    }

    /// Advances by `dt_ms` and returns the number of times the timer fired.
    ///
    /// The count saturates at `u32::MAX`.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        let fired = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        u32::try_from(fired).unwrap_or(u32::MAX)
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
