/// Clock label with a blinking colon separator.
///
/// # Examples
///
/// ```
/// use ebike_dash::clock::ClockFace;
///
/// let mut face = ClockFace::new();
/// assert_eq!(face.tick(9, 5), "09:05");
/// assert_eq!(face.tick(9, 5), "09 05");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClockFace {
    colon_visible: bool,
}

impl ClockFace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the colon and formats `hour:minute`.
    pub fn tick(&mut self, hour: u32, minute: u32) -> String {
        self.colon_visible = !self.colon_visible;
        self.render(hour, minute)
    }

    /// Formats with the current colon state.
    pub fn render(&self, hour: u32, minute: u32) -> String {
        let sep = if self.colon_visible { ':' } else { ' ' };
        format!("{hour:02}{sep}{minute:02}")
    }

    pub fn colon_visible(&self) -> bool {
        self.colon_visible
    }
}

/// Wall-clock `(hour, minute)` after `elapsed_ms` from a start time, wrapping at midnight.
pub fn time_of_day(start_hour: u32, start_minute: u32, elapsed_ms: u64) -> (u32, u32) {
    let start = u64::from(start_hour) * 60 + u64::from(start_minute);
    let total = (start + elapsed_ms / 60_000) % (24 * 60);
    ((total / 60) as u32, (total % 60) as u32)
}
