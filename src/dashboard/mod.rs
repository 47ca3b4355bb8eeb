//! Dashboard state: the values the UI layer applies to its widgets.

pub mod runner;

use std::fmt;

use log::debug;

use crate::gauge::SpeedReadout;
use crate::indicators::IndicatorLamps;
use crate::power::{FillResult, PowerRange, PowerReading, compute_fill};
use crate::theme::Theme;
use crate::trip::{SidePanel, TripStats};

pub use runner::DemoRunner;

/// Placeholder clock text before the first clock tick.
const CLOCK_PLACEHOLDER: &str = "00:00";

/// Current value of every dynamic dashboard element.
///
/// Owned by the caller and passed to whatever applies it to widgets; there
/// is no process-wide state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    range: PowerRange,
    fill: FillResult,
    speed: SpeedReadout,
    lamps: IndicatorLamps,
    clock_text: String,
    theme: Theme,
    trip: TripStats,
}

impl Dashboard {
    /// Creates a dashboard showing zero power.
    pub fn new(range: PowerRange, theme: Theme) -> Self {
        Self {
            range,
            fill: compute_fill(&range, PowerReading::new(0)),
            speed: SpeedReadout::default(),
            lamps: IndicatorLamps::default(),
            clock_text: CLOCK_PLACEHOLDER.to_string(),
            theme,
            trip: TripStats::default(),
        }
    }

    /// Replaces the trip statistics, e.g. to start from a configured baseline.
    pub fn with_trip(mut self, trip: TripStats) -> Self {
        self.trip = trip;
        self
    }

    /// Maps a new reading onto the power bar.
    pub fn set_power(&mut self, reading: PowerReading) -> &FillResult {
        self.fill = compute_fill(&self.range, reading);
        &self.fill
    }

    pub fn set_speed(&mut self, speed: SpeedReadout) {
        self.speed = speed;
    }

    pub fn set_lamps(&mut self, lamps: IndicatorLamps) {
        self.lamps = lamps;
    }

    pub fn set_clock_text(&mut self, text: String) {
        self.clock_text = text;
    }

    pub fn set_night_mode(&mut self, night: bool) {
        self.theme = Theme::from_night_mode(night);
    }

    /// Flips between night and day and returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!("theme switched to {}", self.theme);
        self.theme
    }

    /// Integrates the shown power and speed over `dt_ms` into the trip.
    pub fn accumulate_trip(&mut self, dt_ms: u64) {
        self.trip
            .record(self.fill.display_text.value_watts(), self.speed.value, dt_ms);
    }

    pub fn range(&self) -> &PowerRange {
        &self.range
    }

    pub fn fill(&self) -> &FillResult {
        &self.fill
    }

    pub fn speed(&self) -> &SpeedReadout {
        &self.speed
    }

    pub fn lamps(&self) -> IndicatorLamps {
        self.lamps
    }

    pub fn clock_text(&self) -> &str {
        &self.clock_text
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn trip(&self) -> &TripStats {
        &self.trip
    }

    pub fn side_panel(&self) -> SidePanel {
        self.trip.panel()
    }

    /// Captures the current state as a flat record.
    pub fn snapshot(&self, tick: u64, time_ms: u64) -> FrameRecord {
        FrameRecord {
            tick,
            time_ms,
            value_watts: self.fill.display_text.value_watts(),
            left_fill: self.fill.left_fill_width,
            left_origin: self.fill.left_fill_origin(&self.range),
            right_fill: self.fill.right_fill_width,
            power_text: self.fill.display_text.to_string(),
            speed: self.speed.value,
            speed_alert: self.speed.alert,
            left_turn: self.lamps.left_turn,
            right_turn: self.lamps.right_turn,
            high_beam: self.lamps.high_beam,
            clock: self.clock_text.clone(),
            theme: self.theme,
            odo_m: self.trip.odo_m(),
            trip_m: self.trip.trip_m(),
            ride_time_ms: self.trip.ride_time_ms(),
            max_speed: self.trip.max_speed(),
            used_wh: self.trip.used_wh(),
            peak_watts: self.trip.peak_watts(),
            range_km: self.trip.range_km(),
        }
    }
}

/// Flat snapshot of the dashboard at one runner step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    /// Runner step index (1-based; step 0 is the initial state).
    pub tick: u64,
    /// Simulated time in milliseconds.
    pub time_ms: u64,
    /// Raw power reading (W).
    pub value_watts: i32,
    /// Regen segment width.
    pub left_fill: i32,
    /// Regen segment start position.
    pub left_origin: i32,
    /// Consumption segment width.
    pub right_fill: i32,
    pub power_text: String,
    pub speed: i32,
    pub speed_alert: bool,
    pub left_turn: bool,
    pub right_turn: bool,
    pub high_beam: bool,
    pub clock: String,
    pub theme: Theme,
    /// Odometer (m).
    pub odo_m: u64,
    /// Trip distance (m).
    pub trip_m: u64,
    /// Time spent moving.
    pub ride_time_ms: u64,
    pub max_speed: i32,
    /// Net battery energy used (Wh).
    pub used_wh: i64,
    /// Highest consumption so far (W).
    pub peak_watts: i32,
    /// Remaining range estimate.
    pub range_km: i64,
}

fn lamp(on: bool, symbol: char) -> char {
    if on { symbol } else { '.' }
}

impl fmt::Display for FrameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>6}ms [{}{}{}] {} | {:>12} | L{:>3}@{:<3} R{:>3} | {:>3}{} | {}",
            self.time_ms,
            lamp(self.left_turn, '<'),
            lamp(self.high_beam, 'H'),
            lamp(self.right_turn, '>'),
            self.clock,
            self.power_text,
            self.left_fill,
            self.left_origin,
            self.right_fill,
            self.speed,
            if self.speed_alert { '!' } else { ' ' },
            self.theme,
        )
    }
}
