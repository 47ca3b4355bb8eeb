//! TOML-based dashboard configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::gauge::DEFAULT_ALERT_ABOVE;
use crate::indicators::TurnSignal;
use crate::power::{PowerRange, RangeError, SignStyle};
use crate::telemetry::{RandomWalk, Replay, SourceError, Sweep, TelemetrySource, TraceError};
use crate::theme::Theme;
use crate::trip::TripBaseline;

/// Longest accepted timer period or step (one day).
pub const MAX_PERIOD_MS: u64 = 86_400_000;

/// A single step may fire any timer at most this many times.
pub const MAX_FIRES_PER_TICK: u64 = 1000;

/// Top-level dashboard configuration parsed from TOML.
///
/// All sections have defaults matching the demo dashboard. Load from TOML
/// with [`DashboardConfig::from_toml_file`] or use [`DashboardConfig::demo`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Power bar bounds and geometry.
    #[serde(default)]
    pub power_bar: PowerBarConfig,
    /// Telemetry source feeding the power bar.
    #[serde(default)]
    pub source: SourceConfig,
    /// Speed gauge sweep and alert threshold.
    #[serde(default)]
    pub speed: SpeedConfig,
    /// Timer periods and run length.
    #[serde(default)]
    pub timers: TimerConfig,
    /// Simulated wall-clock start.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Theme selection.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Turn signal and high beam.
    #[serde(default)]
    pub indicators: IndicatorConfig,
    /// Static side panel values.
    #[serde(default)]
    pub trip: TripConfig,
}

/// Power bar bounds and geometry.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerBarConfig {
    /// Full regeneration power (W, <= 0).
    pub min_watts: i32,
    /// Full consumption power (W, > 0).
    pub max_watts: i32,
    /// Bar width in pixels (> 0).
    pub bar_width: i32,
    /// Sign shown for non-negative readings: `"blank"` or `"plus"`.
    pub sign_style: SignStyle,
}

impl Default for PowerBarConfig {
    fn default() -> Self {
        Self {
            min_watts: -2000,
            max_watts: 6000,
            bar_width: 200,
            sign_style: SignStyle::Blank,
        }
    }
}

impl PowerBarConfig {
    /// Builds the validated range for this bar.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if the bounds or width are invalid.
    pub fn to_range(&self) -> Result<PowerRange, RangeError> {
        PowerRange::new(self.min_watts, self.max_watts, self.bar_width)
            .map(|range| range.with_sign_style(self.sign_style))
    }
}

/// Kind of telemetry source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Sweep,
    RandomWalk,
    Replay,
}

/// Telemetry source parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// `"sweep"`, `"random_walk"` or `"replay"`.
    pub kind: SourceKind,
    /// Lower bound for sweep and random walk (W).
    pub min_watts: i32,
    /// Upper bound for sweep and random walk (W).
    pub max_watts: i32,
    /// Sweep step, or maximum random walk step (W).
    pub step_watts: i32,
    /// Random walk seed.
    pub seed: u64,
    /// CSV trace path for replay.
    pub trace: Option<PathBuf>,
    /// Wrap the trace around instead of holding the last reading.
    pub looping: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Sweep,
            min_watts: -3000,
            max_watts: 9000,
            step_watts: 100,
            seed: 42,
            trace: None,
            looping: false,
        }
    }
}

impl SourceConfig {
    /// Bound violations of the sweep and random walk parameters, as
    /// `(field, reason)`. Replay ignores these fields.
    fn parameter_violations(&self) -> Vec<(&'static str, &'static str)> {
        let mut violations = Vec::new();
        if self.kind == SourceKind::Replay {
            return violations;
        }
        if self.min_watts >= self.max_watts {
            violations.push(("min_watts", "must be < source.max_watts"));
        }
        if self.step_watts <= 0 {
            violations.push(("step_watts", "must be > 0"));
        }
        violations
    }

    /// Builds the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidParameters`] for bad sweep or random walk
    /// bounds, and [`SourceError::Trace`] if a replay trace cannot be loaded.
    pub fn build(&self) -> Result<Box<dyn TelemetrySource>, SourceError> {
        if let Some(&(field, reason)) = self.parameter_violations().first() {
            return Err(SourceError::InvalidParameters { field, reason });
        }
        let source: Box<dyn TelemetrySource> = match self.kind {
            SourceKind::Sweep => {
                Box::new(Sweep::new(self.min_watts, self.max_watts, self.step_watts))
            }
            SourceKind::RandomWalk => Box::new(RandomWalk::new(
                self.min_watts,
                self.max_watts,
                self.step_watts,
                self.seed,
            )),
            SourceKind::Replay => {
                let path = self.trace.as_deref().ok_or(TraceError::MissingPath)?;
                Box::new(Replay::from_csv_path(path, self.looping)?)
            }
        };
        Ok(source)
    }
}

/// Speed gauge sweep and alert threshold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedConfig {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    /// Readout turns to the alert colour strictly above this speed.
    pub alert_above: i32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 80,
            step: 1,
            alert_above: DEFAULT_ALERT_ABOVE,
        }
    }
}

/// Timer periods (milliseconds) and run length.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    /// Simulated time per runner step.
    pub tick_ms: u64,
    pub power_ms: u64,
    pub speed_ms: u64,
    pub indicators_ms: u64,
    pub clock_ms: u64,
    pub theme_ms: u64,
    /// Number of runner steps for a demo run.
    pub run_ticks: usize,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            power_ms: 100,
            speed_ms: 50,
            indicators_ms: 500,
            clock_ms: 500,
            theme_ms: 10_000,
            run_ticks: 240,
        }
    }
}

/// Simulated wall-clock start.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    pub start_hour: u32,
    pub start_minute: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            start_minute: 0,
        }
    }
}

/// Theme selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// `"night"` or `"day"`.
    pub initial: Theme,
    /// Flip between night and day on the theme timer.
    pub auto_toggle: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial: Theme::Night,
            auto_toggle: true,
        }
    }
}

/// Turn signal and high beam state.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndicatorConfig {
    /// `"off"`, `"left"`, `"right"` or `"hazard"`. Without one the lamps run
    /// the demo cycle.
    pub turn_signal: Option<TurnSignal>,
    /// High beam lamp, for a commanded turn signal.
    pub high_beam: bool,
}

/// Static side panel values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TripConfig {
    /// Odometer reading at the start of the run (km).
    pub odo_start_km: u32,
    pub battery_capacity_wh: u32,
    /// Long-run average consumption used for the range estimate.
    pub history_wh_per_km: u32,
}

impl Default for TripConfig {
    fn default() -> Self {
        let baseline = TripBaseline::default();
        Self {
            odo_start_km: 0,
            battery_capacity_wh: baseline.battery_capacity_wh,
            history_wh_per_km: baseline.history_wh_per_km,
        }
    }
}

impl TripConfig {
    pub fn baseline(&self) -> TripBaseline {
        TripBaseline {
            odo_start_m: u64::from(self.odo_start_km) * 1000,
            battery_capacity_wh: self.battery_capacity_wh,
            history_wh_per_km: self.history_wh_per_km,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"power_bar.max_watts"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl DashboardConfig {
    /// Returns the demo dashboard: blank sign, -3..9 kW sweep over a -2..6 kW bar.
    pub fn demo() -> Self {
        Self::default()
    }

    /// Returns the demo dashboard with `'+'` marking non-negative power.
    pub fn plus_sign() -> Self {
        Self {
            power_bar: PowerBarConfig {
                sign_style: SignStyle::Plus,
                ..PowerBarConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns a daylight ride: random-walk telemetry, fixed day theme.
    pub fn steady_day() -> Self {
        Self {
            power_bar: PowerBarConfig {
                sign_style: SignStyle::Plus,
                ..PowerBarConfig::default()
            },
            source: SourceConfig {
                kind: SourceKind::RandomWalk,
                min_watts: -2500,
                max_watts: 7000,
                step_watts: 250,
                ..SourceConfig::default()
            },
            theme: ThemeConfig {
                initial: Theme::Day,
                auto_toggle: false,
            },
            clock: ClockConfig {
                start_hour: 12,
                start_minute: 30,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["demo", "plus_sign", "steady_day"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "demo" => Ok(Self::demo()),
            "plus_sign" => Ok(Self::plus_sign()),
            "steady_day" => Ok(Self::steady_day()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("config", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        let cfg = Self::from_toml_str(&content)?;
        info!("loaded config from \"{}\"", path.display());
        Ok(cfg)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.validate_dashboard();

        let src = &self.source;
        for (field, reason) in src.parameter_violations() {
            errors.push(ConfigError::new(&format!("source.{field}"), reason));
        }
        if src.kind == SourceKind::Replay && src.trace.is_none() {
            errors.push(ConfigError::new("source.trace", "required when kind = \"replay\""));
        }

        errors
    }

    /// Validates every section except `[source]`, for callers that supply
    /// their own telemetry source.
    pub fn validate_dashboard(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(RangeError::InvalidConfiguration { field, reason }) = self.power_bar.to_range() {
            errors.push(ConfigError::new(&format!("power_bar.{field}"), reason));
        }

        let sp = &self.speed;
        if sp.min >= sp.max {
            errors.push(ConfigError::new("speed.min", "must be < speed.max"));
        }
        if sp.step <= 0 {
            errors.push(ConfigError::new("speed.step", "must be > 0"));
        }

        let t = &self.timers;
        let periods = [
            ("timers.power_ms", t.power_ms),
            ("timers.speed_ms", t.speed_ms),
            ("timers.indicators_ms", t.indicators_ms),
            ("timers.clock_ms", t.clock_ms),
            ("timers.theme_ms", t.theme_ms),
        ];
        for (field, period) in [("timers.tick_ms", t.tick_ms)].into_iter().chain(periods) {
            if period == 0 {
                errors.push(ConfigError::new(field, "must be > 0"));
            } else if period > MAX_PERIOD_MS {
                errors.push(ConfigError::new(
                    field,
                    format!("must be <= {MAX_PERIOD_MS} (one day)"),
                ));
            }
        }
        if let Some(shortest) = periods.iter().map(|&(_, p)| p).filter(|&p| p > 0).min() {
            let limit = shortest.saturating_mul(MAX_FIRES_PER_TICK);
            if t.tick_ms > limit {
                errors.push(ConfigError::new(
                    "timers.tick_ms",
                    format!("must be <= {MAX_FIRES_PER_TICK} x the shortest timer period ({limit})"),
                ));
            }
        }

        let c = &self.clock;
        if c.start_hour > 23 {
            errors.push(ConfigError::new("clock.start_hour", "must be in [0, 23]"));
        }
        if c.start_minute > 59 {
            errors.push(ConfigError::new("clock.start_minute", "must be in [0, 59]"));
        }

        let trip = &self.trip;
        if trip.battery_capacity_wh == 0 {
            errors.push(ConfigError::new("trip.battery_capacity_wh", "must be > 0"));
        }
        if trip.history_wh_per_km == 0 {
            errors.push(ConfigError::new("trip.history_wh_per_km", "must be > 0"));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_preset_valid() {
        let cfg = DashboardConfig::demo();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "demo should be valid: {errors:?}");
    }

    #[test]
    fn all_presets_are_valid() {
        for name in DashboardConfig::PRESETS {
            let cfg = DashboardConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn from_preset_unknown() {
        let err = DashboardConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[power_bar]
min_watts = -1000
max_watts = 4000
bar_width = 120
sign_style = "plus"

[source]
kind = "random_walk"
min_watts = -1500
max_watts = 5000
step_watts = 200
seed = 7

[speed]
min = 0
max = 45
step = 3
alert_above = 25

[timers]
tick_ms = 100
power_ms = 200
run_ticks = 10

[clock]
start_hour = 17
start_minute = 45

[theme]
initial = "day"
auto_toggle = false
"#;
        let cfg = DashboardConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.power_bar.bar_width), Some(120));
        assert_eq!(cfg.as_ref().map(|c| c.power_bar.sign_style), Some(SignStyle::Plus));
        assert_eq!(cfg.as_ref().map(|c| c.source.kind), Some(SourceKind::RandomWalk));
        assert_eq!(cfg.as_ref().map(|c| c.theme.initial), Some(Theme::Day));
        // unspecified timer keeps default
        assert_eq!(cfg.as_ref().map(|c| c.timers.theme_ms), Some(10_000));
        assert!(cfg.map(|c| c.validate().is_empty()).unwrap_or(false));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[power_bar]
bar_width = 200
bar_colour = "red"
"#;
        assert!(DashboardConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn unknown_sign_style_rejected() {
        let toml = r#"
[power_bar]
sign_style = "minus"
"#;
        assert!(DashboardConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[power_bar]
max_watts = 8000
"#;
        let cfg = DashboardConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.power_bar.max_watts), Some(8000));
        assert_eq!(cfg.as_ref().map(|c| c.power_bar.min_watts), Some(-2000));
        assert_eq!(cfg.as_ref().map(|c| c.source.step_watts), Some(100));
    }

    #[test]
    fn validation_catches_positive_min() {
        let mut cfg = DashboardConfig::demo();
        cfg.power_bar.min_watts = 500;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "power_bar.min_watts"));
    }

    #[test]
    fn validation_catches_degenerate_range() {
        let mut cfg = DashboardConfig::demo();
        cfg.power_bar.min_watts = 0;
        cfg.power_bar.max_watts = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "power_bar.max_watts"));
    }

    #[test]
    fn validation_catches_zero_width() {
        let mut cfg = DashboardConfig::demo();
        cfg.power_bar.bar_width = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "power_bar.bar_width"));
    }

    #[test]
    fn validation_requires_trace_for_replay() {
        let mut cfg = DashboardConfig::demo();
        cfg.source.kind = SourceKind::Replay;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "source.trace"));
    }

    #[test]
    fn validation_catches_bad_sweep() {
        let mut cfg = DashboardConfig::demo();
        cfg.source.min_watts = 100;
        cfg.source.max_watts = 100;
        cfg.source.step_watts = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "source.min_watts"));
        assert!(errors.iter().any(|e| e.field == "source.step_watts"));
    }

    #[test]
    fn validation_catches_zero_timer() {
        let mut cfg = DashboardConfig::demo();
        cfg.timers.indicators_ms = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "timers.indicators_ms"));
    }

    #[test]
    fn validation_bounds_timer_periods() {
        let mut cfg = DashboardConfig::demo();
        cfg.timers.tick_ms = u64::MAX / 2 + 1;
        cfg.timers.power_ms = u64::MAX;
        cfg.timers.speed_ms = u64::MAX;
        cfg.timers.indicators_ms = u64::MAX;
        cfg.timers.clock_ms = u64::MAX;
        cfg.timers.theme_ms = u64::MAX;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "timers.tick_ms"));
        assert!(errors.iter().any(|e| e.field == "timers.theme_ms"));
    }

    #[test]
    fn validation_limits_fires_per_tick() {
        let mut cfg = DashboardConfig::demo();
        cfg.timers.power_ms = 1;
        cfg.timers.tick_ms = MAX_FIRES_PER_TICK + 1;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "timers.tick_ms"));

        cfg.timers.tick_ms = MAX_FIRES_PER_TICK;
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn dashboard_validation_ignores_source_section() {
        let mut cfg = DashboardConfig::demo();
        cfg.source.kind = SourceKind::Replay;
        assert!(cfg.validate_dashboard().is_empty());
        assert!(cfg.validate().iter().any(|e| e.field == "source.trace"));
    }

    #[test]
    fn validation_catches_bad_trip_baseline() {
        let mut cfg = DashboardConfig::demo();
        cfg.trip.battery_capacity_wh = 0;
        cfg.trip.history_wh_per_km = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "trip.battery_capacity_wh"));
        assert!(errors.iter().any(|e| e.field == "trip.history_wh_per_km"));
    }

    #[test]
    fn indicator_and_trip_sections_parse() {
        let toml = r#"
[indicators]
turn_signal = "hazard"
high_beam = true

[trip]
odo_start_km = 1234
battery_capacity_wh = 500
"#;
        let cfg = DashboardConfig::from_toml_str(toml).ok();
        assert_eq!(
            cfg.as_ref().and_then(|c| c.indicators.turn_signal),
            Some(TurnSignal::Hazard)
        );
        let baseline = cfg.as_ref().map(|c| c.trip.baseline());
        assert_eq!(baseline.map(|b| b.odo_start_m), Some(1_234_000));
        assert_eq!(baseline.map(|b| b.history_wh_per_km), Some(12));
    }

    #[test]
    fn indicators_default_to_demo_cycle() {
        assert_eq!(DashboardConfig::demo().indicators.turn_signal, None);
    }

    #[test]
    fn validation_catches_bad_clock() {
        let mut cfg = DashboardConfig::demo();
        cfg.clock.start_hour = 24;
        cfg.clock.start_minute = 60;
        let errors = cfg.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn steady_day_is_fixed_day_theme() {
        let cfg = DashboardConfig::steady_day();
        assert_eq!(cfg.theme.initial, Theme::Day);
        assert!(!cfg.theme.auto_toggle);
        assert_eq!(cfg.source.kind, SourceKind::RandomWalk);
    }

    #[test]
    fn power_bar_builds_range_with_sign_style() {
        let range = DashboardConfig::plus_sign().power_bar.to_range().ok();
        assert_eq!(range.map(|r| r.zero_offset()), Some(50));
        assert_eq!(range.map(|r| r.sign_style()), Some(SignStyle::Plus));
    }

    #[test]
    fn builds_configured_sources() {
        let sweep = DashboardConfig::demo().source.build().ok();
        assert_eq!(sweep.as_ref().map(|s| s.source_kind()), Some("sweep"));

        let walk = DashboardConfig::steady_day().source.build().ok();
        assert_eq!(walk.as_ref().map(|s| s.source_kind()), Some("random_walk"));
    }

    #[test]
    fn unvalidated_zero_step_fails_to_build() {
        let cfg = DashboardConfig::from_toml_str("[source]\nstep_watts = 0").ok();
        let result = cfg.map(|c| c.source.build());
        assert!(matches!(
            result,
            Some(Err(SourceError::InvalidParameters { field: "step_watts", .. }))
        ));
    }

    #[test]
    fn unvalidated_inverted_walk_fails_to_build() {
        let mut cfg = DashboardConfig::steady_day();
        cfg.source.min_watts = 7000;
        cfg.source.max_watts = -2500;
        let err = cfg.source.build().err();
        assert!(matches!(
            err,
            Some(SourceError::InvalidParameters { field: "min_watts", .. })
        ));
    }

    #[test]
    fn replay_without_path_fails_to_build() {
        let mut cfg = DashboardConfig::demo();
        cfg.source.kind = SourceKind::Replay;
        cfg.source.step_watts = 0;
        let err = cfg.source.build().err();
        assert!(matches!(err, Some(SourceError::Trace(TraceError::MissingPath))));
    }
}
