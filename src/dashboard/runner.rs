//! Timer-driven demo loop over simulated time.

use log::{debug, trace};

use crate::clock::{ClockFace, time_of_day};
use crate::config::{ConfigError, DashboardConfig};
use crate::gauge::SpeedReadout;
use crate::indicators::{LampDriver, TurnSignal};
use crate::telemetry::{Sweep, TelemetrySource};
use crate::theme::Theme;
use crate::timer::Interval;
use crate::trip::{TripBaseline, TripStats};

use super::{Dashboard, FrameRecord};

/// Drives a [`Dashboard`] from a telemetry source and the demo animations.
///
/// Each step advances simulated time by `tick_ms` and fires every timer
/// whose period elapsed: power, speed, indicators, clock and theme. The trip
/// statistics then integrate the shown power and speed over the step. Runs
/// are deterministic for a given configuration and source.
pub struct DemoRunner<S: TelemetrySource> {
    dashboard: Dashboard,
    source: S,
    source_exhausted: bool,
    speed_sweep: Sweep,
    alert_above: i32,
    lamps: LampDriver,
    initial_signal: Option<TurnSignal>,
    initial_high_beam: bool,
    trip_baseline: TripBaseline,
    clock: ClockFace,
    clock_start: (u32, u32),
    initial_theme: Theme,
    auto_toggle_theme: bool,
    tick_ms: u64,
    power_timer: Interval,
    speed_timer: Interval,
    indicator_timer: Interval,
    clock_timer: Interval,
    theme_timer: Interval,
    tick: u64,
    time_ms: u64,
}

impl<S: TelemetrySource> DemoRunner<S> {
    /// Builds a runner from a configuration and a power source.
    ///
    /// The `[source]` section is not consulted; `source` is used as given.
    ///
    /// # Errors
    ///
    /// Returns every validation error if the configuration is invalid.
    pub fn new(config: &DashboardConfig, source: S) -> Result<Self, Vec<ConfigError>> {
        let errors = config.validate_dashboard();
        if !errors.is_empty() {
            return Err(errors);
        }
        let range = config.power_bar.to_range().map_err(|e| {
            vec![ConfigError {
                field: "power_bar".into(),
                message: e.to_string(),
            }]
        })?;

        let t = &config.timers;
        debug!(
            "runner: source={} zero_offset={} tick={}ms",
            source.source_kind(),
            range.zero_offset(),
            t.tick_ms
        );

        let ind = &config.indicators;
        let trip_baseline = config.trip.baseline();

        Ok(Self {
            dashboard: Dashboard::new(range, config.theme.initial)
                .with_trip(TripStats::new(trip_baseline)),
            source,
            source_exhausted: false,
            speed_sweep: Sweep::new(config.speed.min, config.speed.max, config.speed.step),
            alert_above: config.speed.alert_above,
            lamps: LampDriver::new(ind.turn_signal, ind.high_beam),
            initial_signal: ind.turn_signal,
            initial_high_beam: ind.high_beam,
            trip_baseline,
            clock: ClockFace::new(),
            clock_start: (config.clock.start_hour, config.clock.start_minute),
            initial_theme: config.theme.initial,
            auto_toggle_theme: config.theme.auto_toggle,
            tick_ms: t.tick_ms,
            power_timer: Interval::new(t.power_ms),
            speed_timer: Interval::new(t.speed_ms),
            indicator_timer: Interval::new(t.indicators_ms),
            clock_timer: Interval::new(t.clock_ms),
            theme_timer: Interval::new(t.theme_ms),
            tick: 0,
            time_ms: 0,
        })
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    /// `true` once a finite source has run out; the last reading stays on the bar.
    pub fn source_exhausted(&self) -> bool {
        self.source_exhausted
    }

    /// Commands a turn signal, replacing the demo lamp cycle from the next
    /// indicator tick on. The high beam keeps its current state.
    pub fn command_turn_signal(&mut self, signal: TurnSignal) {
        let high_beam = self.dashboard.lamps().high_beam;
        debug!("turn signal commanded: {signal:?}");
        self.lamps.command(signal, high_beam);
    }

    /// Advances one step and returns the resulting frame.
    pub fn step(&mut self) -> FrameRecord {
        self.tick = self.tick.saturating_add(1);
        self.time_ms = self.time_ms.saturating_add(self.tick_ms);

        for _ in 0..self.power_timer.advance(self.tick_ms) {
            self.update_power();
        }
        for _ in 0..self.speed_timer.advance(self.tick_ms) {
            let value = self.speed_sweep.next_value();
            self.dashboard.set_speed(SpeedReadout::new(value, self.alert_above));
        }
        for _ in 0..self.indicator_timer.advance(self.tick_ms) {
            self.dashboard.set_lamps(self.lamps.tick());
        }
        for _ in 0..self.clock_timer.advance(self.tick_ms) {
            let (hour, minute) = time_of_day(self.clock_start.0, self.clock_start.1, self.time_ms);
            self.dashboard.set_clock_text(self.clock.tick(hour, minute));
        }
        let theme_fires = self.theme_timer.advance(self.tick_ms);
        if self.auto_toggle_theme {
            for _ in 0..theme_fires {
                self.dashboard.toggle_theme();
            }
        }

        self.dashboard.accumulate_trip(self.tick_ms);

        let frame = self.dashboard.snapshot(self.tick, self.time_ms);
        trace!("{frame}");
        frame
    }

    /// Runs `ticks` steps and collects every frame.
    pub fn run(&mut self, ticks: usize) -> Vec<FrameRecord> {
        let mut frames = Vec::with_capacity(ticks);
        for _ in 0..ticks {
            frames.push(self.step());
        }
        debug!(
            "ran {ticks} steps to t={}ms (source exhausted: {})",
            self.time_ms, self.source_exhausted
        );
        frames
    }

    /// Rewinds time, animations and the source to their initial state.
    pub fn restart(&mut self) {
        let range = *self.dashboard.range();
        self.dashboard = Dashboard::new(range, self.initial_theme)
            .with_trip(TripStats::new(self.trip_baseline));
        self.source.restart();
        self.source_exhausted = false;
        self.speed_sweep.restart();
        self.lamps = LampDriver::new(self.initial_signal, self.initial_high_beam);
        self.clock = ClockFace::new();
        for timer in [
            &mut self.power_timer,
            &mut self.speed_timer,
            &mut self.indicator_timer,
            &mut self.clock_timer,
            &mut self.theme_timer,
        ] {
            timer.reset();
        }
        self.tick = 0;
        self.time_ms = 0;
    }

    fn update_power(&mut self) {
        match self.source.next() {
            Some(reading) => {
                self.dashboard.set_power(reading);
            }
            None => {
                if !self.source_exhausted {
                    debug!(
                        "{} source exhausted at t={}ms, holding last reading",
                        self.source.source_kind(),
                        self.time_ms
                    );
                    self.source_exhausted = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceKind;
    use crate::power::PowerReading;
    use crate::telemetry::Replay;

    fn demo_runner() -> DemoRunner<Sweep> {
        DemoRunner::new(&DashboardConfig::demo(), Sweep::demo_power())
            .expect("demo config is valid")
    }

    #[test]
    fn power_updates_every_other_tick() {
        let mut runner = demo_runner();
        let frames = runner.run(4);
        assert_eq!(frames[0].value_watts, 0);
        assert_eq!(frames[1].value_watts, -2900);
        assert_eq!(frames[2].value_watts, -2900);
        assert_eq!(frames[3].value_watts, -2800);
    }

    #[test]
    fn speed_updates_every_tick() {
        let mut runner = demo_runner();
        let speeds: Vec<i32> = runner.run(3).iter().map(|f| f.speed).collect();
        assert_eq!(speeds, vec![1, 2, 3]);
    }

    #[test]
    fn speed_alert_after_threshold() {
        let mut runner = demo_runner();
        let frames = runner.run(61);
        assert!(!frames[59].speed_alert);
        assert!(frames[60].speed_alert);
    }

    #[test]
    fn clock_ticks_every_half_second() {
        let mut runner = demo_runner();
        let frames = runner.run(20);
        assert_eq!(frames[8].clock, "00:00");
        assert_eq!(frames[9].clock, "08:00");
        assert_eq!(frames[19].clock, "08 00");
    }

    #[test]
    fn theme_toggles_after_ten_seconds() {
        let mut runner = demo_runner();
        let frames = runner.run(200);
        assert_eq!(frames[198].theme, Theme::Night);
        assert_eq!(frames[199].theme, Theme::Day);
    }

    #[test]
    fn theme_stays_put_without_auto_toggle() {
        let mut cfg = DashboardConfig::demo();
        cfg.theme.auto_toggle = false;
        let mut runner = DemoRunner::new(&cfg, Sweep::demo_power()).expect("valid");
        let frames = runner.run(400);
        assert!(frames.iter().all(|f| f.theme == Theme::Night));
    }

    #[test]
    fn finite_source_holds_last_reading() {
        let trace = Replay::new(vec![PowerReading::new(1200), PowerReading::new(-700)], false);
        let mut runner = DemoRunner::new(&DashboardConfig::demo(), trace).expect("valid");
        let frames = runner.run(10);
        assert!(runner.source_exhausted());
        assert_eq!(frames[9].value_watts, -700);
        assert_eq!(frames[9].left_fill, 17);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = DashboardConfig::demo();
        cfg.power_bar.bar_width = 0;
        let result = DemoRunner::new(&cfg, Sweep::demo_power());
        let errors = result.err().unwrap_or_default();
        assert!(errors.iter().any(|e| e.field == "power_bar.bar_width"));
    }

    #[test]
    fn oversized_tick_is_rejected() {
        let mut cfg = DashboardConfig::demo();
        cfg.timers.tick_ms = u64::MAX / 2 + 1;
        cfg.timers.power_ms = u64::MAX;
        cfg.timers.speed_ms = u64::MAX;
        cfg.timers.indicators_ms = u64::MAX;
        cfg.timers.clock_ms = u64::MAX;
        cfg.timers.theme_ms = u64::MAX;
        let errors = DemoRunner::new(&cfg, Sweep::demo_power())
            .err()
            .unwrap_or_default();
        assert!(errors.iter().any(|e| e.field == "timers.tick_ms"));
    }

    #[test]
    fn injected_source_ignores_source_section() {
        let mut cfg = DashboardConfig::demo();
        cfg.source.kind = SourceKind::Replay;
        cfg.source.step_watts = 0;
        let trace = Replay::new(vec![PowerReading::new(300)], false);
        let mut runner = DemoRunner::new(&cfg, trace).expect("dashboard sections are valid");
        assert_eq!(runner.run(2)[1].value_watts, 300);
    }

    #[test]
    fn configured_turn_signal_blinks() {
        let mut cfg = DashboardConfig::demo();
        cfg.indicators.turn_signal = Some(TurnSignal::Left);
        cfg.indicators.high_beam = true;
        let mut runner = DemoRunner::new(&cfg, Sweep::demo_power()).expect("valid");
        let frames = runner.run(30);
        assert!(!frames[8].left_turn);
        assert!(frames[9].left_turn && frames[9].high_beam);
        assert!(!frames[19].left_turn);
        assert!(frames[29].left_turn);
        assert!(frames.iter().all(|f| !f.right_turn));
    }

    #[test]
    fn commanded_signal_replaces_demo_until_restart() {
        let mut runner = demo_runner();
        let demo = runner.run(10);
        assert!(demo[9].high_beam);

        runner.command_turn_signal(TurnSignal::Hazard);
        let hazard = runner.run(10);
        assert!(hazard[9].left_turn && hazard[9].right_turn && hazard[9].high_beam);

        runner.restart();
        assert_eq!(runner.run(10), demo);
    }

    #[test]
    fn trip_tracks_demo_ride() {
        let mut runner = demo_runner();
        let frames = runner.run(240);
        let last = &frames[239];

        assert_eq!(last.max_speed, 80);
        assert_eq!(frames.iter().map(|f| f.value_watts).max(), Some(last.peak_watts));
        // speed is zero only at step 160
        assert_eq!(last.ride_time_ms, 239 * 50);
        assert!(frames.windows(2).all(|w| w[0].trip_m <= w[1].trip_m));
        assert!(last.trip_m > 0);
        assert_eq!(last.odo_m, last.trip_m);
        assert_eq!(runner.dashboard().side_panel().max_speed_kmh, "80");
    }

    #[test]
    fn trip_starts_from_configured_odometer() {
        let mut cfg = DashboardConfig::demo();
        cfg.trip.odo_start_km = 1500;
        let mut runner = DemoRunner::new(&cfg, Sweep::demo_power()).expect("valid");
        let first = runner.run(1);
        assert_eq!(first[0].odo_m, 1_500_000);
        runner.run(100);
        runner.restart();
        assert_eq!(runner.run(1), first);
    }

    #[test]
    fn restart_reproduces_frames() {
        let mut runner = demo_runner();
        let first = runner.run(250);
        runner.restart();
        let second = runner.run(250);
        assert_eq!(first, second);
    }

    #[test]
    fn coarse_tick_fires_timers_repeatedly() {
        let mut cfg = DashboardConfig::demo();
        cfg.timers.tick_ms = 300;
        let mut runner = DemoRunner::new(&cfg, Sweep::demo_power()).expect("valid");
        let frame = runner.step();
        // three power updates in one 300 ms step
        assert_eq!(frame.value_watts, -2700);
        // six speed updates
        assert_eq!(frame.speed, 6);
    }
}
