//! Trip statistics shown in the dashboard side panels.
//!
//! Distance, energy and ride time are integrated from the speed and power
//! the dashboard is showing. Odometer start, battery capacity and the
//! long-run consumption average are static values from configuration.

use std::fmt;

const MS_PER_HOUR: u64 = 3_600_000;

/// Static side panel values that the runner cannot derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripBaseline {
    /// Odometer reading before the trip (m).
    pub odo_start_m: u64,
    /// Usable battery capacity (Wh).
    pub battery_capacity_wh: u32,
    /// Long-run average consumption (Wh/km), used for the range estimate.
    pub history_wh_per_km: u32,
}

impl Default for TripBaseline {
    fn default() -> Self {
        Self {
            odo_start_m: 0,
            battery_capacity_wh: 1200,
            history_wh_per_km: 12,
        }
    }
}

/// Accumulated trip statistics.
///
/// # Examples
///
/// ```
/// use ebike_dash::trip::{TripBaseline, TripStats};
///
/// let mut trip = TripStats::new(TripBaseline::default());
/// // one hour at 30 km/h drawing 600 W
/// trip.record(600, 30, 3_600_000);
/// assert_eq!(trip.trip_m(), 30_000);
/// assert_eq!(trip.used_wh(), 600);
/// assert_eq!(trip.range_km(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripStats {
    baseline: TripBaseline,
    /// Speed integrated over time, in km/h * ms (3600 per metre).
    distance_kmh_ms: u64,
    /// Power integrated over time, in W * ms (3 600 000 per Wh).
    energy_w_ms: i64,
    ride_time_ms: u64,
    max_speed: i32,
    peak_watts: i32,
}

impl Default for TripStats {
    fn default() -> Self {
        Self::new(TripBaseline::default())
    }
}

impl TripStats {
    pub fn new(baseline: TripBaseline) -> Self {
        Self {
            baseline,
            distance_kmh_ms: 0,
            energy_w_ms: 0,
            ride_time_ms: 0,
            max_speed: 0,
            peak_watts: 0,
        }
    }

    /// Accounts for `dt_ms` spent at the given power (W) and speed (km/h).
    ///
    /// Regeneration (negative power) is credited back to the used energy.
    /// Ride time only runs while moving.
    pub fn record(&mut self, value_watts: i32, speed_kmh: i32, dt_ms: u64) {
        let speed = u64::try_from(speed_kmh).unwrap_or(0);
        self.distance_kmh_ms = self
            .distance_kmh_ms
            .saturating_add(speed.saturating_mul(dt_ms));

        let dt = saturating_i64(dt_ms);
        self.energy_w_ms = self
            .energy_w_ms
            .saturating_add(i64::from(value_watts).saturating_mul(dt));

        if speed > 0 {
            self.ride_time_ms = self.ride_time_ms.saturating_add(dt_ms);
        }
        self.max_speed = self.max_speed.max(speed_kmh);
        self.peak_watts = self.peak_watts.max(value_watts);
    }

    pub fn baseline(&self) -> &TripBaseline {
        &self.baseline
    }

    pub fn trip_m(&self) -> u64 {
        self.distance_kmh_ms / 3600
    }

    pub fn odo_m(&self) -> u64 {
        self.baseline.odo_start_m.saturating_add(self.trip_m())
    }

    /// Time spent moving.
    pub fn ride_time_ms(&self) -> u64 {
        self.ride_time_ms
    }

    pub fn max_speed(&self) -> i32 {
        self.max_speed
    }

    /// Highest consumption seen (W); zero if the trip only regenerated.
    pub fn peak_watts(&self) -> i32 {
        self.peak_watts
    }

    /// Net energy drawn from the battery (Wh); negative after net regeneration.
    pub fn used_wh(&self) -> i64 {
        self.energy_w_ms / MS_PER_HOUR as i64
    }

    /// Trip consumption in Wh/km, or `None` before the first metre.
    pub fn trip_wh_per_km(&self) -> Option<i64> {
        match saturating_i64(self.trip_m()) {
            0 => None,
            trip_m => Some(self.used_wh().saturating_mul(1000) / trip_m),
        }
    }

    /// Remaining range at the long-run average consumption.
    pub fn range_km(&self) -> i64 {
        let capacity = i64::from(self.baseline.battery_capacity_wh);
        let remaining = capacity.saturating_sub(self.used_wh()).clamp(0, capacity);
        match i64::from(self.baseline.history_wh_per_km) {
            0 => 0,
            per_km => remaining / per_km,
        }
    }

    /// Formats every panel value the way the dashboard labels show them.
    pub fn panel(&self) -> SidePanel {
        let ride_s = self.ride_time_ms / 1000;
        SidePanel {
            odo_km: tenths(saturating_i64(self.odo_m()), 1000, 5),
            trip_km: tenths(saturating_i64(self.trip_m()), 1000, 3),
            ride_time: format!(
                "{:02}:{:02}:{:02}",
                ride_s / 3600,
                ride_s / 60 % 60,
                ride_s % 60
            ),
            max_speed_kmh: self.max_speed.to_string(),
            used_kwh: tenths(self.used_wh(), 1000, 1),
            range_km: self.range_km().to_string(),
            avg_wh_per_km: self.baseline.history_wh_per_km.to_string(),
            trip_wh_per_km: self
                .trip_wh_per_km()
                .map_or_else(|| "--".to_string(), |v| v.to_string()),
            peak_kw: format!("{}.{:03}", self.peak_watts / 1000, self.peak_watts % 1000),
            battery_capacity_kwh: tenths(i64::from(self.baseline.battery_capacity_wh), 1000, 1),
        }
    }
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// `value / unit` with one truncated decimal and zero-padded whole part.
fn tenths(value: i64, unit: i64, width: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let unit = unit.unsigned_abs();
    format!("{sign}{:0width$}.{}", abs / unit, abs % unit * 10 / unit)
}

/// Side panel label texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePanel {
    pub odo_km: String,
    pub trip_km: String,
    pub ride_time: String,
    pub max_speed_kmh: String,
    pub used_kwh: String,
    pub range_km: String,
    pub avg_wh_per_km: String,
    pub trip_wh_per_km: String,
    pub peak_kw: String,
    pub battery_capacity_kwh: String,
}

impl fmt::Display for SidePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ODO km       {:>10} | RANGE km     {:>8}", self.odo_km, self.range_km)?;
        writeln!(f, "TRIP km      {:>10} | AVG Wh/km    {:>8}", self.trip_km, self.avg_wh_per_km)?;
        writeln!(f, "RIDE TIME    {:>10} | TRIP Wh/km   {:>8}", self.ride_time, self.trip_wh_per_km)?;
        writeln!(f, "MAX SPD km/h {:>10} | PEAK kW      {:>8}", self.max_speed_kmh, self.peak_kw)?;
        write!(
            f,
            "USED kWh     {:>10} | BATT CAP kWh {:>8}",
            self.used_kwh, self.battery_capacity_kwh
        )
    }
}
