//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use ebike_dash::config::DashboardConfig;
use ebike_dash::power::{PowerRange, SignStyle};

/// Reference bar: -2 kW regen, 6 kW consumption, 200 px, `'+'` sign.
///
/// Zero marker at 50 px, consumption zone 150 px.
pub fn reference_range() -> PowerRange {
    PowerRange::new(-2000, 6000, 200)
        .map(|r| r.with_sign_style(SignStyle::Plus))
        .expect("reference range is valid")
}

/// Demo configuration with the theme timer disabled.
pub fn steady_night_config() -> DashboardConfig {
    let mut cfg = DashboardConfig::demo();
    cfg.theme.auto_toggle = false;
    cfg
}

/// Unique scratch path under the system temp directory.
pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("ebike-dash-{}-{name}", std::process::id()))
}
