//! E-bike dashboard data layer: power bar mapping, telemetry sources and
//! the timer-driven dashboard state.

pub mod clock;
pub mod config;
/// Dashboard state and the demo runner.
pub mod dashboard;
pub mod gauge;
pub mod indicators;
pub mod io;
/// Bipolar power bar mapping.
pub mod power;
/// Restartable power telemetry sources.
pub mod telemetry;
pub mod theme;
pub mod timer;
pub mod trip;
