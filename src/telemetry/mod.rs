//! Power telemetry sources feeding the dashboard.
//!
//! A source is an iterator of [`PowerReading`]s that can be rewound. Sources
//! may be infinite (sweeps, random walks) or finite (recorded traces).

pub mod random_walk;
pub mod replay;
pub mod sweep;

use thiserror::Error;

use crate::power::PowerReading;

pub use random_walk::RandomWalk;
pub use replay::{Replay, TraceError};
pub use sweep::Sweep;

/// Failure to build a configured source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid source: {field} {reason}")]
    InvalidParameters {
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Restartable producer of power readings.
pub trait TelemetrySource: Iterator<Item = PowerReading> {
    /// Rewinds the source so it reproduces its sequence from the start.
    fn restart(&mut self);

    /// Short name for logs.
    fn source_kind(&self) -> &'static str;
}

/// Boxed sources are sources, so the runner can take a source picked at runtime.
impl<S: TelemetrySource + ?Sized> TelemetrySource for Box<S> {
    fn restart(&mut self) {
        (**self).restart();
    }

    fn source_kind(&self) -> &'static str {
        (**self).source_kind()
    }
}
