//! Replay of recorded power traces.
//!
//! Traces are CSV files with a `value_watts` column. Other columns are
//! ignored, so a frame export from the runner can be fed back in.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::power::PowerReading;

use super::TelemetrySource;

/// Failure to load a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("cannot open trace \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed trace: {0}")]
    Csv(#[from] csv::Error),

    #[error("trace contains no readings")]
    Empty,

    #[error("replay source has no trace path")]
    MissingPath,
}

#[derive(Debug, Deserialize)]
struct TraceRow {
    value_watts: i32,
}

/// Plays back a fixed list of readings.
///
/// Without looping the source ends after the last reading; with looping it
/// wraps to the first one.
#[derive(Debug, Clone)]
pub struct Replay {
    readings: Vec<PowerReading>,
    looping: bool,
    cursor: usize,
}

impl Replay {
    pub fn new(readings: Vec<PowerReading>, looping: bool) -> Self {
        Self {
            readings,
            looping,
            cursor: 0,
        }
    }

    /// Parses a CSV trace from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Csv`] on malformed rows or a missing
    /// `value_watts` column, and [`TraceError::Empty`] if there are no rows.
    pub fn from_csv_reader<R: Read>(reader: R, looping: bool) -> Result<Self, TraceError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut readings = Vec::new();
        for row in rdr.deserialize::<TraceRow>() {
            readings.push(PowerReading::new(row?.value_watts));
        }
        if readings.is_empty() {
            return Err(TraceError::Empty);
        }
        debug!("parsed {} trace readings", readings.len());
        Ok(Self::new(readings, looping))
    }

    /// Loads a CSV trace from disk.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Io`] if the file cannot be opened, otherwise as
    /// [`Replay::from_csv_reader`].
    pub fn from_csv_path(path: &Path, looping: bool) -> Result<Self, TraceError> {
        let file = File::open(path).map_err(|source| TraceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let replay = Self::from_csv_reader(io::BufReader::new(file), looping)?;
        info!(
            "loaded trace \"{}\" ({} readings, looping={looping})",
            path.display(),
            replay.len()
        );
        Ok(replay)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Iterator for Replay {
    type Item = PowerReading;

    fn next(&mut self) -> Option<PowerReading> {
        if self.readings.is_empty() {
            return None;
        }
        if self.cursor >= self.readings.len() {
            if !self.looping {
                return None;
            }
            self.cursor = 0;
        }
        let reading = self.readings[self.cursor];
        self.cursor += 1;
        Some(reading)
    }
}

impl TelemetrySource for Replay {
    fn restart(&mut self) {
        self.cursor = 0;
    }

    fn source_kind(&self) -> &'static str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(values: &[i32]) -> Vec<PowerReading> {
        values.iter().copied().map(PowerReading::new).collect()
    }

    #[test]
    fn finite_replay_ends() {
        let replay = Replay::new(readings(&[100, -200, 300]), false);
        let out: Vec<PowerReading> = replay.collect();
        assert_eq!(out, readings(&[100, -200, 300]));
    }

    #[test]
    fn looping_replay_wraps() {
        let replay = Replay::new(readings(&[1, 2]), true);
        let out: Vec<PowerReading> = replay.take(5).collect();
        assert_eq!(out, readings(&[1, 2, 1, 2, 1]));
    }

    #[test]
    fn restart_rewinds_exhausted_trace() {
        let mut replay = Replay::new(readings(&[5, 6]), false);
        assert_eq!(replay.by_ref().count(), 2);
        assert_eq!(replay.next(), None);
        replay.restart();
        assert_eq!(replay.next(), Some(PowerReading::new(5)));
    }

    #[test]
    fn parses_csv_and_ignores_extra_columns() {
        let data = "tick,value_watts,power_text\n0, 1500 ,+1.500 kW\n1,-250,-0.250 kW\n";
        let replay = Replay::from_csv_reader(data.as_bytes(), false).expect("trace parses");
        let out: Vec<PowerReading> = replay.collect();
        assert_eq!(out, readings(&[1500, -250]));
    }

    #[test]
    fn missing_column_is_csv_error() {
        let data = "watts\n100\n";
        let err = Replay::from_csv_reader(data.as_bytes(), false).unwrap_err();
        assert!(matches!(err, TraceError::Csv(_)));
    }

    #[test]
    fn non_numeric_value_is_csv_error() {
        let data = "value_watts\nlots\n";
        let err = Replay::from_csv_reader(data.as_bytes(), false).unwrap_err();
        assert!(matches!(err, TraceError::Csv(_)));
    }

    #[test]
    fn header_only_is_empty() {
        let err = Replay::from_csv_reader("value_watts\n".as_bytes(), false).unwrap_err();
        assert!(matches!(err, TraceError::Empty));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Replay::from_csv_path(Path::new("/nonexistent/trace.csv"), false).unwrap_err();
        assert!(matches!(err, TraceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/trace.csv"));
    }
}
