//! CSV export for dashboard frames.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dashboard::FrameRecord;

/// Column header for frame export. `value_watts` matches the replay trace
/// column, so an export can be replayed.
const HEADER: &str = "tick,time_ms,value_watts,left_fill,left_origin,right_fill,\
                      power_text,speed,speed_alert,left_turn,right_turn,high_beam,\
                      clock,theme,odo_m,trip_m,ride_time_ms,max_speed,used_wh,\
                      peak_watts,range_km";

/// Exports frames to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(frames: &[FrameRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(frames, buf)
}

/// Writes frames as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(frames: &[FrameRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for f in frames {
        wtr.write_record(&[
            f.tick.to_string(),
            f.time_ms.to_string(),
            f.value_watts.to_string(),
            f.left_fill.to_string(),
            f.left_origin.to_string(),
            f.right_fill.to_string(),
            f.power_text.clone(),
            f.speed.to_string(),
            f.speed_alert.to_string(),
            f.left_turn.to_string(),
            f.right_turn.to_string(),
            f.high_beam.to_string(),
            f.clock.clone(),
            f.theme.to_string(),
            f.odo_m.to_string(),
            f.trip_m.to_string(),
            f.ride_time_ms.to_string(),
            f.max_speed.to_string(),
            f.used_wh.to_string(),
            f.peak_watts.to_string(),
            f.range_km.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
