use chrono::NaiveDateTime;

use crate::error::Result;
use crate::models::Dataset;

/// Compose each reading's year/month/day/hour fields into its timestamp.
/// Any row with impossible calendar fields fails the whole pass.
pub fn assign_timestamps(dataset: &mut Dataset) -> Result<()> {
    for reading in dataset.readings_mut() {
        let timestamp = reading.timestamp()?;
        reading.date = Some(timestamp);
    }

    Ok(())
}

/// Render a timestamp the way the dashboard shows it: `YYYY-MM-DD HH:00:00`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
