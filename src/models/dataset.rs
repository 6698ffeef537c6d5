use std::collections::BTreeSet;

use crate::models::Reading;

/// The unified table: every successfully retrieved station's readings,
/// concatenated in retrieval order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    readings: Vec<Reading>,
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self { readings }
    }

    pub fn push(&mut self, reading: Reading) {
        self.readings.push(reading);
    }

    pub fn extend(&mut self, readings: Vec<Reading>) {
        self.readings.extend(readings);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn readings_mut(&mut self) -> &mut [Reading] {
        &mut self.readings
    }

    /// Sorted unique station identifiers present in the table.
    pub fn stations(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.readings.iter().map(|r| r.station.as_str()).collect();
        unique.into_iter().map(str::to_string).collect()
    }

    pub fn for_station<'a>(&'a self, station: &'a str) -> impl Iterator<Item = &'a Reading> {
        self.readings.iter().filter(move |r| r.station == station)
    }

    pub fn retain_station(&mut self, station: &str) {
        self.readings.retain(|r| r.station == station);
    }
}
