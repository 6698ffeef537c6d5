use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::error::{PipelineError, Result};
use crate::models::Variable;

/// One hourly row as recorded by a monitoring station.
///
/// Measurement cells may be absent ("NA" in the source files); those
/// deserialize to `None` until the imputer fills them. The composite
/// timestamp leads the record and is populated by the cleaner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Reading {
    #[serde(skip_deserializing)]
    pub date: Option<NaiveDateTime>,

    pub year: i32,

    #[validate(range(min = 1, max = 12))]
    pub month: u32,

    #[validate(range(min = 1, max = 31))]
    pub day: u32,

    #[validate(range(min = 0, max = 23))]
    pub hour: u32,

    #[serde(rename = "PM2.5", default, deserialize_with = "de_measurement")]
    pub pm2_5: Option<f64>,

    #[serde(rename = "PM10", default, deserialize_with = "de_measurement")]
    pub pm10: Option<f64>,

    #[serde(rename = "SO2", default, deserialize_with = "de_measurement")]
    pub so2: Option<f64>,

    #[serde(rename = "NO2", default, deserialize_with = "de_measurement")]
    pub no2: Option<f64>,

    #[serde(rename = "CO", default, deserialize_with = "de_measurement")]
    pub co: Option<f64>,

    #[serde(rename = "O3", default, deserialize_with = "de_measurement")]
    pub o3: Option<f64>,

    #[serde(rename = "TEMP", default, deserialize_with = "de_measurement")]
    pub temp: Option<f64>,

    #[serde(rename = "PRES", default, deserialize_with = "de_measurement")]
    pub pres: Option<f64>,

    #[serde(rename = "DEWP", default, deserialize_with = "de_measurement")]
    pub dewp: Option<f64>,

    #[serde(rename = "RAIN", default, deserialize_with = "de_measurement")]
    pub rain: Option<f64>,

    #[serde(rename = "WSPM", default, deserialize_with = "de_measurement")]
    pub wspm: Option<f64>,

    #[serde(rename = "wd", default, deserialize_with = "de_label")]
    pub wind_direction: Option<String>,

    pub station: String,
}

/// Parse a measurement cell, mapping "NA" and empty cells to `None`.
fn de_measurement<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("NA") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn de_label<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("NA") => Ok(None),
        Some(value) => Ok(Some(value.to_string())),
    }
}

impl Reading {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, station: impl Into<String>) -> Self {
        Self {
            date: None,
            year,
            month,
            day,
            hour,
            pm2_5: None,
            pm10: None,
            so2: None,
            no2: None,
            co: None,
            o3: None,
            temp: None,
            pres: None,
            dewp: None,
            rain: None,
            wspm: None,
            wind_direction: None,
            station: station.into(),
        }
    }

    pub fn with_value(mut self, variable: Variable, value: f64) -> Self {
        self.set_value(variable, value);
        self
    }

    pub fn value(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Pm25 => self.pm2_5,
            Variable::Pm10 => self.pm10,
            Variable::So2 => self.so2,
            Variable::No2 => self.no2,
            Variable::Co => self.co,
            Variable::O3 => self.o3,
            Variable::Temp => self.temp,
            Variable::Pres => self.pres,
            Variable::Dewp => self.dewp,
            Variable::Rain => self.rain,
            Variable::Wspm => self.wspm,
        }
    }

    pub fn set_value(&mut self, variable: Variable, value: f64) {
        let slot = match variable {
            Variable::Pm25 => &mut self.pm2_5,
            Variable::Pm10 => &mut self.pm10,
            Variable::So2 => &mut self.so2,
            Variable::No2 => &mut self.no2,
            Variable::Co => &mut self.co,
            Variable::O3 => &mut self.o3,
            Variable::Temp => &mut self.temp,
            Variable::Pres => &mut self.pres,
            Variable::Dewp => &mut self.dewp,
            Variable::Rain => &mut self.rain,
            Variable::Wspm => &mut self.wspm,
        };
        *slot = Some(value);
    }

    pub fn is_missing(&self, variable: Variable) -> bool {
        self.value(variable).is_none()
    }

    /// Compose the calendar fields into an hourly timestamp.
    pub fn timestamp(&self) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, 0, 0))
            .ok_or_else(|| PipelineError::InvalidTimestamp {
                station: self.station.clone(),
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
            })
    }
}
