use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{PipelineError, Result};
use crate::models::{DailyRecord, Dataset, Reading, Variable};

/// Aggregates one station's hourly readings into calendar-day records.
///
/// Numeric columns take the arithmetic mean of the hours that carried a
/// value; the wind-direction label takes the first value of the day. A day
/// left without a mean for any measurement is dropped, not re-imputed.
pub struct DailyResampler;

impl DailyResampler {
    pub fn new() -> Self {
        Self
    }

    pub fn resample(&self, dataset: &Dataset, station: &str) -> Result<Vec<DailyRecord>> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&Reading>> = BTreeMap::new();
        for reading in dataset.for_station(station) {
            let timestamp = reading.date.ok_or_else(|| {
                PipelineError::MissingData(
                    "timestamp not assigned; run the cleaner before resampling".to_string(),
                )
            })?;
            by_day.entry(timestamp.date()).or_default().push(reading);
        }

        let mut records = Vec::new();
        'day: for (date, rows) in by_day {
            let mut means = [0.0f64; Variable::ALL.len()];
            for (slot, variable) in Variable::ALL.into_iter().enumerate() {
                let values: Vec<f64> =
                    rows.iter().filter_map(|r| r.value(variable)).collect();
                if values.is_empty() {
                    continue 'day;
                }
                means[slot] = values.iter().sum::<f64>() / values.len() as f64;
            }

            let wind_direction = rows.iter().find_map(|r| r.wind_direction.clone());

            records.push(DailyRecord {
                station: station.to_string(),
                date,
                pm2_5: means[0],
                pm10: means[1],
                so2: means[2],
                no2: means[3],
                co: means[4],
                o3: means[5],
                temp: means[6],
                pres: means[7],
                dewp: means[8],
                rain: means[9],
                wspm: means[10],
                wind_direction,
            });
        }

        Ok(records)
    }
}

impl Default for DailyResampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_reading(day: u32, hour: u32, pm2_5: f64) -> Reading {
        let mut reading = Reading::new(2013, 3, day, hour, "Nongzhanguan");
        for variable in Variable::ALL {
            reading.set_value(variable, 1.0);
        }
        reading.set_value(Variable::Pm25, pm2_5);
        reading.date = reading.timestamp().ok();
        reading
    }

    #[test]
    fn test_daily_mean() {
        let dataset = Dataset::from_readings(vec![
            full_reading(1, 0, 10.0),
            full_reading(1, 1, 20.0),
            full_reading(2, 0, 30.0),
        ]);

        let daily = DailyResampler::new()
            .resample(&dataset, "Nongzhanguan")
            .unwrap();

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2013, 3, 1).unwrap());
        assert_eq!(daily[0].value(Variable::Pm25), 15.0);
        assert_eq!(daily[1].value(Variable::Pm25), 30.0);
    }

    #[test]
    fn test_day_with_an_empty_measurement_is_dropped() {
        let mut gap_day = Reading::new(2013, 3, 2, 0, "Nongzhanguan");
        gap_day.date = gap_day.timestamp().ok();

        let dataset = Dataset::from_readings(vec![full_reading(1, 0, 10.0), gap_day]);

        let daily = DailyResampler::new()
            .resample(&dataset, "Nongzhanguan")
            .unwrap();

        // March 2nd has no measurements at all and must not appear
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2013, 3, 1).unwrap());
    }

    #[test]
    fn test_wind_direction_takes_first_of_day() {
        let mut first = full_reading(1, 0, 10.0);
        first.wind_direction = None;
        let mut second = full_reading(1, 1, 10.0);
        second.wind_direction = Some("NNW".to_string());
        let mut third = full_reading(1, 2, 10.0);
        third.wind_direction = Some("SE".to_string());

        let dataset = Dataset::from_readings(vec![first, second, third]);
        let daily = DailyResampler::new()
            .resample(&dataset, "Nongzhanguan")
            .unwrap();

        assert_eq!(daily[0].wind_direction.as_deref(), Some("NNW"));
    }

    #[test]
    fn test_unassigned_timestamp_is_an_error() {
        let dataset =
            Dataset::from_readings(vec![Reading::new(2013, 3, 1, 0, "Nongzhanguan")]);
        assert!(DailyResampler::new()
            .resample(&dataset, "Nongzhanguan")
            .is_err());
    }

    #[test]
    fn test_other_stations_are_ignored() {
        let mut other = full_reading(1, 0, 99.0);
        other.station = "Dongsi".to_string();

        let dataset = Dataset::from_readings(vec![full_reading(1, 0, 10.0), other]);
        let daily = DailyResampler::new()
            .resample(&dataset, "Nongzhanguan")
            .unwrap();

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].value(Variable::Pm25), 10.0);
    }
}
