use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Variable;

/// One station-day after resampling: every measurement is the arithmetic
/// mean of the hours that carried a value.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRecord {
    pub station: String,
    pub date: NaiveDate,
    pub pm2_5: f64,
    pub pm10: f64,
    pub so2: f64,
    pub no2: f64,
    pub co: f64,
    pub o3: f64,
    pub temp: f64,
    pub pres: f64,
    pub dewp: f64,
    pub rain: f64,
    pub wspm: f64,
    pub wind_direction: Option<String>,
}

impl DailyRecord {
    pub fn value(&self, variable: Variable) -> f64 {
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
}
