use std::io;

use validator::Validate;

use crate::error::{PipelineError, Result};
use crate::models::{Reading, Variable};

/// Columns every station file must carry before any row is accepted.
pub const REQUIRED_COLUMNS: [&str; 5] = ["year", "month", "day", "hour", "station"];

/// Typed record of which optional columns a station file carries.
#[derive(Debug, Clone, Default)]
pub struct ColumnCatalog {
    variables: Vec<Variable>,
    pub has_wind_direction: bool,
}

impl ColumnCatalog {
    pub fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();

        for required in REQUIRED_COLUMNS {
            if !names.contains(&required) {
                return Err(PipelineError::MissingColumn {
                    column: required.to_string(),
                });
            }
        }

        let variables = Variable::ALL
            .into_iter()
            .filter(|v| names.contains(&v.column_name()))
            .collect();

        Ok(Self {
            variables,
            has_wind_direction: names.contains(&"wd"),
        })
    }

    pub fn has(&self, variable: Variable) -> bool {
        self.variables.contains(&variable)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn missing_variables(&self) -> Vec<Variable> {
        Variable::ALL
            .into_iter()
            .filter(|v| !self.has(*v))
            .collect()
    }

    /// Whether the pollutants consumed by the air-quality indices are present.
    pub fn has_index_inputs(&self) -> bool {
        [Variable::No2, Variable::Pm10, Variable::Pm25, Variable::O3]
            .into_iter()
            .all(|v| self.has(v))
    }
}

/// Parses one station's CSV into readings, validating the header schema
/// and each row's calendar fields.
pub struct CsvReader;

impl CsvReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_from<R: io::Read>(&self, input: R) -> Result<(Vec<Reading>, ColumnCatalog)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let catalog = ColumnCatalog::from_headers(csv_reader.headers()?)?;

        let mut readings = Vec::new();
        for row in csv_reader.deserialize::<Reading>() {
            let reading = row?;
            reading.validate()?;
            readings.push(reading);
        }

        Ok((readings, catalog))
    }
}

impl Default for CsvReader {
    fn default() -> Self {
        Self::new()
    }
}
