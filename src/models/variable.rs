use serde::{Deserialize, Serialize};

/// The eleven numeric measurement columns recorded at every station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    Pm25,
    Pm10,
    So2,
    No2,
    Co,
    O3,
    Temp,
    Pres,
    Dewp,
    Rain,
    Wspm,
}

impl Variable {
    pub const ALL: [Variable; 11] = [
        Variable::Pm25,
        Variable::Pm10,
        Variable::So2,
        Variable::No2,
        Variable::Co,
        Variable::O3,
        Variable::Temp,
        Variable::Pres,
        Variable::Dewp,
        Variable::Rain,
        Variable::Wspm,
    ];

    /// Column header as it appears in the station CSV files.
    pub fn column_name(&self) -> &'static str {
        match self {
            Variable::Pm25 => "PM2.5",
            Variable::Pm10 => "PM10",
            Variable::So2 => "SO2",
            Variable::No2 => "NO2",
            Variable::Co => "CO",
            Variable::O3 => "O3",
            Variable::Temp => "TEMP",
            Variable::Pres => "PRES",
            Variable::Dewp => "DEWP",
            Variable::Rain => "RAIN",
            Variable::Wspm => "WSPM",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Variable::ALL
            .iter()
            .find(|v| v.column_name() == column)
            .copied()
    }

    pub fn units(&self) -> &'static str {
        match self {
            Variable::Pm25 | Variable::Pm10 | Variable::So2 | Variable::No2 | Variable::O3 => {
                "ug/m3"
            }
            Variable::Co => "mg/m3",
            Variable::Temp | Variable::Dewp => "°C",
            Variable::Pres => "hPa",
            Variable::Rain => "mm",
            Variable::Wspm => "m/s",
        }
    }

    /// Pollutant concentrations, as opposed to weather variables.
    pub fn is_pollutant(&self) -> bool {
        matches!(
            self,
            Variable::Pm25
                | Variable::Pm10
                | Variable::So2
                | Variable::No2
                | Variable::Co
                | Variable::O3
        )
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_column_round_trip() {
        for variable in Variable::ALL {
            assert_eq!(Variable::from_column(variable.column_name()), Some(variable));
        }
        assert_eq!(Variable::from_column("wd"), None);
    }

    #[test]
    fn test_pollutant_subset() {
        assert!(Variable::Pm25.is_pollutant());
        assert!(Variable::O3.is_pollutant());
        assert!(!Variable::Temp.is_pollutant());
        assert!(!Variable::Rain.is_pollutant());
        assert_eq!(
            Variable::ALL.iter().filter(|v| v.is_pollutant()).count(),
            6
        );
    }

    #[test]
    fn test_variable_units() {
        assert_eq!(Variable::Pm25.units(), "ug/m3");
        assert_eq!(Variable::Temp.units(), "°C");
        assert_eq!(Variable::Wspm.units(), "m/s");
    }
}
