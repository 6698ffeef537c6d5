use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Required column '{column}' not found in dataset")]
    MissingColumn { column: String },

    #[error("Unknown station '{name}'")]
    UnknownStation { name: String },

    #[error("Invalid timestamp fields for station {station}: {year}-{month}-{day} hour {hour}")]
    InvalidTimestamp {
        station: String,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("No station datasets were successfully retrieved")]
    NoDataRetrieved,
}
