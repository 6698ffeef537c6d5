/// Significance threshold for the one-sample fill-statistic test
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.005;

/// Dataset file naming
pub const DATASET_FILE_PREFIX: &str = "PRSA_Data";
pub const DATASET_DATE_RANGE: &str = "20130301-20170228";

/// Configuration sources
pub const SETTINGS_FILE: &str = "prsa";
pub const ENV_PREFIX: &str = "PRSA";

/// Display defaults
pub const DEFAULT_SAMPLE_ROWS: usize = 5;
