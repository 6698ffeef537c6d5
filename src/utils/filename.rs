use crate::models::Station;
use crate::utils::constants::{DATASET_DATE_RANGE, DATASET_FILE_PREFIX};

/// Build a station's CSV file name: PRSA_Data_{station}_{range}.csv
pub fn station_csv_filename(station: Station) -> String {
    format!(
        "{}_{}_{}.csv",
        DATASET_FILE_PREFIX,
        station.name(),
        DATASET_DATE_RANGE
    )
}
