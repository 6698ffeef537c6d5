use crate::cleaners::imputer::{ImputationReport, Imputer};
use crate::cleaners::timestamps::assign_timestamps;
use crate::error::Result;
use crate::models::Dataset;
use crate::utils::constants::SIGNIFICANCE_THRESHOLD;

/// Runs the cleaning stages in order: impute missing measurements, then
/// derive the composite timestamp for every row.
pub struct DataCleaner {
    significance: f64,
}

impl DataCleaner {
    pub fn new() -> Self {
        Self {
            significance: SIGNIFICANCE_THRESHOLD,
        }
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    pub fn clean(&self, dataset: &mut Dataset) -> Result<ImputationReport> {
        let report = Imputer::new()
            .with_significance(self.significance)
            .impute(dataset)?;

        assign_timestamps(dataset)?;

        Ok(report)
    }
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new()
    }
}
