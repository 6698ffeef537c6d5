use once_cell::sync::OnceCell;

use crate::cleaners::{DataCleaner, ImputationReport};
use crate::error::Result;
use crate::loaders::{ColumnCatalog, DataSource, StationFetcher};
use crate::models::{Dataset, Station};

/// Everything one dashboard session works from.
pub struct CleanedData {
    pub dataset: Dataset,
    pub report: ImputationReport,
    pub catalog: ColumnCatalog,
    pub skipped: Vec<Station>,
}

/// Compute-once holder for the cleaned dataset. The fetch and clean passes
/// run at most once per process; every later access returns the cached
/// result regardless of arguments.
pub struct SessionStore {
    cell: OnceCell<CleanedData>,
}

impl SessionStore {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub async fn cleaned(&self, source: &DataSource, significance: f64) -> Result<&CleanedData> {
        if let Some(data) = self.cell.get() {
            return Ok(data);
        }

        let outcome = StationFetcher::new(source.clone()).fetch_all(None).await?;
        let mut dataset = outcome.dataset;
        let report = DataCleaner::new()
            .with_significance(significance)
            .clean(&mut dataset)?;

        Ok(self.cell.get_or_init(|| CleanedData {
            dataset,
            report,
            catalog: outcome.catalog,
            skipped: outcome.skipped,
        }))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide dashboard session.
pub static SESSION: SessionStore = SessionStore::new();
