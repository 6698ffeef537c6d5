use std::fs::File;

use tracing::{debug, warn};

use crate::error::{PipelineError, Result};
use crate::loaders::csv_reader::{ColumnCatalog, CsvReader};
use crate::loaders::source::DataSource;
use crate::models::{Dataset, Reading, Station};
use crate::utils::progress::ProgressReporter;

/// Result of one load pass over the twelve stations.
#[derive(Debug)]
pub struct FetchOutcome {
    pub dataset: Dataset,
    pub catalog: ColumnCatalog,
    pub skipped: Vec<Station>,
}

/// Retrieves every known station's CSV from the configured source and
/// concatenates the successes. A failed station is logged and skipped;
/// only a fully failed pass is an error.
pub struct StationFetcher {
    source: DataSource,
    client: reqwest::Client,
}

impl StationFetcher {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_all(&self, progress: Option<&ProgressReporter>) -> Result<FetchOutcome> {
        let mut dataset = Dataset::new();
        let mut catalog: Option<ColumnCatalog> = None;
        let mut skipped = Vec::new();

        for (index, station) in Station::ALL.into_iter().enumerate() {
            if let Some(p) = progress {
                p.set_message(&format!("Retrieving {}...", station));
            }

            match self.fetch_station(station).await {
                Ok((readings, station_catalog)) => {
                    debug!(station = %station, rows = readings.len(), "retrieved station dataset");
                    dataset.extend(readings);
                    catalog.get_or_insert(station_catalog);
                }
                Err(error) => {
                    warn!(
                        station = %station,
                        location = %self.source.locate(station),
                        %error,
                        "failed to retrieve data for station"
                    );
                    skipped.push(station);
                }
            }

            if let Some(p) = progress {
                p.update(index as u64 + 1);
            }
        }

        // A pass where every station failed is fatal; an empty-but-parsed
        // table is not.
        let catalog = catalog.ok_or(PipelineError::NoDataRetrieved)?;

        Ok(FetchOutcome {
            dataset,
            catalog,
            skipped,
        })
    }

    async fn fetch_station(&self, station: Station) -> Result<(Vec<Reading>, ColumnCatalog)> {
        let reader = CsvReader::new();
        let location = self.source.locate(station);

        match &self.source {
            DataSource::LocalDir(_) => {
                let file = File::open(&location)?;
                reader.read_from(file)
            }
            DataSource::RemoteBase(_) => {
                let body = self
                    .client
                    .get(&location)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                reader.read_from(body.as_bytes())
            }
        }
    }
}
