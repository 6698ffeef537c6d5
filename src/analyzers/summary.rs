use chrono::NaiveDateTime;

use crate::models::{Dataset, Variable};

#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub stations: Vec<String>,
    pub date_range: Option<(NaiveDateTime, NaiveDateTime)>,
    pub missing_counts: Vec<(Variable, usize)>,
}

impl DatasetSummary {
    pub fn missing_percentage(&self, variable: Variable) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        let missing = self
            .missing_counts
            .iter()
            .find(|(v, _)| *v == variable)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        100.0 * missing as f64 / self.total_records as f64
    }

    pub fn render(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Dataset Summary ===\n");
        summary.push_str(&format!("Total records: {}\n", self.total_records));
        summary.push_str(&format!(
            "Stations ({}): {}\n",
            self.stations.len(),
            self.stations.join(", ")
        ));

        if let Some((from, to)) = self.date_range {
            summary.push_str(&format!(
                "Date range: {} .. {}\n",
                from.format("%Y-%m-%d %H:%M:%S"),
                to.format("%Y-%m-%d %H:%M:%S")
            ));
        }

        summary.push_str("\nMissing values per variable:\n");
        for (variable, missing) in &self.missing_counts {
            summary.push_str(&format!(
                "  {:>6}: {} ({:.1}%)\n",
                variable.column_name(),
                missing,
                self.missing_percentage(*variable)
            ));
        }

        summary
    }
}

/// Computes dataset-level statistics for the dashboard's overview pane.
pub struct SummaryAnalyzer;

impl SummaryAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, dataset: &Dataset) -> DatasetSummary {
        let mut date_range: Option<(NaiveDateTime, NaiveDateTime)> = None;
        for reading in dataset.readings() {
            if let Ok(timestamp) = reading.timestamp() {
                date_range = Some(match date_range {
                    None => (timestamp, timestamp),
                    Some((from, to)) => (from.min(timestamp), to.max(timestamp)),
                });
            }
        }

        let missing_counts = Variable::ALL
            .into_iter()
            .map(|variable| {
                let missing = dataset
                    .readings()
                    .iter()
                    .filter(|r| r.is_missing(variable))
                    .count();
                (variable, missing)
            })
            .collect();

        DatasetSummary {
            total_records: dataset.len(),
            stations: dataset.stations(),
            date_range,
            missing_counts,
        }
    }
}

impl Default for SummaryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
