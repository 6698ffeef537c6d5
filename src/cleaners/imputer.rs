use std::collections::BTreeMap;

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::Result;
use crate::models::{Dataset, Variable};
use crate::utils::constants::SIGNIFICANCE_THRESHOLD;

/// Which statistic was written into the missing slots of a
/// (station, variable) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStrategy {
    Mean,
    Median,
    Zero,
}

impl FillStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            FillStrategy::Mean => "mean",
            FillStrategy::Median => "median",
            FillStrategy::Zero => "zero",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FillDecision {
    pub station: String,
    pub variable: Variable,
    pub observed: usize,
    pub missing: usize,
    pub fill_value: f64,
    pub strategy: FillStrategy,
}

#[derive(Debug, Clone, Default)]
pub struct ImputationReport {
    pub decisions: Vec<FillDecision>,
}

impl ImputationReport {
    pub fn total_filled(&self) -> usize {
        self.decisions.iter().map(|d| d.missing).sum()
    }

    pub fn pairs_with_missing(&self) -> usize {
        self.decisions.iter().filter(|d| d.missing > 0).count()
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Imputation Report ===\n");
        summary.push_str(&format!(
            "Station/variable pairs evaluated: {}\n",
            self.decisions.len()
        ));
        summary.push_str(&format!(
            "Pairs with missing values: {}\n",
            self.pairs_with_missing()
        ));
        summary.push_str(&format!("Values filled: {}\n", self.total_filled()));

        let mut largest: Vec<&FillDecision> =
            self.decisions.iter().filter(|d| d.missing > 0).collect();
        largest.sort_by(|a, b| b.missing.cmp(&a.missing));

        if !largest.is_empty() {
            summary.push_str("\nLargest fills:\n");
            for (i, decision) in largest.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. {} {}: {} slots filled with {:.2} ({})\n",
                    i + 1,
                    decision.station,
                    decision.variable,
                    decision.missing,
                    decision.fill_value,
                    decision.strategy.label()
                ));
            }
        }

        summary
    }
}

/// Fills missing measurements per (station, variable) pair with a single
/// representative value chosen by a one-sample test.
pub struct Imputer {
    significance: f64,
}

impl Imputer {
    pub fn new() -> Self {
        Self {
            significance: SIGNIFICANCE_THRESHOLD,
        }
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    /// Replace every missing measurement in the dataset. Non-missing values
    /// are never touched; each (station, variable) pair is decided
    /// independently.
    pub fn impute(&self, dataset: &mut Dataset) -> Result<ImputationReport> {
        let mut by_station: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, reading) in dataset.readings().iter().enumerate() {
            by_station
                .entry(reading.station.clone())
                .or_default()
                .push(index);
        }

        let mut decisions = Vec::new();
        for (station, indices) in &by_station {
            for variable in Variable::ALL {
                let observed: Vec<f64> = indices
                    .iter()
                    .filter_map(|&i| dataset.readings()[i].value(variable))
                    .collect();
                let missing = indices.len() - observed.len();

                let (fill_value, strategy) = self.fill_value(&observed);

                if missing > 0 {
                    let readings = dataset.readings_mut();
                    for &i in indices {
                        if readings[i].is_missing(variable) {
                            readings[i].set_value(variable, fill_value);
                        }
                    }
                }

                decisions.push(FillDecision {
                    station: station.clone(),
                    variable,
                    observed: observed.len(),
                    missing,
                    fill_value,
                    strategy,
                });
            }
        }

        Ok(ImputationReport { decisions })
    }

    fn fill_value(&self, observed: &[f64]) -> (f64, FillStrategy) {
        if observed.is_empty() {
            return (0.0, FillStrategy::Zero);
        }
        if observed.len() < 2 {
            return (median(observed), FillStrategy::Median);
        }

        let sample_mean = mean(observed);

        // The hypothesised mean is the sample's own mean: the statistic is
        // zero by construction, the two-sided p-value is 1, and the median
        // branch always wins.
        let p_value = one_sample_p_value(observed, sample_mean);
        if p_value.is_some_and(|p| p < self.significance) {
            (sample_mean, FillStrategy::Mean)
        } else {
            (median(observed), FillStrategy::Median)
        }
    }
}

impl Default for Imputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-sided one-sample t-test p-value. `None` when the sample is too small
/// or has zero variance.
pub fn one_sample_p_value(values: &[f64], hypothesized_mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let sample_mean = mean(values);
    let std_dev = sample_variance(values, sample_mean).sqrt();
    if std_dev == 0.0 {
        return None;
    }

    let t = (sample_mean - hypothesized_mean) / (std_dev / (n as f64).sqrt());
    let dist = StudentsT::new(0.0, 1.0, (n - 1) as f64).ok()?;
    Some(2.0 * (1.0 - dist.cdf(t.abs())))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reading;

    fn dataset_with_gap(values: &[Option<f64>]) -> Dataset {
        let readings = values
            .iter()
            .enumerate()
            .map(|(hour, value)| {
                let mut reading = Reading::new(2013, 3, 1, hour as u32, "Shunyi");
                if let Some(v) = value {
                    reading.set_value(Variable::Pm25, *v);
                }
                reading
            })
            .collect();
        Dataset::from_readings(readings)
    }

    #[test]
    fn test_self_test_p_value_is_one() {
        let values = [4.0, 8.0, 15.0, 16.0, 23.0, 42.0];
        let p = one_sample_p_value(&values, mean(&values)).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_shifted_mean_gives_small_p_value() {
        let values = [4.0, 5.0, 6.0, 5.0, 4.0, 6.0];
        let p = one_sample_p_value(&values, 100.0).unwrap();
        assert!(p < 0.005);
    }

    #[test]
    fn test_degenerate_test_always_selects_median() {
        // Skewed sample: mean 26.5, median 2.5. The fill must be the median.
        let mut dataset = dataset_with_gap(&[
            Some(1.0),
            Some(2.0),
            None,
            Some(3.0),
            Some(100.0),
        ]);

        let report = Imputer::new().impute(&mut dataset).unwrap();

        assert_eq!(dataset.readings()[2].value(Variable::Pm25), Some(2.5));
        let decision = report
            .decisions
            .iter()
            .find(|d| d.variable == Variable::Pm25)
            .unwrap();
        assert_eq!(decision.strategy, FillStrategy::Median);
        assert_eq!(decision.fill_value, 2.5);
        assert_eq!(decision.observed, 4);
        assert_eq!(decision.missing, 1);
    }

    #[test]
    fn test_single_observation_fills_with_itself() {
        let mut dataset = dataset_with_gap(&[None, Some(7.5), None]);
        Imputer::new().impute(&mut dataset).unwrap();

        assert_eq!(dataset.readings()[0].value(Variable::Pm25), Some(7.5));
        assert_eq!(dataset.readings()[2].value(Variable::Pm25), Some(7.5));
    }

    #[test]
    fn test_no_observations_fill_with_zero() {
        let mut dataset = dataset_with_gap(&[None, None]);
        let report = Imputer::new().impute(&mut dataset).unwrap();

        assert_eq!(dataset.readings()[0].value(Variable::Pm25), Some(0.0));
        let decision = report
            .decisions
            .iter()
            .find(|d| d.variable == Variable::Pm25)
            .unwrap();
        assert_eq!(decision.strategy, FillStrategy::Zero);
    }

    #[test]
    fn test_non_missing_values_are_untouched() {
        let mut dataset = dataset_with_gap(&[Some(1.0), None, Some(9.0)]);
        Imputer::new().impute(&mut dataset).unwrap();

        assert_eq!(dataset.readings()[0].value(Variable::Pm25), Some(1.0));
        assert_eq!(dataset.readings()[2].value(Variable::Pm25), Some(9.0));
    }

    #[test]
    fn test_stations_are_imputed_independently() {
        let mut readings = vec![
            Reading::new(2013, 3, 1, 0, "Shunyi").with_value(Variable::Pm25, 10.0),
            Reading::new(2013, 3, 1, 1, "Shunyi").with_value(Variable::Pm25, 20.0),
            Reading::new(2013, 3, 1, 2, "Shunyi"),
            Reading::new(2013, 3, 1, 0, "Wanliu").with_value(Variable::Pm25, 100.0),
            Reading::new(2013, 3, 1, 1, "Wanliu").with_value(Variable::Pm25, 200.0),
            Reading::new(2013, 3, 1, 2, "Wanliu"),
        ];
        readings.iter_mut().for_each(|r| {
            // Keep the other variables quiet so the report stays readable.
            r.set_value(Variable::Temp, 0.0);
        });
        let mut dataset = Dataset::from_readings(readings);

        Imputer::new().impute(&mut dataset).unwrap();

        assert_eq!(dataset.readings()[2].value(Variable::Pm25), Some(15.0));
        assert_eq!(dataset.readings()[5].value(Variable::Pm25), Some(150.0));
    }

    #[test]
    fn test_report_summary_counts() {
        let mut dataset = dataset_with_gap(&[Some(1.0), None, None, Some(3.0)]);
        let report = Imputer::new().impute(&mut dataset).unwrap();

        // Eleven variables evaluated for one station; PM2.5 has two holes,
        // the other ten are entirely missing (4 slots each).
        assert_eq!(report.decisions.len(), 11);
        assert_eq!(report.total_filled(), 2 + 10 * 4);
        assert_eq!(report.pairs_with_missing(), 11);

        let summary = report.generate_summary();
        assert!(summary.contains("Imputation Report"));
        assert!(summary.contains("Values filled: 42"));
    }
}
