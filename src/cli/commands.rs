use std::path::PathBuf;

use serde::Serialize;

use crate::analyzers::{caqi, overall_aqi, DailyResampler, SummaryAnalyzer};
use crate::cleaners::{format_timestamp, DataCleaner};
use crate::cli::args::{Cli, Commands};
use crate::error::{PipelineError, Result};
use crate::loaders::{DataSource, StationFetcher};
use crate::models::{Station, Variable};
use crate::session::SESSION;
use crate::utils::progress::ProgressReporter;
use crate::utils::settings::Settings;

pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;

    match cli.command {
        Commands::Process {
            data_dir,
            base_url,
            station,
            validate_only,
            sample,
        } => {
            let source = resolve_source(data_dir, base_url, &settings)?;
            let station = station.map(|name| parse_station(&name)).transpose()?;

            println!("Processing air-quality data from {}", source);

            let progress = ProgressReporter::new(
                Station::ALL.len() as u64,
                "Retrieving station datasets...",
                false,
            );
            let fetcher = StationFetcher::new(source);
            let outcome = fetcher.fetch_all(Some(&progress)).await?;
            progress.finish_with_message(&format!("Retrieved {} records", outcome.dataset.len()));

            if !outcome.skipped.is_empty() {
                let names: Vec<&str> = outcome.skipped.iter().map(|s| s.name()).collect();
                println!(
                    "\n⚠️  Skipped stations ({}): {}",
                    names.len(),
                    names.join(", ")
                );
            }

            let summary = SummaryAnalyzer::new().summarize(&outcome.dataset);
            println!("\n{}", summary.render());

            if validate_only {
                println!("Validation complete - no cleaning performed");
                return Ok(());
            }

            let mut dataset = outcome.dataset;
            let report = DataCleaner::new()
                .with_significance(settings.significance)
                .clean(&mut dataset)?;
            println!("{}", report.generate_summary());

            if let Some(station) = station {
                dataset.retain_station(station.name());
            }

            if sample > 0 && !dataset.is_empty() {
                println!("\nCleaned rows (showing up to {}):", sample);
                for reading in dataset.readings().iter().take(sample) {
                    let date = reading
                        .date
                        .ok_or_else(|| PipelineError::MissingData("timestamp".to_string()))?;
                    println!(
                        "{}  {:<14} PM2.5={:>7.1} PM10={:>7.1} NO2={:>6.1} O3={:>6.1} TEMP={:>6.1}",
                        format_timestamp(date),
                        reading.station,
                        reading.value(Variable::Pm25).unwrap_or_default(),
                        reading.value(Variable::Pm10).unwrap_or_default(),
                        reading.value(Variable::No2).unwrap_or_default(),
                        reading.value(Variable::O3).unwrap_or_default(),
                        reading.value(Variable::Temp).unwrap_or_default(),
                    );
                }
            }

            println!("\nProcessing complete!");
        }

        Commands::Report {
            data_dir,
            base_url,
            station,
            json,
        } => {
            let source = resolve_source(data_dir, base_url, &settings)?;
            let station = parse_station(&station)?;

            let data = SESSION.cleaned(&source, settings.significance).await?;

            if !data.catalog.has_index_inputs() {
                println!(
                    "⚠️  Dataset is missing pollutant columns required for the air-quality indices."
                );
                return Ok(());
            }

            if !data.dataset.stations().iter().any(|s| s == station.name()) {
                println!("⚠️  No data available for station {}", station);
                return Ok(());
            }

            let daily = DailyResampler::new().resample(&data.dataset, station.name())?;
            let latest = match daily.last() {
                Some(latest) => latest,
                None => {
                    println!("⚠️  No complete days available for station {}", station);
                    return Ok(());
                }
            };

            let caqi_result = caqi(latest.no2, latest.pm10, latest.pm2_5, latest.o3);
            let aqi_result = overall_aqi(latest.no2, latest.pm10, latest.pm2_5, latest.o3);

            if json {
                let output = ReportOutput {
                    station: station.name(),
                    date: latest.date,
                    caqi: caqi_result.value,
                    caqi_category: caqi_result.category.label(),
                    aqi: aqi_result.map(|a| a.value),
                    aqi_category: aqi_result.map(|a| a.category.label()),
                    dominant_pollutant: aqi_result.map(|a| a.dominant.to_string()),
                    temperature: latest.temp,
                };
                let rendered = serde_json::to_string_pretty(&output)
                    .map_err(|e| PipelineError::InvalidFormat(e.to_string()))?;
                println!("{}", rendered);
            } else {
                println!("Station {} on {}", station, latest.date);
                println!(
                    "Common Air Quality Index (CAQI): {:.2} ({})",
                    caqi_result.value, caqi_result.category
                );
                match aqi_result {
                    Some(aqi) => println!(
                        "US AQI: {:.0} ({}) driven by {}",
                        aqi.value, aqi.category, aqi.dominant
                    ),
                    None => {
                        println!("US AQI: undefined (concentrations outside breakpoint tables)")
                    }
                }
                println!(
                    "Latest temperature: {:.2} {}",
                    latest.temp,
                    Variable::Temp.units()
                );
            }
        }

        Commands::Stations => {
            println!("Known monitoring stations:");
            for station in Station::ALL {
                println!("  {}", station);
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    station: &'a str,
    date: chrono::NaiveDate,
    caqi: f64,
    caqi_category: &'a str,
    aqi: Option<f64>,
    aqi_category: Option<&'static str>,
    dominant_pollutant: Option<String>,
    temperature: f64,
}

fn resolve_source(
    data_dir: Option<PathBuf>,
    base_url: Option<String>,
    settings: &Settings,
) -> Result<DataSource> {
    if let Some(dir) = data_dir {
        return Ok(DataSource::local(dir));
    }
    if let Some(base) = base_url {
        return Ok(DataSource::remote(base));
    }
    if let Some(dir) = &settings.data_dir {
        return Ok(DataSource::local(dir));
    }
    if let Some(base) = &settings.base_url {
        return Ok(DataSource::remote(base.clone()));
    }

    Err(PipelineError::Config(config::ConfigError::Message(
        "no data source configured; pass --data-dir or --base-url, or set data_dir/base_url in prsa.toml".to_string(),
    )))
}

fn parse_station(name: &str) -> Result<Station> {
    Station::from_name(name).ok_or_else(|| PipelineError::UnknownStation {
        name: name.to_string(),
    })
}
