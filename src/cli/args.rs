use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_SAMPLE_ROWS;

#[derive(Parser)]
#[command(name = "prsa-dashboard")]
#[command(about = "Beijing PRSA air-quality data processor and terminal dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve, validate and clean every station dataset
    Process {
        #[arg(long, help = "Directory containing the per-station CSV files")]
        data_dir: Option<PathBuf>,

        #[arg(long, help = "HTTP base URL serving the per-station CSV files")]
        base_url: Option<String>,

        #[arg(short, long, help = "Restrict the preview to a single station")]
        station: Option<String>,

        #[arg(long, default_value = "false", help = "Stop after fetching and validating")]
        validate_only: bool,

        #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS, help = "Cleaned rows to preview")]
        sample: usize,
    },

    /// Daily air-quality report for one station
    Report {
        #[arg(long, help = "Directory containing the per-station CSV files")]
        data_dir: Option<PathBuf>,

        #[arg(long, help = "HTTP base URL serving the per-station CSV files")]
        base_url: Option<String>,

        #[arg(short, long, help = "Station to report on")]
        station: String,

        #[arg(long, default_value = "false", help = "Emit the report as JSON")]
        json: bool,
    },

    /// List the known monitoring stations
    Stations,
}
