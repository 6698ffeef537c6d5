use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::utils::constants::{ENV_PREFIX, SETTINGS_FILE, SIGNIFICANCE_THRESHOLD};

/// Runtime configuration, layered from an optional `prsa.toml` and
/// `PRSA_*` environment variables. CLI flags override both.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub base_url: Option<String>,
    pub significance: f64,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("significance", SIGNIFICANCE_THRESHOLD)?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
