use std::path::{Path, PathBuf};

use crate::models::Station;
use crate::utils::filename::station_csv_filename;

/// Where the per-station CSV datasets live: a local directory or a remote
/// HTTP base URL.
#[derive(Debug, Clone)]
pub enum DataSource {
    LocalDir(PathBuf),
    RemoteBase(String),
}

impl DataSource {
    pub fn local(dir: impl AsRef<Path>) -> Self {
        DataSource::LocalDir(dir.as_ref().to_path_buf())
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        DataSource::RemoteBase(base_url.into())
    }

    /// Location of one station's dataset under this source.
    pub fn locate(&self, station: Station) -> String {
        match self {
            DataSource::LocalDir(dir) => dir
                .join(station_csv_filename(station))
                .display()
                .to_string(),
            DataSource::RemoteBase(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                station_csv_filename(station)
            ),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::LocalDir(dir) => write!(f, "{}", dir.display()),
            DataSource::RemoteBase(base) => write!(f, "{}", base),
        }
    }
}
