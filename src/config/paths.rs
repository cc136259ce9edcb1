use crate::utils::path::expand_tilde;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = ".tt_config.json";
const DATA_FILE_NAME: &str = ".tt_data.json";

/// Resolved locations of the two JSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub data_file: PathBuf,
}

impl AppPaths {
    /// Build the paths from optional overrides (CLI flag or env var),
    /// falling back to the home directory.
    pub fn resolve(config: Option<&str>, data: Option<&str>) -> Self {
        Self {
            config_file: config
                .map(expand_tilde)
                .unwrap_or_else(|| Self::home_dir().join(CONFIG_FILE_NAME)),
            data_file: data
                .map(expand_tilde)
                .unwrap_or_else(|| Self::home_dir().join(DATA_FILE_NAME)),
        }
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}
