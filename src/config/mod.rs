//! Configuration module
//!
//! Loads the optional biostats.toml file that points at the data file.

mod types;

pub use types::Config;

use crate::error::{BioError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "biostats.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        BioError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective configuration
///
/// An explicit config path must exist. Without one, `biostats.toml` in the
/// working directory is used when present, else the defaults. `data_file`
/// overrides whatever the file says.
pub fn resolve(config_path: Option<PathBuf>, data_file: Option<PathBuf>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => load(&path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(default_path)?
            } else {
                Config::default()
            }
        }
    };

    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }

    debug!("Using data file {}", config.data_file.display());
    Ok(config)
}
