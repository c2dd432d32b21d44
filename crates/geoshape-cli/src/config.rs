//! Configuration file loading for the CLI
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among [`LOCAL_CONFIG`] and the per-user config directory is used, and
//! a missing file just means default styling.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use geoshape::{GeoshapeError, config::AppConfig};

/// Config file looked up relative to the working directory.
const LOCAL_CONFIG: &str = "geoshape/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for GeoshapeError {
    fn from(err: ConfigError) -> Self {
        GeoshapeError::Config(err.to_string())
    }
}

/// Loads the application configuration.
///
/// # Errors
///
/// Returns [`GeoshapeError::Config`] if an explicit path does not exist or if
/// the selected file is not valid TOML configuration.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, GeoshapeError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        info!(path:% = path.display(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let user_config = ProjectDirs::from("com", "geoshape", "geoshape")
        .map(|dirs| dirs.config_dir().join("config.toml"));
    if user_config.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG)).chain(user_config);
    match first_existing(candidates) {
        Some(path) => {
            info!(path:% = path.display(); "Loading discovered configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_file())
}

fn load_config_file(path: &Path) -> Result<AppConfig, GeoshapeError> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|err: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })?;
    Ok(config)
}
