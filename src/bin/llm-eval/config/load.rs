use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::types::AppConfig;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    pub exists: bool,
}

/// Loads configuration from `path_override`, or from the default location.
///
/// A missing file at the default location yields the defaults; a missing
/// file that was named explicitly is an error.
pub fn load_config(path_override: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    match path_override {
        Some(path) => {
            let config = read_config(&path)?.ok_or_else(|| ConfigError::NotFound(path.clone()))?;
            Ok(LoadedConfig {
                config,
                path,
                exists: true,
            })
        }
        None => {
            let path = default_config_file()?;
            let read = read_config(&path)?;
            Ok(LoadedConfig {
                exists: read.is_some(),
                config: read.unwrap_or_default(),
                path,
            })
        }
    }
}

fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(toml::from_str(&contents)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

fn default_config_file() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
    Ok(home.join(".config").join("llm-eval").join("config.toml"))
}
