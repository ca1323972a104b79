use std::path::{Path, PathBuf};

use crate::args::DEFAULT_CONFIG_FILES;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, EndpointEntry};

/// Loads the configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when no config file exists or it cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<ConfigFile> {
    if let Some(path) = path {
        return load_config_file(&PathBuf::from(path));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let candidate = PathBuf::from(candidate);
        if candidate.exists() {
            return load_config_file(&candidate);
        }
    }

    Err(AppError::config(ConfigError::NotFound))
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    tracing::debug!("Loaded config from {}", path.display());
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => parse_json(path, &content),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}

// A bare JSON array is accepted as an endpoint list with default settings.
fn parse_json(path: &Path, content: &str) -> AppResult<ConfigFile> {
    let parse_err = |err| {
        AppError::config(ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        })
    };
    let value: serde_json::Value = serde_json::from_str(content).map_err(parse_err)?;
    if value.is_array() {
        let endpoints: Vec<EndpointEntry> = serde_json::from_value(value).map_err(parse_err)?;
        return Ok(ConfigFile {
            endpoints,
            ..ConfigFile::default()
        });
    }
    serde_json::from_value(value).map_err(parse_err)
}
