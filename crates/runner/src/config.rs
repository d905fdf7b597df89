use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "RUNNER_CONFIG";

#[derive(Debug, Deserialize, Clone)]
pub struct SolverConfig {
    pub reject_negative_weights: bool,
    pub reject_negative_cycles: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub infinity_literal: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub solver: SolverConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Loads configuration from `crates/runner/Config.toml` under the current
/// directory (or `$RUNNER_CONFIG`) and `RUNNER__*` environment variables.
pub fn load_config() -> Result<Config, Error> {
    let config_file_path = match env::var_os(CONFIG_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
            let base_path = env::current_dir().map_err(|e| {
                Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
            })?;
            base_path.join("crates").join("runner").join("Config.toml")
        }
    };

    load_config_from(&config_file_path)
}

/// Loads configuration from an explicit file, layered with environment overrides.
pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .set_default("output.infinity_literal", "INF")
        .and_then(|builder| builder.set_default("logging.level", "info"))
        .and_then(|builder| builder.set_default("logging.json", false))
        .and_then(|builder| builder.set_default("solver.reject_negative_weights", false))
        .and_then(|builder| builder.set_default("solver.reject_negative_cycles", false))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("RUNNER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
