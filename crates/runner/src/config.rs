use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::path::Path;

use super::error::Error;

const DEFAULT_CONFIG_FILE: &str = "Config.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub source: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { source: 0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub vertices: usize,
    pub edges: usize,
    pub min_weight: f64,
    pub max_weight: f64,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            vertices: 16,
            edges: 48,
            min_weight: -1.0,
            max_weight: 10.0,
            seed: 42,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub solver: SolverConfig,
    pub generator: GeneratorConfig,
}

/// Loads configuration from a TOML file and `SSSP_*` environment variables.
///
/// With an explicit `path` the file must exist. Otherwise `Config.toml` in the
/// working directory is read if present, and built-in defaults fill the rest.
/// Nested keys use a double underscore: `SSSP_SOLVER__SOURCE=3`.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let file_source = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at: {}",
                    path.display()
                )));
            }
            File::from(path).required(true)
        }
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let s = ConfigLoader::builder()
        .add_source(file_source)
        .add_source(
            Environment::with_prefix("SSSP")
                .prefix_separator("_")
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
