//! Run configuration loaded from TOML, with defaults for every field.
//!
//! Paths in the config are resolved against `data_dir` unless absolute.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::infra::DEFAULT_CAPACITY_COLUMN;
use crate::util::persistence::default_config_file;

const STATION_PLACEHOLDER: &str = "{station}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    pub data_dir: PathBuf,
    pub catalog_file: PathBuf,
    /// Catalog column holding units per cargo run.
    pub capacity_column: String,
    pub output_file: PathBuf,
    pub stations: Vec<String>,
    pub sell_file_pattern: String,
    pub buy_file_pattern: String,
    /// Alternate buy-order file per station, tried when the primary is absent.
    pub buy_file_aliases: HashMap<String, String>,
    pub top_n: usize,
    pub small_load_m3: f64,
    pub medium_load_m3: f64,
    pub color: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            catalog_file: PathBuf::from("input.csv"),
            capacity_column: DEFAULT_CAPACITY_COLUMN.to_string(),
            output_file: PathBuf::from("best_trades.csv"),
            stations: ["jita", "amarr", "dodixie", "rens", "hek", "onnamon"]
                .into_iter()
                .map(String::from)
                .collect(),
            sell_file_pattern: "{station}_sell.csv".to_string(),
            buy_file_pattern: "{station}_buy.csv".to_string(),
            buy_file_aliases: HashMap::from([("rens".to_string(), "rens_but.csv".to_string())]),
            top_n: 20,
            small_load_m3: 4_300.0,
            medium_load_m3: 30_000.0,
            color: true,
        }
    }
}

impl ScanConfig {
    /// Parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, otherwise the per-user config file when one
    /// exists, otherwise defaults. Returns the file that was used.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path).map(|config| (config, Some(path.to_path_buf())));
        }
        match default_config_file().filter(|path| path.exists()) {
            Some(path) => Self::load(&path).map(|config| (config, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut distinct: Vec<&String> = self.stations.iter().collect();
        distinct.sort();
        distinct.dedup();
        if distinct.len() < 2 {
            return Err(ConfigError::Invalid(
                "at least two distinct stations are required".into(),
            ));
        }
        if distinct.len() != self.stations.len() {
            return Err(ConfigError::Invalid("stations must not repeat".into()));
        }
        for pattern in [&self.sell_file_pattern, &self.buy_file_pattern] {
            if !pattern.contains(STATION_PLACEHOLDER) {
                return Err(ConfigError::Invalid(format!(
                    "file pattern `{pattern}` lacks {STATION_PLACEHOLDER}"
                )));
            }
        }
        if !(self.small_load_m3 <= self.medium_load_m3) {
            return Err(ConfigError::Invalid(format!(
                "small_load_m3 ({}) exceeds medium_load_m3 ({})",
                self.small_load_m3, self.medium_load_m3
            )));
        }
        Ok(())
    }

    fn resolve(&self, file: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(file)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.resolve(&self.catalog_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_file)
    }

    pub fn sell_file(&self, station: &str) -> PathBuf {
        self.resolve(self.sell_file_pattern.replace(STATION_PLACEHOLDER, station))
    }

    pub fn buy_file(&self, station: &str) -> PathBuf {
        self.resolve(self.buy_file_pattern.replace(STATION_PLACEHOLDER, station))
    }

    pub fn buy_file_alias(&self, station: &str) -> Option<PathBuf> {
        self.buy_file_aliases.get(station).map(|file| self.resolve(file))
    }
}
