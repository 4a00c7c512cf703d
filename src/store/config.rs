//! Store configuration file support.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::factory::StoreType;

/// Store configuration from a TOML file.
///
/// ```toml
/// [store]
/// type = "csv"
///
/// [csv]
/// path = "bookings.csv"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub csv: CsvSettings,
}

/// Store type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// Settings for the CSV-backed store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvSettings {
    #[serde(default = "default_csv_path")]
    pub path: String,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            path: default_csv_path(),
        }
    }
}

fn default_csv_path() -> String {
    "bookings.csv".to_string()
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if successful
    /// * `Err(StoreError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// The configured store type.
    pub fn store_type(&self) -> Result<StoreType, StoreError> {
        self.store
            .store_type
            .parse()
            .map_err(StoreError::configuration)
    }
}
