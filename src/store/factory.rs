//! Store factory.
//!
//! Centralizes creation of store instances from code, environment
//! variables, or a TOML configuration file.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "csv-store")]
use super::csv::CsvStore;
use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
use super::memory::MemoryStore;
use super::repository::ReservationStore;

/// Store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// In-memory store
    Memory,
    /// CSV-file-backed store
    Csv,
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "csv" | "file" => Ok(Self::Csv),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

impl StoreType {
    /// Store type from the environment.
    ///
    /// Reads `BOOKING_STORE`. Defaults to Csv when `BOOKING_CSV_PATH` is
    /// set, otherwise Memory.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("BOOKING_STORE") {
            return val.parse().unwrap_or(Self::Memory);
        }

        if std::env::var("BOOKING_CSV_PATH").is_ok() {
            Self::Csv
        } else {
            Self::Memory
        }
    }
}

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store of the given type.
    ///
    /// # Arguments
    /// * `store_type` - Backend to create
    /// * `csv_path` - Backing file path (required for [`StoreType::Csv`])
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ReservationStore>)` - The store instance
    /// * `Err(StoreError::Configuration)` - Missing path or disabled feature
    pub fn create(
        store_type: StoreType,
        csv_path: Option<&Path>,
    ) -> StoreResult<Arc<dyn ReservationStore>> {
        match store_type {
            StoreType::Memory => Ok(Self::create_memory()),
            StoreType::Csv => {
                #[cfg(feature = "csv-store")]
                {
                    let path = csv_path.ok_or_else(|| {
                        StoreError::configuration("CSV store requires a backing file path")
                    })?;
                    Ok(Arc::new(CsvStore::new(path)))
                }
                #[cfg(not(feature = "csv-store"))]
                {
                    let _ = csv_path;
                    Err(StoreError::configuration(
                        "CSV store feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create an in-memory store.
    pub fn create_memory() -> Arc<dyn ReservationStore> {
        Arc::new(MemoryStore::new())
    }

    /// Create a store from environment configuration.
    ///
    /// Reads `BOOKING_STORE` and `BOOKING_CSV_PATH` (default
    /// `bookings.csv` when the CSV store is selected without a path).
    pub fn from_env() -> StoreResult<Arc<dyn ReservationStore>> {
        let store_type = StoreType::from_env();
        let csv_path =
            std::env::var("BOOKING_CSV_PATH").unwrap_or_else(|_| "bookings.csv".to_string());
        Self::create(store_type, Some(Path::new(&csv_path)))
    }

    /// Create a store from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> StoreResult<Arc<dyn ReservationStore>> {
        let config = StoreConfig::from_file(config_path)?;
        let store_type = config.store_type()?;
        Self::create(store_type, Some(Path::new(&config.csv.path)))
    }
}
