//! File-backed reservation store over the CSV row schema.
//!
//! The backing file uses the `Category,Type,Venue,Date,Time Slot,Requested By`
//! header. Files written without the optional `Category`/`Type` columns load
//! cleanly; a missing or empty file is an empty store, not an error.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::repository::ReservationStore;
use crate::models::Reservation;

/// On-disk row shape. Kept separate from the domain type so the column
/// naming of the persistence schema stays out of the core.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Type", default)]
    kind: String,
    #[serde(rename = "Venue")]
    venue: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Time Slot")]
    time_slot: String,
    #[serde(rename = "Requested By")]
    requested_by: String,
}

impl From<CsvRow> for Reservation {
    fn from(row: CsvRow) -> Self {
        Reservation {
            category: row.category,
            kind: row.kind,
            venue: row.venue,
            date: row.date,
            time_slot: row.time_slot,
            requested_by: row.requested_by,
        }
    }
}

impl From<&Reservation> for CsvRow {
    fn from(r: &Reservation) -> Self {
        CsvRow {
            category: r.category.clone(),
            kind: r.kind.clone(),
            venue: r.venue.clone(),
            date: r.date.clone(),
            time_slot: r.time_slot.clone(),
            requested_by: r.requested_by.clone(),
        }
    }
}

/// CSV-file-backed store.
///
/// Every mutation rewrites the whole file: the new contents are written to a
/// sibling temp file and renamed over the original, so a failed write leaves
/// the previous file intact and never a partial record.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store backed by the given file. The file is created on the
    /// first successful insert; it does not need to exist beforehand.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<Vec<Reservation>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no bookings file at {}, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if metadata.len() == 0 {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| StoreError::storage(format!("Failed to open bookings file: {}", e)))?;
        let mut rows = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            let row = record
                .map_err(|e| StoreError::storage(format!("Failed to parse bookings file: {}", e)))?;
            rows.push(Reservation::from(row));
        }
        Ok(rows)
    }

    fn persist(&self, rows: &[Reservation]) -> StoreResult<()> {
        let tmp_path = self.path.with_extension("tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp_path).map_err(|e| {
                StoreError::storage(format!("Failed to write bookings file: {}", e))
            })?;
            for row in rows {
                writer.serialize(CsvRow::from(row)).map_err(|e| {
                    StoreError::storage(format!("Failed to write bookings file: {}", e))
                })?;
            }
            writer
                .flush()
                .map_err(|e| StoreError::storage(format!("Failed to flush bookings file: {}", e)))?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for CsvStore {
    async fn health_check(&self) -> StoreResult<bool> {
        // Readable-or-absent is healthy; an unreadable file is not.
        match fs::metadata(&self.path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn list(&self, category: Option<&str>) -> StoreResult<Vec<Reservation>> {
        let rows = self.load()?;
        Ok(rows
            .into_iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .collect())
    }

    async fn insert(&self, reservation: Reservation) -> StoreResult<()> {
        let mut rows = self.load()?;
        rows.push(reservation);
        self.persist(&rows)
    }

    async fn delete_at(&self, index: usize) -> StoreResult<Reservation> {
        let mut rows = self.load()?;
        if index >= rows.len() {
            return Err(StoreError::not_found(index, rows.len()));
        }
        let removed = rows.remove(index);
        self.persist(&rows)?;
        Ok(removed)
    }
}
