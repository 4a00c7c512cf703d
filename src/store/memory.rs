//! In-memory reservation store.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::{StoreError, StoreResult};
use super::repository::ReservationStore;
use crate::models::Reservation;

/// In-memory store.
///
/// Keeps reservations in insertion order in a `Vec`, suitable for unit
/// tests and local development. Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<Reservation>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with reservations, in the given order.
    pub fn with_reservations(rows: Vec<Reservation>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }

    /// Number of stored reservations.
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }

    async fn list(&self, category: Option<&str>) -> StoreResult<Vec<Reservation>> {
        let rows = self.rows.read();
        Ok(rows
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .cloned()
            .collect())
    }

    async fn insert(&self, reservation: Reservation) -> StoreResult<()> {
        self.rows.write().push(reservation);
        Ok(())
    }

    async fn delete_at(&self, index: usize) -> StoreResult<Reservation> {
        let mut rows = self.rows.write();
        if index >= rows.len() {
            return Err(StoreError::not_found(index, rows.len()));
        }
        Ok(rows.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(category: &str, venue: &str) -> Reservation {
        Reservation {
            category: category.to_string(),
            kind: String::new(),
            venue: venue.to_string(),
            date: "2026-03-10".to_string(),
            time_slot: "10:00 AM - 12:00 PM".to_string(),
            requested_by: "Dance Society".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let store = MemoryStore::new();
        store.insert(reservation("cultural", "A")).await.unwrap();
        store.insert(reservation("sports", "B")).await.unwrap();
        store.insert(reservation("cultural", "C")).await.unwrap();

        let all = store.list(None).await.unwrap();
        let venues: Vec<&str> = all.iter().map(|r| r.venue.as_str()).collect();
        assert_eq!(venues, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_category_filter_keeps_relative_order() {
        let store = MemoryStore::with_reservations(vec![
            reservation("cultural", "A"),
            reservation("sports", "B"),
            reservation("cultural", "C"),
        ]);

        let cultural = store.list(Some("cultural")).await.unwrap();
        let venues: Vec<&str> = cultural.iter().map(|r| r.venue.as_str()).collect();
        assert_eq!(venues, ["A", "C"]);

        assert!(store.list(Some("academic")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_at() {
        let store = MemoryStore::with_reservations(vec![
            reservation("cultural", "A"),
            reservation("sports", "B"),
        ]);

        let removed = store.delete_at(1).await.unwrap();
        assert_eq!(removed.venue, "B");
        assert_eq!(store.len(), 1);

        let err = store.delete_at(5).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_health_check() {
        assert!(MemoryStore::new().health_check().await.unwrap());
    }
}
