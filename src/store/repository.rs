//! The store adapter contract.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::models::Reservation;

/// Abstract reservation store.
///
/// The booking core depends on the persistence layer only through these
/// primitive operations; backends may be in-memory, file-backed, or remote.
///
/// # Ordering
/// `list` ordering is not guaranteed beyond being stable within one logical
/// request, which is what makes positional deletes meaningful. The bundled
/// backends return insertion order.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Check that the backing storage is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` if the store is healthy
    /// * `Err(StoreError)` if the check itself failed
    async fn health_check(&self) -> StoreResult<bool>;

    /// List reservations, optionally restricted to one category.
    ///
    /// # Arguments
    /// * `category` - When `Some`, only reservations whose `category` field
    ///   equals the filter are returned, in the same relative order as the
    ///   unfiltered listing.
    ///
    /// # Returns
    /// * `Ok(Vec<Reservation>)` - All matching reservations
    /// * `Err(StoreError)` - If the read fails
    async fn list(&self, category: Option<&str>) -> StoreResult<Vec<Reservation>>;

    /// Append a reservation.
    ///
    /// # Returns
    /// * `Ok(())` - The record is durably stored
    /// * `Err(StoreError::Storage)` - The write failed; no partial record
    ///   was left behind
    async fn insert(&self, reservation: Reservation) -> StoreResult<()>;

    /// Delete the reservation at an absolute position in the unfiltered
    /// sequence and return it.
    ///
    /// Mapping a category-filtered position to this absolute index is the
    /// caller's job (see [`delete_booking`](crate::booking::service::delete_booking)).
    ///
    /// # Returns
    /// * `Ok(Reservation)` - The removed record
    /// * `Err(StoreError::NotFound)` - If `index` is out of range
    /// * `Err(StoreError::Storage)` - If the write-back fails
    async fn delete_at(&self, index: usize) -> StoreResult<Reservation>;
}
