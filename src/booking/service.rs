//! High-level booking service layer.
//!
//! Store-agnostic orchestration that works with any [`ReservationStore`]
//! implementation: validation, the evaluate-then-insert submission
//! sequence, positional deletion under category filtering, and the read
//! paths feeding the calendar and draft composer.

use log::{info, warn};

use super::calendar::{build_month, MonthView};
use super::draft::compose;
use super::resolver::{ConflictResolver, Decision};
use crate::error::BookingResult;
use crate::models::{BookingRequest, CategoryConfig, HolidayCalendar, Reservation};
use crate::store::{ReservationStore, StoreError};

// ==================== Health ====================

/// Check that the underlying store is reachable.
pub async fn health_check<S>(store: &S) -> BookingResult<bool>
where
    S: ReservationStore + ?Sized,
{
    Ok(store.health_check().await?)
}

// ==================== Submission ====================

/// Submit a booking: validate, evaluate against the existing reservations,
/// and insert on acceptance.
///
/// When the request carries a category, the conflict scan is restricted to
/// that category's reservations.
///
/// # Concurrency
/// This is a read-all / decide / write-one sequence with no isolation
/// between the conflict read and the insert: two concurrent submissions for
/// the same `(venue, date, slot)` can both pass the scan and both be
/// written. Callers wanting serializability must wrap this call in their
/// own mutex or enforce uniqueness in the store backend.
///
/// # Returns
/// * `Ok(Decision)` - The evaluation outcome; the insert happened only for
///   [`Decision::Accepted`]
/// * `Err(BookingError::Validation)` - A required field was missing; the
///   store was not touched
/// * `Err(BookingError::Store)` - Listing or inserting failed
pub async fn submit_booking<S>(
    store: &S,
    resolver: &ConflictResolver,
    request: BookingRequest,
) -> BookingResult<Decision>
where
    S: ReservationStore + ?Sized,
{
    let candidate = request.into_reservation()?;

    let category_filter = (!candidate.category.is_empty()).then_some(candidate.category.as_str());
    let existing = store.list(category_filter).await?;

    let decision = resolver.evaluate(&candidate, &existing);
    match &decision {
        Decision::Accepted => {
            info!(
                "Service layer: slot secured for {} on {} during {}",
                candidate.venue, candidate.date, candidate.time_slot
            );
            store.insert(candidate).await?;
        }
        Decision::RejectedConflict { message } => {
            warn!("Service layer: booking rejected: {}", message);
        }
        Decision::RejectedPolicy { message, .. } => {
            info!("Service layer: booking rejected by policy: {}", message);
        }
    }

    Ok(decision)
}

// ==================== Deletion ====================

/// Delete the reservation at `position` within an optionally
/// category-filtered view, returning the removed record.
///
/// Positional identity must survive filtering: the function re-fetches the
/// full listing, walks it tracking absolute indices, and maps the filtered
/// position to the correct absolute record before deleting. This mapping is
/// only correct under the crate's single-request model; see
/// [`submit_booking`] for the concurrency caveat.
///
/// # Returns
/// * `Ok(Reservation)` - The removed record
/// * `Err(StoreError::NotFound)` - `position` is outside the filtered view;
///   a reportable error, not a crash
pub async fn delete_booking<S>(
    store: &S,
    category: Option<&str>,
    position: usize,
) -> BookingResult<Reservation>
where
    S: ReservationStore + ?Sized,
{
    let all = store.list(None).await?;
    let matching: Vec<usize> = all
        .iter()
        .enumerate()
        .filter(|(_, r)| category.is_none_or(|c| r.category == c))
        .map(|(i, _)| i)
        .collect();

    let Some(&absolute) = matching.get(position) else {
        return Err(StoreError::not_found(position, matching.len()).into());
    };

    let removed = store.delete_at(absolute).await?;
    info!(
        "Service layer: removed reservation for {} on {}",
        removed.venue, removed.date
    );
    Ok(removed)
}

// ==================== Read paths ====================

/// The most recent reservation in store order, optionally restricted to a
/// category.
pub async fn latest_booking<S>(
    store: &S,
    category: Option<&str>,
) -> BookingResult<Option<Reservation>>
where
    S: ReservationStore + ?Sized,
{
    let mut rows = store.list(category).await?;
    Ok(rows.pop())
}

/// Build the month view over the store's reservations.
pub async fn month_view<S>(
    store: &S,
    category: Option<&str>,
    year: i32,
    month: u32,
    holidays: &HolidayCalendar,
) -> BookingResult<MonthView>
where
    S: ReservationStore + ?Sized,
{
    let rows = store.list(category).await?;
    Ok(build_month(year, month, &rows, holidays))
}

/// Compose the approval draft for the most recent reservation, using the
/// draft style and recipient list of its category.
///
/// The style is taken from the latest reservation's own category when set,
/// falling back to the filter category; unknown categories draft as email
/// with no recipients.
pub async fn draft_for_latest<S>(
    store: &S,
    config: &CategoryConfig,
    category: Option<&str>,
) -> BookingResult<String>
where
    S: ReservationStore + ?Sized,
{
    let latest = latest_booking(store, category).await?;

    let settings = latest
        .as_ref()
        .map(|r| r.category.as_str())
        .filter(|c| !c.is_empty())
        .or(category)
        .and_then(|c| config.settings(c));

    let style = settings.map(|s| s.draft_style).unwrap_or_default();
    let recipients = settings.map(|s| s.recipients.as_slice()).unwrap_or(&[]);

    Ok(compose(latest.as_ref(), style, recipients))
}
