//! Reservation records and booking submissions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// A single venue reservation as kept by the store.
///
/// `date` and `time_slot` are kept as the strings the caller submitted;
/// conflict detection compares them by exact equality. The optional
/// `category` and `kind` fields default to empty so row sources written
/// without those columns deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Category tag grouping venues (e.g. "sports", "cultural"). Empty in
    /// single-category deployments.
    #[serde(default)]
    pub category: String,
    /// Free-form sub-classification within the category. The row-store
    /// column for this field is named `Type`.
    #[serde(default)]
    pub kind: String,
    /// Venue identifier. Non-empty for accepted reservations.
    pub venue: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// One of the fixed two-hour windows, stored verbatim.
    pub time_slot: String,
    /// Requester identity, free text.
    pub requested_by: String,
}

impl Reservation {
    /// Parse the `date` field, if it is a valid `YYYY-MM-DD` date.
    ///
    /// Reservations with unparseable dates are excluded from day-bucketed
    /// views and closure-policy evaluation but are otherwise legal records.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Whether `other` occupies the same `(venue, date, time_slot)` triple.
    ///
    /// Exact string equality on all three fields; no case folding or
    /// whitespace trimming is performed.
    pub fn occupies_same_slot(&self, other: &Reservation) -> bool {
        self.venue == other.venue && self.date == other.date && self.time_slot == other.time_slot
    }
}

/// Venue selection on a booking submission.
///
/// The UI-level "manual entry" sentinel never reaches domain logic: a
/// submission carries either a venue picked from a category's fixed list or
/// a free-text name, and both resolve to a plain string here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VenueChoice {
    /// A venue picked from a category's venue list.
    Fixed(String),
    /// A manually entered venue name.
    Custom(String),
}

impl VenueChoice {
    /// Resolve the choice to the venue name.
    ///
    /// # Returns
    /// * `Ok(String)` - The venue name, verbatim
    /// * `Err(BookingError::Validation)` - If the name is empty or whitespace
    pub fn resolve(&self) -> BookingResult<String> {
        let name = match self {
            Self::Fixed(name) | Self::Custom(name) => name,
        };
        if name.trim().is_empty() {
            return Err(BookingError::validation("a venue name is required"));
        }
        Ok(name.clone())
    }
}

/// A booking submission, before it has passed validation and conflict
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    pub venue: VenueChoice,
    pub date: String,
    pub time_slot: String,
    pub requested_by: String,
}

impl BookingRequest {
    /// Validate the submission and build the candidate reservation.
    ///
    /// All required fields must be non-empty; this rejects before the store
    /// is ever touched. Field values are carried over verbatim (no
    /// normalization).
    pub fn into_reservation(self) -> BookingResult<Reservation> {
        let venue = self.venue.resolve()?;
        if self.date.trim().is_empty() {
            return Err(BookingError::validation("a date is required"));
        }
        if self.time_slot.trim().is_empty() {
            return Err(BookingError::validation("a time slot is required"));
        }
        if self.requested_by.trim().is_empty() {
            return Err(BookingError::validation("a requester name is required"));
        }
        Ok(Reservation {
            category: self.category.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            venue,
            date: self.date,
            time_slot: self.time_slot,
            requested_by: self.requested_by,
        })
    }
}
