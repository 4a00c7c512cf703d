//! # venue-booking
//!
//! Venue-reservation bookkeeping core: conflict detection, monthly calendar
//! aggregation, and approval-draft composition over an abstract reservation
//! store.
//!
//! ## Features
//!
//! - **Conflict Resolution**: exact-match double-booking detection plus a
//!   per-category closure-rule table (e.g. recreation venues close on
//!   Mondays)
//! - **Calendar Aggregation**: flat reservation lists become Monday-first
//!   month grids with per-day booking buckets and a holiday side-channel
//! - **Draft Composition**: pre-filled email or chat drafts from the most
//!   recent reservation, with recipient list substitution
//! - **Pluggable Storage**: in-memory and CSV-file-backed stores behind one
//!   async trait; the routing/rendering layers stay external
//!
//! ## Architecture
//!
//! - [`models`]: reservation records, submissions, the time-slot catalog,
//!   and category/holiday configuration
//! - [`booking`]: the resolver, aggregator, composer, and the
//!   store-agnostic service layer
//! - [`store`]: the `ReservationStore` trait and its backends
//!
//! ## Concurrency
//!
//! Submissions are a read-all / decide / write-one sequence with no
//! isolation between the conflict read and the insert. The crate does not
//! guarantee serializability; see
//! [`booking::service::submit_booking`] for the caveat and remedies.

pub mod booking;
pub mod error;
pub mod models;
pub mod store;

pub use booking::calendar::{build_month, DayBooking, DayCell, MonthView};
pub use booking::closure::{ClosureRule, ClosureTable, WeekdayVenueClosure};
pub use booking::draft::{compose, NO_BOOKINGS_PLACEHOLDER};
pub use booking::resolver::{ConflictResolver, Decision};
pub use error::{BookingError, BookingResult};
pub use models::{
    BookingRequest, CategoryConfig, CategorySettings, DraftStyle, HolidayCalendar, Reservation,
    TimeSlot, VenueChoice,
};
pub use store::{MemoryStore, ReservationStore, StoreError, StoreFactory, StoreResult, StoreType};

#[cfg(feature = "csv-store")]
pub use store::CsvStore;
