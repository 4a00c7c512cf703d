//! Booking core: conflict resolution, calendar aggregation, and draft
//! composition.

pub mod calendar;
pub mod closure;
pub mod draft;
pub mod resolver;
pub mod service;

pub use calendar::{build_month, DayBooking, DayCell, MonthView};
pub use closure::{ClosureRule, ClosureTable, DateClosure, WeekdayVenueClosure};
pub use draft::{compose, NO_BOOKINGS_PLACEHOLDER};
pub use resolver::{ConflictResolver, Decision};
