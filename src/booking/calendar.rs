//! Monthly calendar aggregation.
//!
//! Transforms a flat reservation list into a month grid: ISO weeks starting
//! Monday, leading/trailing empty cells, and per-day booking buckets.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{HolidayCalendar, Reservation};

/// One reservation as it appears in a day bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBooking {
    pub venue: String,
    pub time_slot: String,
    pub requested_by: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
}

impl From<&Reservation> for DayBooking {
    fn from(r: &Reservation) -> Self {
        DayBooking {
            venue: r.venue.clone(),
            time_slot: r.time_slot.clone(),
            requested_by: r.requested_by.clone(),
            kind: r.kind.clone(),
            category: r.category.clone(),
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCell {
    /// Padding outside the month.
    Empty,
    /// A day of the month with its bookings, in store order.
    Day { day: u32, bookings: Vec<DayBooking> },
}

impl DayCell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A month grid with bookings bucketed by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Monday-first weeks covering the month; first and last weeks are
    /// padded with [`DayCell::Empty`].
    pub weeks: Vec<[DayCell; 7]>,
    /// Holiday labels for the month, keyed by day-of-month. Rendering-only;
    /// holidays do not affect booking eligibility.
    pub holidays: BTreeMap<u32, String>,
}

impl MonthView {
    /// The bookings on a day of this month. Empty for padding cells, days
    /// outside the month, and days with no bookings.
    pub fn bookings_on(&self, day: u32) -> &[DayBooking] {
        self.weeks
            .iter()
            .flatten()
            .find_map(|cell| match cell {
                DayCell::Day { day: d, bookings } if *d == day => Some(bookings.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Day numbers present in the grid, in order.
    pub fn day_numbers(&self) -> Vec<u32> {
        self.weeks
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                DayCell::Day { day, .. } => Some(*day),
                DayCell::Empty => None,
            })
            .collect()
    }
}

/// Number of days in `(year, month)`, when the month is valid.
pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_month_first.signed_duration_since(first).num_days() as u32)
}

/// Build the month view for `(year, month)`.
///
/// Pure function of its inputs: the same arguments always produce the same
/// view. Reservations are bucketed by day when their date parses and falls
/// in the target month; unparseable dates are skipped (a data-quality
/// issue, not an error) and in-day ordering follows the input slice.
///
/// An invalid month (outside 1..=12) yields a view with no weeks.
pub fn build_month(
    year: i32,
    month: u32,
    reservations: &[Reservation],
    holidays: &HolidayCalendar,
) -> MonthView {
    let (Some(first), Some(days)) = (
        NaiveDate::from_ymd_opt(year, month, 1),
        days_in_month(year, month),
    ) else {
        return MonthView {
            year,
            month,
            weeks: Vec::new(),
            holidays: BTreeMap::new(),
        };
    };

    let mut buckets: BTreeMap<u32, Vec<DayBooking>> = BTreeMap::new();
    for reservation in reservations {
        let Some(date) = reservation.parsed_date() else {
            debug!(
                "skipping reservation with unparseable date {:?} ({})",
                reservation.date, reservation.venue
            );
            continue;
        };
        if date.year() == year && date.month() == month {
            buckets
                .entry(date.day())
                .or_default()
                .push(DayBooking::from(reservation));
        }
    }

    let leading = first.weekday().num_days_from_monday() as usize;
    let total_cells = leading + days as usize;
    let week_count = (total_cells + 6) / 7;

    let mut weeks = Vec::with_capacity(week_count);
    for week in 0..week_count {
        let cells: [DayCell; 7] = std::array::from_fn(|i| {
            let slot = week * 7 + i;
            if slot < leading || slot >= leading + days as usize {
                DayCell::Empty
            } else {
                let day = (slot - leading + 1) as u32;
                DayCell::Day {
                    day,
                    bookings: buckets.remove(&day).unwrap_or_default(),
                }
            }
        });
        weeks.push(cells);
    }

    MonthView {
        year,
        month,
        weeks,
        holidays: holidays.for_month(year, month),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reservation(venue: &str, date: &str, slot: &str) -> Reservation {
        Reservation {
            category: "cultural".to_string(),
            kind: String::new(),
            venue: venue.to_string(),
            date: date.to_string(),
            time_slot: slot.to_string(),
            requested_by: "Dance Society".to_string(),
        }
    }

    #[test]
    fn test_empty_month_grid() {
        // March 2026 starts on a Sunday: 6 leading empties, 31 days, 6 weeks.
        let view = build_month(2026, 3, &[], &HolidayCalendar::new());
        assert_eq!(view.weeks.len(), 6);
        assert_eq!(view.day_numbers(), (1..=31).collect::<Vec<_>>());
        for cell in view.weeks.iter().flatten() {
            if let DayCell::Day { bookings, .. } = cell {
                assert!(bookings.is_empty());
            }
        }
        // Leading padding before Sunday the 1st.
        assert!(view.weeks[0][..6].iter().all(DayCell::is_empty));
        assert_eq!(
            view.weeks[0][6],
            DayCell::Day {
                day: 1,
                bookings: Vec::new()
            }
        );
    }

    #[test]
    fn test_monday_start_has_no_leading_padding() {
        // June 2026 starts on a Monday.
        let view = build_month(2026, 6, &[], &HolidayCalendar::new());
        assert!(matches!(view.weeks[0][0], DayCell::Day { day: 1, .. }));
        assert_eq!(view.weeks.len(), 5);
    }

    #[test]
    fn test_leap_february() {
        let view = build_month(2024, 2, &[], &HolidayCalendar::new());
        assert_eq!(view.day_numbers().len(), 29);
        assert_eq!(build_month(2025, 2, &[], &HolidayCalendar::new()).day_numbers().len(), 28);
    }

    #[test]
    fn test_bookings_bucketed_by_day() {
        let rows = vec![reservation(
            "MLS Auditorium",
            "2026-03-10",
            "10:00 AM - 12:00 PM",
        )];
        let view = build_month(2026, 3, &rows, &HolidayCalendar::new());

        let bookings = view.bookings_on(10);
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].venue, "MLS Auditorium");
        assert_eq!(bookings[0].time_slot, "10:00 AM - 12:00 PM");
        assert_eq!(bookings[0].requested_by, "Dance Society");

        // Exactly one bucket holds it.
        let total: usize = view
            .day_numbers()
            .iter()
            .map(|d| view.bookings_on(*d).len())
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_in_day_order_follows_input() {
        let rows = vec![
            reservation("MLS Auditorium", "2026-03-10", "10:00 AM - 12:00 PM"),
            reservation("Gyan Auditorium", "2026-03-10", "08:00 AM - 10:00 AM"),
        ];
        let view = build_month(2026, 3, &rows, &HolidayCalendar::new());
        let bookings = view.bookings_on(10);
        assert_eq!(bookings[0].venue, "MLS Auditorium");
        assert_eq!(bookings[1].venue, "Gyan Auditorium");
    }

    #[test]
    fn test_out_of_month_and_unparseable_excluded() {
        let rows = vec![
            reservation("MLS Auditorium", "2026-04-01", "10:00 AM - 12:00 PM"),
            reservation("Gyan Auditorium", "someday", "10:00 AM - 12:00 PM"),
            reservation("Yoga Room", "2026-03-15", "08:00 AM - 10:00 AM"),
        ];
        let view = build_month(2026, 3, &rows, &HolidayCalendar::new());
        let total: usize = view
            .day_numbers()
            .iter()
            .map(|d| view.bookings_on(*d).len())
            .sum();
        assert_eq!(total, 1);
        assert_eq!(view.bookings_on(15)[0].venue, "Yoga Room");
    }

    #[test]
    fn test_holidays_projected() {
        let mut holidays = HolidayCalendar::new();
        holidays.insert("2026-03-04", "Holi");
        holidays.insert("2026-04-14", "Out of month");

        let view = build_month(2026, 3, &[], &holidays);
        assert_eq!(view.holidays.len(), 1);
        assert_eq!(view.holidays.get(&4).map(String::as_str), Some("Holi"));
    }

    #[test]
    fn test_pure_and_idempotent() {
        let rows = vec![reservation(
            "MLS Auditorium",
            "2026-03-10",
            "10:00 AM - 12:00 PM",
        )];
        let holidays = HolidayCalendar::new();
        assert_eq!(
            build_month(2026, 3, &rows, &holidays),
            build_month(2026, 3, &rows, &holidays)
        );
    }

    #[test]
    fn test_invalid_month_yields_empty_view() {
        let view = build_month(2026, 13, &[], &HolidayCalendar::new());
        assert!(view.weeks.is_empty());
    }

    proptest! {
        #[test]
        fn grid_covers_month_exactly(year in 1990i32..2100, month in 1u32..=12) {
            let view = build_month(year, month, &[], &HolidayCalendar::new());
            let expected: Vec<u32> = (1..=days_in_month(year, month).unwrap()).collect();
            prop_assert_eq!(view.day_numbers(), expected);
            // Every week is exactly seven cells wide by construction; the
            // grid is rectangular.
            prop_assert!(view.weeks.len() >= 4 && view.weeks.len() <= 6);
        }

        #[test]
        fn every_in_month_reservation_lands_in_one_bucket(day in 1u32..=28) {
            let date = format!("2026-02-{:02}", day);
            let rows = vec![reservation("MLS Auditorium", &date, "10:00 AM - 12:00 PM")];
            let view = build_month(2026, 2, &rows, &HolidayCalendar::new());
            let total: usize = view
                .day_numbers()
                .iter()
                .map(|d| view.bookings_on(*d).len())
                .sum();
            prop_assert_eq!(total, 1);
            prop_assert_eq!(view.bookings_on(day).len(), 1);
        }
    }
}
