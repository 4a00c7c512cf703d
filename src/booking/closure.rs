//! Closure rules.
//!
//! A closure rule disallows bookings for specific venues on specific dates
//! regardless of availability. Rules are registered per category in a
//! [`ClosureTable`] so new rules (venue-specific hours, ad-hoc closures)
//! attach without modifying the resolver.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::CategoryConfig;

/// A rule that closes venues on particular dates.
///
/// Implementations must be `Send + Sync`; the table holds them as trait
/// objects.
pub trait ClosureRule: Send + Sync {
    /// Rule name, surfaced in policy rejection messages.
    fn name(&self) -> &str;

    /// Whether the rule closes `venue` on `date`.
    fn applies(&self, venue: &str, date: NaiveDate) -> bool;
}

/// Closes venues whose name contains one of the marker substrings on a
/// fixed weekday.
pub struct WeekdayVenueClosure {
    name: String,
    weekday: Weekday,
    venue_markers: Vec<String>,
}

impl WeekdayVenueClosure {
    pub fn new(
        name: impl Into<String>,
        weekday: Weekday,
        venue_markers: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weekday,
            venue_markers,
        }
    }
}

impl ClosureRule for WeekdayVenueClosure {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, venue: &str, date: NaiveDate) -> bool {
        date.weekday() == self.weekday
            && self
                .venue_markers
                .iter()
                .any(|marker| venue.contains(marker.as_str()))
    }
}

/// Closes every venue on specific calendar dates.
pub struct DateClosure {
    name: String,
    dates: Vec<NaiveDate>,
}

impl DateClosure {
    pub fn new(name: impl Into<String>, dates: Vec<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            dates,
        }
    }
}

impl ClosureRule for DateClosure {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies(&self, _venue: &str, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// Registry of closure rules keyed by category.
#[derive(Default)]
pub struct ClosureTable {
    rules: HashMap<String, Vec<Box<dyn ClosureRule>>>,
}

impl ClosureTable {
    /// An empty table: no category has closure rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in campus rules: for the sports category, recreation
    /// venues ("Rec Centre", "Yoga Room") close on Mondays.
    pub fn campus_defaults() -> Self {
        let mut table = Self::new();
        table.register(
            "sports",
            Box::new(WeekdayVenueClosure::new(
                "Monday maintenance",
                Weekday::Mon,
                vec!["Rec Centre".to_string(), "Yoga Room".to_string()],
            )),
        );
        table
    }

    /// Build the table from category configuration.
    ///
    /// # Returns
    /// * `Err` if a configured weekday name does not parse
    pub fn from_config(config: &CategoryConfig) -> anyhow::Result<Self> {
        let mut table = Self::new();
        for (category, settings) in &config.categories {
            for closure in &settings.closures {
                let weekday: Weekday = closure.weekday.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "unknown weekday '{}' in closure rule for category '{}'",
                        closure.weekday,
                        category
                    )
                })?;
                table.register(
                    category.clone(),
                    Box::new(WeekdayVenueClosure::new(
                        closure.name.clone(),
                        weekday,
                        closure.venue_markers.clone(),
                    )),
                );
            }
        }
        Ok(table)
    }

    /// Register a rule for a category.
    pub fn register(&mut self, category: impl Into<String>, rule: Box<dyn ClosureRule>) {
        self.rules.entry(category.into()).or_default().push(rule);
    }

    /// The first rule that closes `venue` on `date` for `category`, if any.
    pub fn first_match(
        &self,
        category: &str,
        venue: &str,
        date: NaiveDate,
    ) -> Option<&dyn ClosureRule> {
        self.rules
            .get(category)?
            .iter()
            .find(|rule| rule.applies(venue, date))
            .map(|rule| rule.as_ref())
    }

    /// Number of registered rules across all categories.
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
