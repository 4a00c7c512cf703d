//! Externally supplied holiday dates.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A `date -> label` table of holidays.
///
/// Holidays are a rendering side-channel attached to month views; they do
/// not affect booking eligibility. Keys are `YYYY-MM-DD` strings; entries
/// with unparseable keys are simply never projected onto a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendar {
    entries: BTreeMap<String, String>,
}

impl HolidayCalendar {
    /// An empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a holiday.
    pub fn insert(&mut self, date: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(date.into(), label.into());
    }

    /// The label for an exact date string, if present.
    pub fn label_for(&self, date: &str) -> Option<&str> {
        self.entries.get(date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a calendar from a JSON object of the form
    /// `{"2026-01-26": "Republic Day", ...}`.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Invalid holiday calendar JSON")
    }

    /// Load a calendar from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read holiday calendar {}",
                path.as_ref().display()
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Project the calendar onto one month: `day-of-month -> label` for the
    /// entries whose date parses and falls in `(year, month)`.
    pub fn for_month(&self, year: i32, month: u32) -> BTreeMap<u32, String> {
        self.entries
            .iter()
            .filter_map(|(date, label)| {
                let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
                (parsed.year() == year && parsed.month() == month)
                    .then(|| (parsed.day(), label.clone()))
            })
            .collect()
    }
}
