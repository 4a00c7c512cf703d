//! Per-category configuration.
//!
//! Venue lists, draft styles, recipient lists, and closure-rule parameters
//! are immutable configuration handed to the resolver and composer at
//! construction time, not ambient global state, so tests can substitute
//! fixtures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Communication style for a category's approval drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStyle {
    /// Formal email draft for the admin team.
    #[default]
    Email,
    /// Single informal line for a group chat.
    #[serde(alias = "chat")]
    ChatMessage,
}

/// Parameters of a weekday closure rule, as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayClosureSettings {
    /// English weekday name ("Monday", "mon", ...).
    pub weekday: String,
    /// Substrings marking the closed venues.
    pub venue_markers: Vec<String>,
    /// Rule name, surfaced in policy rejection messages.
    #[serde(default = "default_closure_name")]
    pub name: String,
}

fn default_closure_name() -> String {
    "weekly closure".to_string()
}

/// Settings for one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySettings {
    /// Fixed venue list offered by the submission layer.
    #[serde(default)]
    pub venues: Vec<String>,
    /// Draft style for this category.
    #[serde(default)]
    pub draft_style: DraftStyle,
    /// Recipient list substituted into email drafts.
    #[serde(default)]
    pub recipients: Vec<String>,
    /// Closure rules attached to this category.
    #[serde(default)]
    pub closures: Vec<WeekdayClosureSettings>,
}

/// Category configuration table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    pub categories: BTreeMap<String, CategorySettings>,
}

impl CategoryConfig {
    /// The built-in campus configuration: three categories covering the
    /// stock venue lists, the admin recipient list, and the Monday closure
    /// of recreation venues for the sports category.
    pub fn default_campus() -> Self {
        let admin_team = vec![
            "admin1@campus.edu".to_string(),
            "admin2@campus.edu".to_string(),
            "dean.office@campus.edu".to_string(),
        ];

        let mut categories = BTreeMap::new();
        categories.insert(
            "cultural".to_string(),
            CategorySettings {
                venues: vec!["MLS Auditorium".to_string(), "Gyan Auditorium".to_string()],
                draft_style: DraftStyle::Email,
                recipients: admin_team.clone(),
                closures: Vec::new(),
            },
        );
        categories.insert(
            "academic".to_string(),
            CategorySettings {
                venues: vec![
                    "Gyan Auditorium".to_string(),
                    "Recess Area near Acad Block".to_string(),
                ],
                draft_style: DraftStyle::Email,
                recipients: admin_team.clone(),
                closures: Vec::new(),
            },
        );
        categories.insert(
            "sports".to_string(),
            CategorySettings {
                venues: vec![
                    "Rec Centre - Squash Court 1".to_string(),
                    "Rec Centre - Badminton Hall".to_string(),
                    "Yoga Room".to_string(),
                ],
                draft_style: DraftStyle::ChatMessage,
                recipients: admin_team,
                closures: vec![WeekdayClosureSettings {
                    weekday: "Monday".to_string(),
                    venue_markers: vec!["Rec Centre".to_string(), "Yoga Room".to_string()],
                    name: "Monday maintenance".to_string(),
                }],
            },
        );

        Self { categories }
    }

    /// Load category configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read category config {}",
                path.as_ref().display()
            )
        })?;
        toml::from_str(&content).context("Failed to parse category config TOML")
    }

    /// Settings for a category, if configured.
    pub fn settings(&self, category: &str) -> Option<&CategorySettings> {
        self.categories.get(category)
    }

    /// The venue list for a category. Empty when the category is unknown.
    pub fn venues(&self, category: &str) -> &[String] {
        self.settings(category)
            .map(|s| s.venues.as_slice())
            .unwrap_or(&[])
    }
}
