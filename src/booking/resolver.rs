//! Booking conflict resolution.

use serde::{Deserialize, Serialize};

use super::closure::ClosureTable;
use crate::models::Reservation;

/// Outcome of evaluating a candidate reservation.
///
/// Rejections are values, not errors: callers translate them into whatever
/// response surface they serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The slot is free and no policy forbids it.
    Accepted,
    /// Another accepted reservation already holds the same
    /// `(venue, date, time_slot)` triple.
    RejectedConflict { message: String },
    /// A closure rule forbids the venue on that date.
    RejectedPolicy { rule: String, message: String },
}

impl Decision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection message, if this is a rejection.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::RejectedConflict { message } | Self::RejectedPolicy { message, .. } => {
                Some(message)
            }
        }
    }
}

/// Decides whether a candidate reservation is accepted.
///
/// The resolver holds the closure-rule table; everything else it needs
/// arrives per call. It performs no I/O and no normalization: venue, date,
/// and slot strings are compared exactly as stored.
pub struct ConflictResolver {
    closures: ClosureTable,
}

impl ConflictResolver {
    /// Create a resolver with the given closure rules.
    pub fn new(closures: ClosureTable) -> Self {
        Self { closures }
    }

    /// Create a resolver with the built-in campus closure rules.
    pub fn with_campus_defaults() -> Self {
        Self::new(ClosureTable::campus_defaults())
    }

    /// Evaluate a candidate against the existing reservations.
    ///
    /// `existing` must contain every reservation the candidate could clash
    /// with; when categories are in use the caller typically passes the
    /// listing restricted to the candidate's category. The scan is a full
    /// linear pass; an empty slice is a legal no-conflict input.
    ///
    /// Closure policy is checked first, so a policy rejection fires
    /// regardless of whether the slot is free. Policy rules only run when
    /// the candidate's date parses; the conflict scan does not need a
    /// parseable date.
    pub fn evaluate(&self, candidate: &Reservation, existing: &[Reservation]) -> Decision {
        if let Some(date) = candidate.parsed_date() {
            if let Some(rule) = self
                .closures
                .first_match(&candidate.category, &candidate.venue, date)
            {
                return Decision::RejectedPolicy {
                    rule: rule.name().to_string(),
                    message: format!(
                        "{} is unavailable on {}: {}.",
                        candidate.venue, candidate.date, rule.name()
                    ),
                };
            }
        }

        for reservation in existing {
            if reservation.occupies_same_slot(candidate) {
                return Decision::RejectedConflict {
                    message: format!(
                        "{} is already reserved for {} during {}.",
                        candidate.venue, candidate.date, candidate.time_slot
                    ),
                };
            }
        }

        Decision::Accepted
    }
}
