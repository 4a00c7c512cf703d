//! The fixed time-slot catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the eight two-hour booking windows spanning 08:00-24:00.
///
/// This is the catalog the submission layer offers. Stored reservations keep
/// the slot as a plain string so the conflict check stays an exact string
/// comparison; `TimeSlot` exists so callers build those strings from a fixed
/// set rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    EightToTen,
    TenToNoon,
    NoonToTwo,
    TwoToFour,
    FourToSix,
    SixToEight,
    EightToTenPm,
    TenToMidnight,
}

impl TimeSlot {
    /// All slots, in day order.
    pub const ALL: [TimeSlot; 8] = [
        TimeSlot::EightToTen,
        TimeSlot::TenToNoon,
        TimeSlot::NoonToTwo,
        TimeSlot::TwoToFour,
        TimeSlot::FourToSix,
        TimeSlot::SixToEight,
        TimeSlot::EightToTenPm,
        TimeSlot::TenToMidnight,
    ];

    /// The canonical display string for this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::EightToTen => "08:00 AM - 10:00 AM",
            TimeSlot::TenToNoon => "10:00 AM - 12:00 PM",
            TimeSlot::NoonToTwo => "12:00 PM - 02:00 PM",
            TimeSlot::TwoToFour => "02:00 PM - 04:00 PM",
            TimeSlot::FourToSix => "04:00 PM - 06:00 PM",
            TimeSlot::SixToEight => "06:00 PM - 08:00 PM",
            TimeSlot::EightToTenPm => "08:00 PM - 10:00 PM",
            TimeSlot::TenToMidnight => "10:00 PM - 12:00 AM",
        }
    }

    /// Position of this slot within the day, 0-based.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    /// Parse a slot from its canonical display string. Exact match only;
    /// slot strings are catalog values, not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| format!("Unknown time slot: {}", s))
    }
}
