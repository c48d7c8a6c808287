//! Time-of-day and day-of-week context for dispatch decisions.
//!
//! The classifier only knows daily and weekly patterns. Calendar-driven
//! periods such as the Ramadan iftar window cannot be derived from wall-clock
//! time, so callers pass [`TimePeriod::RamadanIftar`] explicitly when it applies.
//!
//! Timestamps are read as local wall-clock time: callers that need a fixed
//! timezone must localize before classifying.

use chrono::{Datelike, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Named traffic/demand period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    MorningRush,
    Midday,
    Afternoon,
    EveningRush,
    Night,
    FridayPrayer,
    RamadanIftar,
}

impl TimePeriod {
    /// Morning or evening rush hour.
    pub fn is_rush(self) -> bool {
        matches!(self, TimePeriod::MorningRush | TimePeriod::EveningRush)
    }

    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::MorningRush => "morning rush",
            TimePeriod::Midday => "midday",
            TimePeriod::Afternoon => "afternoon",
            TimePeriod::EveningRush => "evening rush",
            TimePeriod::Night => "night",
            TimePeriod::FridayPrayer => "friday prayer",
            TimePeriod::RamadanIftar => "ramadan iftar",
        }
    }
}

/// Classify a local timestamp into a [`TimePeriod`].
///
/// Rules, first match wins:
///
/// | When | Period |
/// |------|--------|
/// | Friday 12:00–14:00 | `FridayPrayer` |
/// | 07:00–10:00 | `MorningRush` |
/// | 10:00–13:00 | `Midday` |
/// | 13:00–17:00 | `Afternoon` |
/// | 17:00–21:00 | `EveningRush` |
/// | otherwise | `Night` |
///
/// Ranges include the start hour and exclude the end hour.
pub fn classify_period<T: Datelike + Timelike>(at: &T) -> TimePeriod {
    let hour = at.hour();
    if at.weekday() == Weekday::Fri && (12..14).contains(&hour) {
        return TimePeriod::FridayPrayer;
    }
    match hour {
        7..=9 => TimePeriod::MorningRush,
        10..=12 => TimePeriod::Midday,
        13..=16 => TimePeriod::Afternoon,
        17..=20 => TimePeriod::EveningRush,
        _ => TimePeriod::Night,
    }
}
