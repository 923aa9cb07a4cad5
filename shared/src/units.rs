//! Habit target units and reminder intervals
//!
//! Habit targets are entered in a user-chosen unit and normalised to a
//! day count for progress math. The normalisation is a fixed approximation
//! (30-day months, 365-day years), not calendar aware.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Habit Units
// ============================================================================

/// Days in a month for target normalisation
pub const DAYS_PER_MONTH: i64 = 30;

/// Days in a year for target normalisation
pub const DAYS_PER_YEAR: i64 = 365;

/// Unit a habit target is expressed in
///
/// Stored values are read case-insensitively and an unrecognised stored unit
/// counts as days. `FromStr` rejects unknown units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HabitUnit {
    #[default]
    Day,
    Month,
    Year,
}

impl HabitUnit {
    /// Number of days one unit stands for
    pub fn days_per_unit(&self) -> i64 {
        match self {
            HabitUnit::Day => 1,
            HabitUnit::Month => DAYS_PER_MONTH,
            HabitUnit::Year => DAYS_PER_YEAR,
        }
    }

    /// Scale a target count in this unit to days
    pub fn to_days(&self, target: i32) -> i64 {
        i64::from(target) * self.days_per_unit()
    }

    /// Lowercase name as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitUnit::Day => "day",
            HabitUnit::Month => "month",
            HabitUnit::Year => "year",
        }
    }
}

impl fmt::Display for HabitUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HabitUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(HabitUnit::Day),
            "month" | "months" => Ok(HabitUnit::Month),
            "year" | "years" => Ok(HabitUnit::Year),
            _ => Err(format!("Unknown habit unit: {}", s)),
        }
    }
}

impl From<String> for HabitUnit {
    fn from(raw: String) -> Self {
        raw.parse().unwrap_or_default()
    }
}

// ============================================================================
// Reminder Intervals
// ============================================================================

const MINUTE_MS: i64 = 60_000;

/// Supported hydration reminder periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReminderInterval {
    OneMinute,
    ThirtyMinutes,
    OneHour,
    TwoHours,
}

impl ReminderInterval {
    /// All options in the order they are offered
    pub const ALL: [ReminderInterval; 4] = [
        ReminderInterval::OneMinute,
        ReminderInterval::ThirtyMinutes,
        ReminderInterval::OneHour,
        ReminderInterval::TwoHours,
    ];

    /// Period in milliseconds, the persisted representation
    pub fn as_millis(&self) -> i64 {
        match self {
            ReminderInterval::OneMinute => MINUTE_MS,
            ReminderInterval::ThirtyMinutes => 30 * MINUTE_MS,
            ReminderInterval::OneHour => 60 * MINUTE_MS,
            ReminderInterval::TwoHours => 120 * MINUTE_MS,
        }
    }

    pub fn as_duration(&self) -> Duration {
        Duration::milliseconds(self.as_millis())
    }

    /// Parse a persisted millisecond value; unknown values yield `None`
    pub fn from_millis(millis: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_millis() == millis)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderInterval::OneMinute => "Every 1 minute",
            ReminderInterval::ThirtyMinutes => "Every 30 minutes",
            ReminderInterval::OneHour => "Every 1 hour",
            ReminderInterval::TwoHours => "Every 2 hours",
        }
    }
}

impl TryFrom<i64> for ReminderInterval {
    type Error = String;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
            .ok_or_else(|| format!("Unsupported reminder interval: {}ms", millis))
    }
}

impl From<ReminderInterval> for i64 {
    fn from(interval: ReminderInterval) -> Self {
        interval.as_millis()
    }
}

impl fmt::Display for ReminderInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
