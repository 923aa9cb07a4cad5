//! Data models for the MoodFlow trackers
//!
//! Field names serialize in camelCase so payloads written by earlier
//! releases of the app keep decoding.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub use crate::units::{HabitUnit, ReminderInterval};

/// Default daily water goal in ml
pub const DEFAULT_WATER_GOAL_ML: i32 = 2000;

/// Icon assigned to newly created habits
pub const DEFAULT_HABIT_ICON: &str = "ic_habits";

/// Time-of-day label assigned to newly created habits
pub const DEFAULT_TIME_OF_DAY: &str = "All Day";

// ============================================================================
// Habits
// ============================================================================

/// Colour token from the fixed habit palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    Blue,
    Orange,
    Green,
    Pink,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl HabitColor {
    /// Palette in assignment order
    pub const PALETTE: [HabitColor; 8] = [
        HabitColor::Blue,
        HabitColor::Orange,
        HabitColor::Green,
        HabitColor::Pink,
        HabitColor::Purple,
        HabitColor::Red,
        HabitColor::Teal,
        HabitColor::Yellow,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            HabitColor::Blue => "#3B82F6",
            HabitColor::Orange => "#F97316",
            HabitColor::Green => "#10B981",
            HabitColor::Pink => "#EC4899",
            HabitColor::Purple => "#8B5CF6",
            HabitColor::Red => "#EF4444",
            HabitColor::Teal => "#14B8A6",
            HabitColor::Yellow => "#EAB308",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitColor::Blue => "blue",
            HabitColor::Orange => "orange",
            HabitColor::Green => "green",
            HabitColor::Pink => "pink",
            HabitColor::Purple => "purple",
            HabitColor::Red => "red",
            HabitColor::Teal => "teal",
            HabitColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for HabitColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user-defined recurring goal tracked by completion count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// `None` until a palette colour has been assigned
    #[serde(default)]
    pub color: Option<HabitColor>,
    #[serde(default)]
    pub current_progress: i32,
    pub target_progress: i32,
    #[serde(default)]
    pub unit: HabitUnit,
    #[serde(default)]
    pub is_new: bool,
    /// Carried in storage; no operation reads or advances it yet
    #[serde(default)]
    pub streak: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default = "default_time_of_day")]
    pub time_of_day: String,
    #[serde(default = "default_repeat_daily")]
    pub repeat_daily: bool,
    #[serde(default)]
    pub last_marked_date: Option<NaiveDate>,
}

fn default_icon() -> String {
    DEFAULT_HABIT_ICON.to_string()
}

fn default_time_of_day() -> String {
    DEFAULT_TIME_OF_DAY.to_string()
}

fn default_repeat_daily() -> bool {
    true
}

impl Habit {
    /// New habit with zero progress and default display metadata
    pub fn new(name: impl Into<String>, target_progress: i32, unit: HabitUnit) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon: default_icon(),
            color: Some(HabitColor::Blue),
            current_progress: 0,
            target_progress,
            unit,
            is_new: true,
            streak: 0,
            duration: None,
            time_of_day: default_time_of_day(),
            repeat_daily: true,
            last_marked_date: None,
        }
    }

    /// Target normalised to days
    pub fn target_days(&self) -> i64 {
        self.unit.to_days(self.target_progress)
    }

    pub fn is_marked_on(&self, date: NaiveDate) -> bool {
        self.last_marked_date == Some(date)
    }
}

// ============================================================================
// Water Intake
// ============================================================================

/// A single logged water-intake event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterRecord {
    pub amount_ml: i32,
    /// Milliseconds since the Unix epoch
    pub time_millis: i64,
}

impl WaterRecord {
    pub fn new(amount_ml: i32, recorded_at: DateTime<Utc>) -> Self {
        Self {
            amount_ml,
            time_millis: recorded_at.timestamp_millis(),
        }
    }

    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_millis)
    }
}

/// Persisted water tracking state, one per install
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterState {
    pub daily_goal_ml: i32,
    /// Always equals the sum of `records` amounts once an operation completes
    pub consumed_ml: i64,
    /// Most recent first
    pub records: Vec<WaterRecord>,
    pub reminder_interval: Option<ReminderInterval>,
}

impl WaterState {
    pub fn new(daily_goal_ml: i32) -> Self {
        Self {
            daily_goal_ml,
            consumed_ml: 0,
            records: Vec::new(),
            reminder_interval: None,
        }
    }

    /// Sum of all record amounts
    pub fn records_total(&self) -> i64 {
        self.records.iter().map(|r| i64::from(r.amount_ml)).sum()
    }
}

impl Default for WaterState {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_GOAL_ML)
    }
}

// ============================================================================
// Moods
// ============================================================================

/// A mood state with its visual representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    pub id: i32,
    pub name: String,
    pub emoji: String,
    pub background_color: String,
    pub description: String,
}

/// A tag for categorising mood entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTag {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// A logged mood with optional note and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}
