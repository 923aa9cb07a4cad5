//! MoodFlow Shared Library
//!
//! This crate contains the domain records, derived progress math and
//! validation shared by the tracker core and the browser bindings.

pub mod errors;
pub mod habit_metrics;
pub mod models;
pub mod mood_catalog;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use habit_metrics::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

// Export models (excluding unit types which are re-exported from units)
pub use models::{
    Habit, HabitColor, Mood, MoodEntry, MoodTag, WaterRecord, WaterState, DEFAULT_WATER_GOAL_ML,
};
