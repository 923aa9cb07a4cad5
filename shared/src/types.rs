//! View models and the persisted payload envelope

use crate::errors::EnvelopeError;
use crate::habit_metrics::{
    habit_counter_text, habit_percent, is_water_goal_met, water_progress_fraction,
};
use crate::models::{Habit, WaterState};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// View Models
// ============================================================================

/// A habit annotated with its derived progress view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub habit: Habit,
    pub target_days: i64,
    pub percent: i32,
    pub counter_text: String,
}

impl From<Habit> for HabitView {
    fn from(habit: Habit) -> Self {
        let target_days = habit.target_days();
        Self {
            percent: habit_percent(habit.current_progress, target_days),
            counter_text: habit_counter_text(habit.current_progress, target_days),
            target_days,
            habit,
        }
    }
}

/// Daily water summary for the log-water screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSummary {
    pub consumed_ml: i64,
    pub goal_ml: i32,
    /// Raw fraction, may exceed 1.0
    pub fraction: f64,
    pub goal_met: bool,
    pub cups: usize,
    /// e.g. `"500/2000 ml"`
    pub intake_text: String,
}

impl From<&WaterState> for WaterSummary {
    fn from(state: &WaterState) -> Self {
        Self {
            consumed_ml: state.consumed_ml,
            goal_ml: state.daily_goal_ml,
            fraction: water_progress_fraction(state.consumed_ml, state.daily_goal_ml),
            goal_met: is_water_goal_met(state.consumed_ml, state.daily_goal_ml),
            cups: state.records.len(),
            intake_text: format!("{}/{} ml", state.consumed_ml, state.daily_goal_ml),
        }
    }
}

// ============================================================================
// Payload Envelope
// ============================================================================

/// Current version written for list payloads
pub const PAYLOAD_VERSION: u32 = 1;

/// Version assigned to bare legacy arrays
pub const LEGACY_PAYLOAD_VERSION: u32 = 0;

/// Versioned wrapper around a persisted list of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub version: u32,
    pub items: Vec<T>,
}

/// Serialize records into the current envelope format
pub fn encode_payload<T: Serialize>(items: &[T]) -> Result<String, EnvelopeError> {
    #[derive(Serialize)]
    struct Borrowed<'a, T> {
        version: u32,
        items: &'a [T],
    }

    Ok(serde_json::to_string(&Borrowed {
        version: PAYLOAD_VERSION,
        items,
    })?)
}

/// Decode records from either an envelope or a bare legacy array
pub fn decode_payload<T: DeserializeOwned>(json: &str) -> Result<Envelope<T>, EnvelopeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    if value.is_array() {
        return Ok(Envelope {
            version: LEGACY_PAYLOAD_VERSION,
            items: serde_json::from_value(value)?,
        });
    }

    // A missing or non-numeric version is left to serde and reported as malformed
    if let Some(found) = value.get("version").and_then(serde_json::Value::as_u64) {
        if found > u64::from(PAYLOAD_VERSION) {
            return Err(EnvelopeError::UnsupportedVersion {
                found: u32::try_from(found).unwrap_or(u32::MAX),
                supported: PAYLOAD_VERSION,
            });
        }
    }

    Ok(serde_json::from_value(value)?)
}
