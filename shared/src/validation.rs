//! Input validation functions
//!
//! This module provides validation utilities for user input.
//! Uses both custom validators and the `validator` crate for derive macros.

use crate::units::HabitUnit;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Habit fields as entered on the add/edit habit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HabitInput {
    #[validate(length(min = 1, message = "Please enter a habit name"))]
    pub name: String,
    #[validate(range(min = 1, message = "Please enter a valid number"))]
    pub target_number: i32,
    pub unit: HabitUnit,
}

impl HabitInput {
    /// Build an input with the name trimmed, as the form does
    pub fn new(name: &str, target_number: i32, unit: HabitUnit) -> Self {
        Self {
            name: name.trim().to_string(),
            target_number,
            unit,
        }
    }
}

/// Validate a daily water goal (in ml)
pub fn validate_water_goal(goal_ml: i32) -> Result<(), String> {
    if goal_ml <= 0 {
        return Err("Daily goal must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate a water intake amount (in ml)
pub fn validate_water_amount(amount_ml: i32) -> Result<(), String> {
    if amount_ml <= 0 {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Habit Name",
        "target_number" => "Target",
        "unit" => "Unit",
        "daily_goal_ml" => "Daily Goal",
        "amount_ml" => "Amount",
        "mood_id" => "Mood",
        "tags" => "Tags",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Flatten derive-macro errors into field-aware errors, sorted by field
pub fn collect_errors(errors: &validator::ValidationErrors) -> Vec<ValidationError> {
    let mut collected: Vec<ValidationError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                ValidationError::new(&field, &message)
            })
        })
        .collect();
    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_water_values() {
        assert!(validate_water_goal(2000).is_ok());
        assert!(validate_water_goal(0).is_err());
        assert!(validate_water_amount(250).is_ok());
        assert!(validate_water_amount(-250).is_err());
    }

    #[test]
    fn test_habit_input_trims_name() {
        let input = HabitInput::new("  Read  ", 30, HabitUnit::Day);
        assert_eq!(input.name, "Read");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_habit_input_derive_validation() {
        let input = HabitInput::new("   ", 0, HabitUnit::Day);
        let errors = input.validate().unwrap_err();
        let collected = collect_errors(&errors);

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].field, "name");
        assert_eq!(collected[0].user_message(), "Habit Name: Please enter a habit name");
        assert_eq!(collected[1].field, "target_number");
        assert_eq!(collected[1].user_message(), "Target: Please enter a valid number");
    }

    #[test]
    fn test_field_display_labels() {
        assert_eq!(get_field_display_label("daily_goal_ml"), "Daily Goal");
        assert_eq!(get_field_display_label("unknown_field"), "unknown_field");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_positive_targets_valid(target in 1i32..=i32::MAX) {
            prop_assert!(HabitInput::new("x", target, HabitUnit::Year).validate().is_ok());
        }

        #[test]
        fn prop_blank_names_invalid(name in "[ \t]{0,8}", target in 1i32..=365) {
            let errors = HabitInput::new(&name, target, HabitUnit::Day).validate().unwrap_err();
            let collected = collect_errors(&errors);
            prop_assert_eq!(collected.len(), 1);
            prop_assert_eq!(collected[0].field.as_str(), "name");
        }

        #[test]
        fn prop_non_positive_amounts_invalid(amount in i32::MIN..=0) {
            prop_assert!(validate_water_amount(amount).is_err());
        }
    }
}
