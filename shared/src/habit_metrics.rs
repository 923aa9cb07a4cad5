//! Derived progress calculations for habits and water intake
//!
//! Pure functions only. Everything the presentation layer renders as a
//! percentage, counter or fill level is computed here so every surface
//! agrees on the numbers.

use crate::models::{Habit, HabitColor};
use std::collections::HashSet;

// ============================================================================
// Habit Progress
// ============================================================================

/// Completion percentage for a habit
///
/// `round(100 * progress / target_days)` clamped to 0..=100. A non-positive
/// day target yields 0 rather than dividing by zero.
pub fn habit_percent(current_progress: i32, target_days: i64) -> i32 {
    if target_days <= 0 {
        return 0;
    }
    let raw = f64::from(current_progress) * 100.0 / target_days as f64;
    raw.round().clamp(0.0, 100.0) as i32
}

/// Counter text shown under a habit, e.g. `"3/30"`
pub fn habit_counter_text(current_progress: i32, target_days: i64) -> String {
    format!("{}/{}", current_progress, target_days)
}

/// Whether the given progress completes a habit
///
/// A target of zero days completes on the first mark.
pub fn reaches_target(progress: i32, target_days: i64) -> bool {
    i64::from(progress) >= target_days
}

// ============================================================================
// Colour Assignment
// ============================================================================

/// Reassign palette colours so no two habits share one
///
/// Habits are visited in order. A habit keeps its colour unless an earlier
/// habit already took it; otherwise it gets the first free palette colour.
/// Once the palette is exhausted colours wrap to the first entry and repeat.
pub fn assign_unique_colors(habits: Vec<Habit>) -> Vec<Habit> {
    let mut used: HashSet<HabitColor> = HashSet::with_capacity(habits.len());

    habits
        .into_iter()
        .map(|mut habit| {
            let color = match habit.color {
                Some(existing) if !used.contains(&existing) => existing,
                _ => next_available_color(&used),
            };
            used.insert(color);
            habit.color = Some(color);
            habit
        })
        .collect()
}

fn next_available_color(used: &HashSet<HabitColor>) -> HabitColor {
    HabitColor::PALETTE
        .into_iter()
        .find(|c| !used.contains(c))
        .unwrap_or(HabitColor::PALETTE[0])
}

// ============================================================================
// Water Progress
// ============================================================================

/// Fraction of the daily goal consumed
///
/// Not clamped above 1.0; callers clamp for display if they need to.
pub fn water_progress_fraction(consumed_ml: i64, goal_ml: i32) -> f64 {
    if goal_ml == 0 {
        return 0.0;
    }
    consumed_ml as f64 / f64::from(goal_ml)
}

/// Check if the daily goal is met (>= 100%)
pub fn is_water_goal_met(consumed_ml: i64, goal_ml: i32) -> bool {
    if goal_ml <= 0 {
        return false;
    }
    consumed_ml >= i64::from(goal_ml)
}
