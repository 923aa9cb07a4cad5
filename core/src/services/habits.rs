//! Habit tracking service
//!
//! Provides business logic for habits including:
//! - Creating, editing and deleting habit definitions
//! - Daily completion marking, at most once per local calendar day
//! - Removal of a habit once its day target is reached
//! - Derived progress views for the habit list

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::repositories::HabitRepository;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use moodflow_shared::validation::{collect_errors, HabitInput};
use moodflow_shared::{assign_unique_colors, reaches_target, Habit, HabitUnit, HabitView};
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// Result of marking a habit done for a day
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Progress was credited and the habit stays in the list
    Progressed(Habit),
    /// The target was reached; the habit has been removed
    Completed(Habit),
}

impl CompletionOutcome {
    pub fn habit(&self) -> &Habit {
        match self {
            CompletionOutcome::Progressed(habit) | CompletionOutcome::Completed(habit) => habit,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionOutcome::Completed(_))
    }
}

/// Habit service for business logic
#[derive(Clone)]
pub struct HabitTracker {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl HabitTracker {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Add a habit at the top of the list
    pub fn create(&self, name: &str, target_number: i32, unit: HabitUnit) -> CoreResult<Habit> {
        let input = validate_input(name, target_number, unit)?;

        let mut habits = HabitRepository::load_all(self.store.as_ref())?;
        let habit = Habit::new(input.name, input.target_number, input.unit);
        habits.insert(0, habit.clone());
        HabitRepository::save_all(self.store.as_ref(), &habits)?;

        info!(habit_id = %habit.id, name = %habit.name, target = habit.target_progress, unit = %habit.unit, "Habit created");
        Ok(habit)
    }

    pub fn get(&self, id: &str) -> CoreResult<Option<Habit>> {
        Ok(HabitRepository::find(self.store.as_ref(), id)?)
    }

    /// Replace name, target and unit; progress is kept
    pub fn update(
        &self,
        id: &str,
        name: &str,
        target_number: i32,
        unit: HabitUnit,
    ) -> CoreResult<Habit> {
        let input = validate_input(name, target_number, unit)?;

        let mut habits = HabitRepository::load_all(self.store.as_ref())?;
        let habit = habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("Habit {}", id)))?;

        habit.name = input.name;
        habit.target_progress = input.target_number;
        habit.unit = input.unit;
        let updated = habit.clone();
        HabitRepository::save_all(self.store.as_ref(), &habits)?;

        info!(habit_id = %id, "Habit updated");
        Ok(updated)
    }

    /// Remove a habit; returns whether anything was removed
    pub fn delete(&self, id: &str) -> CoreResult<bool> {
        let mut habits = HabitRepository::load_all(self.store.as_ref())?;
        let before = habits.len();
        habits.retain(|h| h.id != id);

        if habits.len() == before {
            debug!(habit_id = %id, "Delete of unknown habit ignored");
            return Ok(false);
        }

        HabitRepository::save_all(self.store.as_ref(), &habits)?;
        info!(habit_id = %id, "Habit deleted");
        Ok(true)
    }

    /// Credit one day of progress for `today`
    ///
    /// Returns `Ok(None)` when no habit has this id. Fails with
    /// [`CoreError::AlreadyMarked`] if the habit was already marked on `today`.
    pub fn complete(&self, id: &str, today: NaiveDate) -> CoreResult<Option<CompletionOutcome>> {
        let mut habits = HabitRepository::load_all(self.store.as_ref())?;
        let Some(index) = habits.iter().position(|h| h.id == id) else {
            debug!(habit_id = %id, "Complete of unknown habit ignored");
            return Ok(None);
        };

        if habits[index].is_marked_on(today) {
            return Err(CoreError::AlreadyMarked {
                habit_id: id.to_string(),
                date: today,
            });
        }

        let target_days = habits[index].target_days();
        let new_progress = habits[index].current_progress.saturating_add(1);

        let outcome = if reaches_target(new_progress, target_days) {
            let mut habit = habits.remove(index);
            habit.current_progress = new_progress;
            habit.last_marked_date = Some(today);
            info!(habit_id = %id, name = %habit.name, target_days, "Habit completed");
            CompletionOutcome::Completed(habit)
        } else {
            let habit = &mut habits[index];
            habit.current_progress = new_progress;
            habit.last_marked_date = Some(today);
            debug!(habit_id = %id, progress = new_progress, target_days, "Habit progressed");
            CompletionOutcome::Progressed(habit.clone())
        };

        HabitRepository::save_all(self.store.as_ref(), &habits)?;
        Ok(Some(outcome))
    }

    /// [`complete`](Self::complete) using the device's local date
    pub fn complete_today(&self, id: &str) -> CoreResult<Option<CompletionOutcome>> {
        self.complete(id, self.clock.today())
    }

    /// All habits, most recently added first, with display colours made unique
    pub fn list(&self) -> CoreResult<Vec<HabitView>> {
        let habits = HabitRepository::load_all(self.store.as_ref())?;
        Ok(assign_unique_colors(habits)
            .into_iter()
            .map(HabitView::from)
            .collect())
    }
}

fn validate_input(name: &str, target_number: i32, unit: HabitUnit) -> CoreResult<HabitInput> {
    let input = HabitInput::new(name, target_number, unit);
    if let Err(errors) = input.validate() {
        let message = collect_errors(&errors)
            .into_iter()
            .next()
            .map(|e| e.message)
            .unwrap_or_else(|| "Invalid habit".to_string());
        return Err(CoreError::Validation(message));
    }
    Ok(input)
}
