//! Application state management
//!
//! This module wires the persistence port, clock and configuration that
//! every tracker needs, and hands out trackers bound to them.
//!
//! # Design Principles
//!
//! 1. **Inject, never reach**: trackers get their store and clock from here
//! 2. **Cheap cloning**: all fields are behind `Arc`
//! 3. **Immutable after creation**: trackers hold no state of their own

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::platform::{AlarmScheduler, Notifier, Vibrator};
use crate::services::{HabitTracker, MoodJournal, ReminderReceiver, ReminderScheduler, WaterTracker};
use crate::store::{JsonFileStore, KeyValueStore};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Persistence port shared by all trackers
    pub store: Arc<dyn KeyValueStore>,
    pub clock: Arc<dyn Clock>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, config: AppConfig) -> Self {
        Self {
            store,
            clock,
            config: Arc::new(config),
        }
    }

    /// File-backed state in the configured data directory, on the system clock
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let data_dir = config.data_dir()?;
        let store = JsonFileStore::open(&data_dir)
            .with_context(|| format!("Failed to open data directory {}", data_dir.display()))?;

        info!(
            data_dir = %data_dir.display(),
            env = if AppConfig::is_production() { "production" } else { "development" },
            "MoodFlow core ready"
        );
        Ok(Self::new(Arc::new(store), Arc::new(SystemClock), config))
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn habits(&self) -> HabitTracker {
        HabitTracker::new(self.store.clone(), self.clock.clone())
    }

    pub fn water(&self) -> WaterTracker {
        WaterTracker::new(
            self.store.clone(),
            self.clock.clone(),
            self.config.water.default_goal_ml,
        )
    }

    pub fn moods(&self) -> MoodJournal {
        MoodJournal::new(self.store.clone(), self.clock.clone())
    }

    pub fn reminder_scheduler(&self, alarms: Arc<dyn AlarmScheduler>) -> ReminderScheduler {
        ReminderScheduler::new(alarms, self.store.clone(), self.clock.clone())
    }

    pub fn reminder_receiver(
        &self,
        notifier: Arc<dyn Notifier>,
        vibrator: Arc<dyn Vibrator>,
    ) -> ReminderReceiver {
        ReminderReceiver::new(
            notifier,
            vibrator,
            self.clock.clone(),
            self.config.reminders.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageConfig;
    use crate::store::MemoryStore;
    use moodflow_shared::HabitUnit;

    #[test]
    fn test_trackers_share_the_store() {
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            Arc::new(SystemClock),
            AppConfig::default(),
        );
        let habit = state.habits().create("Read", 30, HabitUnit::Day).unwrap();

        let cloned = state.clone();
        assert_eq!(cloned.habits().get(&habit.id).unwrap(), Some(habit));
    }

    #[test]
    fn test_default_goal_comes_from_config() {
        let mut config = AppConfig::default();
        config.water.default_goal_ml = 2500;
        let state = AppState::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock), config);
        assert_eq!(state.water().state().unwrap().daily_goal_ml, 2500);
    }

    #[test]
    fn test_from_config_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            storage: StorageConfig {
                data_dir: Some(dir.path().join("data")),
            },
            ..AppConfig::default()
        };

        let state = AppState::from_config(config).unwrap();
        state.water().add_record(250).unwrap();
        assert!(dir.path().join("data").join("water_prefs.json").exists());
    }
}
