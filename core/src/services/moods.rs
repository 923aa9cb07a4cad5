//! Mood journal service

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::repositories::MoodRepository;
use crate::store::KeyValueStore;
use moodflow_shared::{mood_catalog, MoodEntry};
use std::sync::Arc;
use tracing::{debug, info};

/// Mood journal service for business logic
#[derive(Clone)]
pub struct MoodJournal {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl MoodJournal {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Record a mood from the catalog with an optional note and tags
    pub fn log(&self, mood_id: i32, note: &str, tags: &[String]) -> CoreResult<MoodEntry> {
        let mood = mood_catalog::mood_by_id(mood_id)
            .ok_or_else(|| CoreError::Validation("Please select a mood first".to_string()))?;

        if let Some(unknown) = tags.iter().find(|t| mood_catalog::tag_by_id(t).is_none()) {
            return Err(CoreError::Validation(format!("Unknown tag: {}", unknown)));
        }

        let entry = MoodEntry {
            mood,
            note: note.trim().to_string(),
            tags: tags.to_vec(),
            timestamp: self.clock.now().timestamp_millis(),
        };

        let mut entries = MoodRepository::load_all(self.store.as_ref())?;
        entries.insert(0, entry.clone());
        MoodRepository::save_all(self.store.as_ref(), &entries)?;

        info!(mood_id, tags = entry.tags.len(), "Mood logged");
        Ok(entry)
    }

    /// Entries, most recent first
    pub fn list(&self) -> CoreResult<Vec<MoodEntry>> {
        let mut entries = MoodRepository::load_all(self.store.as_ref())?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Remove the first entry equal to `entry`; returns whether one was found
    pub fn delete(&self, entry: &MoodEntry) -> CoreResult<bool> {
        let mut entries = MoodRepository::load_all(self.store.as_ref())?;
        let Some(index) = entries.iter().position(|e| e == entry) else {
            debug!(timestamp = entry.timestamp, "Delete of unknown mood entry ignored");
            return Ok(false);
        };

        entries.remove(index);
        MoodRepository::save_all(self.store.as_ref(), &entries)?;
        info!(timestamp = entry.timestamp, "Mood entry deleted");
        Ok(true)
    }
}
