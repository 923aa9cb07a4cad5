//! Mood journal repository

use super::{encode_list, load_list};
use crate::store::{KeyValueStore, StoreResult};
use moodflow_shared::MoodEntry;

pub const MOOD_NAMESPACE: &str = "mood_prefs";
pub const MOOD_ENTRIES_KEY: &str = "MOOD_ENTRIES";

/// Mood entry repository
pub struct MoodRepository;

impl MoodRepository {
    pub fn load_all(store: &dyn KeyValueStore) -> StoreResult<Vec<MoodEntry>> {
        load_list(store, MOOD_NAMESPACE, MOOD_ENTRIES_KEY)
    }

    pub fn save_all(store: &dyn KeyValueStore, entries: &[MoodEntry]) -> StoreResult<()> {
        let payload = encode_list(MOOD_NAMESPACE, MOOD_ENTRIES_KEY, entries)?;
        store.set(MOOD_NAMESPACE, MOOD_ENTRIES_KEY, payload)
    }
}
