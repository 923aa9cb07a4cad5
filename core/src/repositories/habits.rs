//! Habit repository
//!
//! All habits live under one key as a single list, most recently added first.

use super::{encode_list, load_list};
use crate::store::{KeyValueStore, StoreResult};
use moodflow_shared::Habit;

pub const HABITS_NAMESPACE: &str = "habits_prefs";
pub const HABITS_KEY: &str = "habits";

/// Habit list repository
pub struct HabitRepository;

impl HabitRepository {
    /// Load every habit in stored order
    pub fn load_all(store: &dyn KeyValueStore) -> StoreResult<Vec<Habit>> {
        load_list(store, HABITS_NAMESPACE, HABITS_KEY)
    }

    /// Replace the stored list
    pub fn save_all(store: &dyn KeyValueStore, habits: &[Habit]) -> StoreResult<()> {
        let payload = encode_list(HABITS_NAMESPACE, HABITS_KEY, habits)?;
        store.set(HABITS_NAMESPACE, HABITS_KEY, payload)
    }

    pub fn find(store: &dyn KeyValueStore, id: &str) -> StoreResult<Option<Habit>> {
        Ok(Self::load_all(store)?.into_iter().find(|h| h.id == id))
    }
}
