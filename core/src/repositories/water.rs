//! Water tracking repository
//!
//! Keys under `water_prefs`: `goal`, `consumed`, `reminder_ms` and `records`.

use super::{encode_list, load_list, parse_scalar};
use crate::store::{KeyValueStore, StoreResult};
use moodflow_shared::{ReminderInterval, WaterRecord, WaterState};
use tracing::warn;

pub const WATER_NAMESPACE: &str = "water_prefs";
pub const GOAL_KEY: &str = "goal";
pub const CONSUMED_KEY: &str = "consumed";
pub const REMINDER_KEY: &str = "reminder_ms";
pub const RECORDS_KEY: &str = "records";

/// Water state repository
pub struct WaterRepository;

impl WaterRepository {
    /// Load the water state, using `default_goal_ml` when no goal is stored
    ///
    /// A stored consumed total that disagrees with the records is replaced by
    /// the record sum.
    pub fn load(store: &dyn KeyValueStore, default_goal_ml: i32) -> StoreResult<WaterState> {
        let daily_goal_ml = match store.get(WATER_NAMESPACE, GOAL_KEY)? {
            Some(raw) => parse_scalar(WATER_NAMESPACE, &raw)?,
            None => default_goal_ml,
        };

        let records: Vec<WaterRecord> = load_list(store, WATER_NAMESPACE, RECORDS_KEY)?;
        let mut state = WaterState {
            daily_goal_ml,
            consumed_ml: 0,
            records,
            reminder_interval: Self::load_reminder_interval(store)?,
        };

        let records_total = state.records_total();
        if let Some(raw) = store.get(WATER_NAMESPACE, CONSUMED_KEY)? {
            let stored: i64 = parse_scalar(WATER_NAMESPACE, &raw)?;
            if stored != records_total {
                warn!(
                    stored,
                    records_total, "Stored water total disagrees with records, using records"
                );
            }
        }
        state.consumed_ml = records_total;

        Ok(state)
    }

    /// Persist goal, consumed total and records in one write
    pub fn save(store: &dyn KeyValueStore, state: &WaterState) -> StoreResult<()> {
        let records = encode_list(WATER_NAMESPACE, RECORDS_KEY, &state.records)?;
        store.set_many(
            WATER_NAMESPACE,
            vec![
                (GOAL_KEY.to_string(), state.daily_goal_ml.to_string()),
                (CONSUMED_KEY.to_string(), state.consumed_ml.to_string()),
                (RECORDS_KEY.to_string(), records),
            ],
        )
    }

    /// Stored reminder interval; zero or an unrecognised value reads as unset
    pub fn load_reminder_interval(
        store: &dyn KeyValueStore,
    ) -> StoreResult<Option<ReminderInterval>> {
        match store.get(WATER_NAMESPACE, REMINDER_KEY)? {
            Some(raw) => {
                let millis: i64 = parse_scalar(WATER_NAMESPACE, &raw)?;
                let interval = ReminderInterval::from_millis(millis);
                if interval.is_none() && millis != 0 {
                    warn!(millis, "Ignoring unrecognised reminder interval");
                }
                Ok(interval)
            }
            None => Ok(None),
        }
    }

    pub fn save_reminder_interval(
        store: &dyn KeyValueStore,
        interval: ReminderInterval,
    ) -> StoreResult<()> {
        store.set(
            WATER_NAMESPACE,
            REMINDER_KEY,
            interval.as_millis().to_string(),
        )
    }
}
