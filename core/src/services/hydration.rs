//! Hydration tracking service
//!
//! Provides business logic for water intake tracking including:
//! - Water intake logging and deletion
//! - Daily goal changes, which reset the day's records
//! - Progress and summary calculation
//! - Per-day totals for the history view

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::repositories::WaterRepository;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use moodflow_shared::validation::{validate_water_amount, validate_water_goal};
use moodflow_shared::{water_progress_fraction, WaterRecord, WaterState, WaterSummary};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Water logged on one local calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWaterTotal {
    pub date: NaiveDate,
    pub total_ml: i64,
    pub entry_count: usize,
}

/// Hydration service for business logic
#[derive(Clone)]
pub struct WaterTracker {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    default_goal_ml: i32,
}

impl WaterTracker {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, default_goal_ml: i32) -> Self {
        Self {
            store,
            clock,
            default_goal_ml,
        }
    }

    fn load(&self) -> CoreResult<WaterState> {
        Ok(WaterRepository::load(self.store.as_ref(), self.default_goal_ml)?)
    }

    fn save(&self, state: &WaterState) -> CoreResult<()> {
        Ok(WaterRepository::save(self.store.as_ref(), state)?)
    }

    pub fn state(&self) -> CoreResult<WaterState> {
        self.load()
    }

    /// Set the daily goal
    ///
    /// A different goal clears every record and zeroes the consumed total.
    /// The same goal leaves records untouched.
    pub fn set_goal(&self, goal_ml: i32) -> CoreResult<WaterState> {
        validate_water_goal(goal_ml).map_err(CoreError::Validation)?;

        let mut state = self.load()?;
        if state.daily_goal_ml != goal_ml {
            info!(
                old_goal_ml = state.daily_goal_ml,
                new_goal_ml = goal_ml,
                cleared_records = state.records.len(),
                "Water goal changed, resetting intake"
            );
            state.daily_goal_ml = goal_ml;
            state.consumed_ml = 0;
            state.records.clear();
        } else {
            debug!(goal_ml, "Water goal unchanged");
        }

        self.save(&state)?;
        Ok(state)
    }

    /// Log an intake stamped with the current instant
    pub fn add_record(&self, amount_ml: i32) -> CoreResult<WaterRecord> {
        validate_water_amount(amount_ml).map_err(CoreError::Validation)?;

        let mut state = self.load()?;
        let record = WaterRecord::new(amount_ml, self.clock.now());
        state.records.insert(0, record);
        state.consumed_ml += i64::from(amount_ml);
        self.save(&state)?;

        info!(
            amount_ml,
            consumed_ml = state.consumed_ml,
            goal_ml = state.daily_goal_ml,
            "Water intake logged"
        );
        Ok(record)
    }

    /// Remove the record at `index` (most recent first)
    ///
    /// Out-of-range indexes are ignored and return `Ok(None)`.
    pub fn delete_record(&self, index: usize) -> CoreResult<Option<WaterRecord>> {
        let mut state = self.load()?;
        if index >= state.records.len() {
            debug!(index, len = state.records.len(), "Delete of unknown water record ignored");
            return Ok(None);
        }

        let removed = state.records.remove(index);
        state.consumed_ml = state.records_total();
        self.save(&state)?;

        info!(
            amount_ml = removed.amount_ml,
            consumed_ml = state.consumed_ml,
            "Water record deleted"
        );
        Ok(Some(removed))
    }

    /// Raw consumed/goal fraction, may exceed 1.0
    pub fn progress(&self) -> CoreResult<f64> {
        let state = self.load()?;
        Ok(water_progress_fraction(state.consumed_ml, state.daily_goal_ml))
    }

    pub fn summary(&self) -> CoreResult<WaterSummary> {
        Ok(WaterSummary::from(&self.load()?))
    }

    /// Totals grouped by local calendar date, most recent day first
    pub fn daily_totals(&self) -> CoreResult<Vec<DailyWaterTotal>> {
        let state = self.load()?;
        let mut by_date: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();

        for record in &state.records {
            let Some(at) = record.recorded_at() else {
                continue;
            };
            let entry = by_date.entry(self.clock.local_date(at)).or_default();
            entry.0 += i64::from(record.amount_ml);
            entry.1 += 1;
        }

        Ok(by_date
            .into_iter()
            .rev()
            .map(|(date, (total_ml, entry_count))| DailyWaterTotal {
                date,
                total_ml,
                entry_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn tracker_with_clock() -> (WaterTracker, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::utc(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        ));
        let tracker = WaterTracker::new(Arc::new(MemoryStore::new()), clock.clone(), 2000);
        (tracker, clock)
    }

    fn tracker() -> WaterTracker {
        tracker_with_clock().0
    }

    #[test]
    fn test_add_and_delete_record() {
        let tracker = tracker();
        tracker.add_record(500).unwrap();
        assert_eq!(tracker.state().unwrap().consumed_ml, 500);
        assert!((tracker.progress().unwrap() - 0.25).abs() < f64::EPSILON);

        let removed = tracker.delete_record(0).unwrap().unwrap();
        assert_eq!(removed.amount_ml, 500);
        assert_eq!(tracker.state().unwrap().consumed_ml, 0);
    }

    #[test]
    fn test_records_are_most_recent_first() {
        let (tracker, clock) = tracker_with_clock();
        tracker.add_record(250).unwrap();
        clock.advance(Duration::minutes(30));
        tracker.add_record(300).unwrap();

        let state = tracker.state().unwrap();
        let amounts: Vec<_> = state.records.iter().map(|r| r.amount_ml).collect();
        assert_eq!(amounts, vec![300, 250]);
        assert!(state.records[0].time_millis > state.records[1].time_millis);
    }

    #[test]
    fn test_invalid_amount_leaves_state() {
        let tracker = tracker();
        tracker.add_record(250).unwrap();
        let err = tracker.add_record(0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref m) if m == "Amount must be greater than 0"));
        assert_eq!(tracker.state().unwrap().consumed_ml, 250);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let tracker = tracker();
        tracker.add_record(250).unwrap();
        assert_eq!(tracker.delete_record(3).unwrap(), None);
        assert_eq!(tracker.state().unwrap().records.len(), 1);
    }

    #[test]
    fn test_goal_change_resets() {
        let tracker = tracker();
        tracker.add_record(500).unwrap();
        tracker.add_record(250).unwrap();

        let state = tracker.set_goal(3000).unwrap();
        assert_eq!(state.daily_goal_ml, 3000);
        assert_eq!(state.consumed_ml, 0);
        assert!(state.records.is_empty());
        assert_eq!(tracker.state().unwrap(), state);
    }

    #[test]
    fn test_same_goal_keeps_records() {
        let tracker = tracker();
        tracker.add_record(500).unwrap();

        let state = tracker.set_goal(2000).unwrap();
        assert_eq!(state.consumed_ml, 500);
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let tracker = tracker();
        assert!(matches!(tracker.set_goal(0), Err(CoreError::Validation(_))));
        assert_eq!(tracker.state().unwrap().daily_goal_ml, 2000);
    }

    #[test]
    fn test_summary() {
        let tracker = tracker();
        tracker.add_record(1500).unwrap();
        tracker.add_record(750).unwrap();

        let summary = tracker.summary().unwrap();
        assert_eq!(summary.intake_text, "2250/2000 ml");
        assert_eq!(summary.cups, 2);
        assert!(summary.goal_met);
        assert!(summary.fraction > 1.0);
    }

    #[test]
    fn test_daily_totals_group_by_local_date() {
        let (tracker, clock) = tracker_with_clock();
        tracker.add_record(250).unwrap();
        tracker.add_record(250).unwrap();
        clock.advance(Duration::days(1));
        tracker.add_record(400).unwrap();

        let totals = tracker.daily_totals().unwrap();
        assert_eq!(
            totals,
            vec![
                DailyWaterTotal {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    total_ml: 400,
                    entry_count: 1,
                },
                DailyWaterTotal {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    total_ml: 500,
                    entry_count: 2,
                },
            ]
        );
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i32),
        Delete(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1i32..=2000).prop_map(Op::Add),
            (0usize..8).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_consumed_equals_record_sum(ops in prop::collection::vec(op_strategy(), 0..30)) {
            let tracker = tracker();
            for op in ops {
                match op {
                    Op::Add(amount) => { tracker.add_record(amount).unwrap(); }
                    Op::Delete(index) => { tracker.delete_record(index).unwrap(); }
                }
                let state = tracker.state().unwrap();
                prop_assert_eq!(state.consumed_ml, state.records_total());
            }
        }

        #[test]
        fn prop_goal_change_clears(amounts in prop::collection::vec(1i32..=1000, 1..10), goal in 1i32..=5000) {
            let tracker = tracker();
            for amount in &amounts {
                tracker.add_record(*amount).unwrap();
            }
            let before = tracker.state().unwrap();
            let after = tracker.set_goal(goal).unwrap();

            if goal == before.daily_goal_ml {
                prop_assert_eq!(after.records, before.records);
            } else {
                prop_assert!(after.records.is_empty());
                prop_assert_eq!(after.consumed_ml, 0);
            }
        }
    }
}
