//! Common test utilities for integration tests
//!
//! Provides an in-memory app wired to a settable clock, and recording fakes
//! for the platform ports.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use moodflow_core::clock::FixedClock;
use moodflow_core::config::AppConfig;
use moodflow_core::platform::{
    AlarmScheduler, AlarmSlot, Notification, NotificationChannel, Notifier, PlatformResult,
    Vibrator,
};
use moodflow_core::store::MemoryStore;
use moodflow_core::AppState;
use moodflow_shared::PlatformError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Test application wrapper
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// In-memory app with the clock at 2024-01-01 09:00 UTC
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::utc(start_instant()));
        let state = AppState::new(store.clone(), clock.clone(), config);
        Self {
            state,
            store,
            clock,
        }
    }
}

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

// ============================================================================
// Alarm fake
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmCall {
    Exact(DateTime<Utc>),
    Windowed(DateTime<Utc>, Duration),
    Inexact(DateTime<Utc>),
    Repeating(DateTime<Utc>, Duration),
    Cancel,
}

/// Which registrations the fake refuses
#[derive(Debug, Clone, Copy, Default)]
pub struct Denials {
    pub exact: bool,
    pub windowed: bool,
    pub inexact: bool,
    pub repeating: bool,
    /// Exact registration fails with `Unavailable` instead of succeeding
    pub exact_unavailable: bool,
}

#[derive(Default)]
pub struct RecordingAlarms {
    denials: Denials,
    attempts: Mutex<Vec<(AlarmCall, bool)>>,
}

impl RecordingAlarms {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn denying(denials: Denials) -> Arc<Self> {
        Arc::new(Self {
            denials,
            attempts: Mutex::new(Vec::new()),
        })
    }

    /// Every call in order, successful or not
    pub fn attempts(&self) -> Vec<AlarmCall> {
        self.attempts.lock().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Calls the fake accepted
    pub fn registered(&self) -> Vec<AlarmCall> {
        self.attempts
            .lock()
            .iter()
            .filter(|(_, ok)| *ok)
            .map(|(c, _)| c.clone())
            .collect()
    }

    fn record(&self, slot: AlarmSlot, call: AlarmCall, result: PlatformResult<()>) -> PlatformResult<()> {
        assert_eq!(slot, AlarmSlot::WATER_REMINDER);
        self.attempts.lock().push((call, result.is_ok()));
        result
    }

    fn outcome(denied: bool) -> PlatformResult<()> {
        if denied {
            Err(PlatformError::SchedulingDenied("not permitted".to_string()))
        } else {
            Ok(())
        }
    }
}

impl AlarmScheduler for RecordingAlarms {
    fn register_exact(&self, slot: AlarmSlot, at: DateTime<Utc>) -> PlatformResult<()> {
        let result = if self.denials.exact_unavailable {
            Err(PlatformError::Unavailable("alarm service gone".to_string()))
        } else {
            Self::outcome(self.denials.exact)
        };
        self.record(slot, AlarmCall::Exact(at), result)
    }

    fn register_windowed(
        &self,
        slot: AlarmSlot,
        at: DateTime<Utc>,
        tolerance: Duration,
    ) -> PlatformResult<()> {
        self.record(
            slot,
            AlarmCall::Windowed(at, tolerance),
            Self::outcome(self.denials.windowed),
        )
    }

    fn register_inexact(&self, slot: AlarmSlot, at: DateTime<Utc>) -> PlatformResult<()> {
        self.record(slot, AlarmCall::Inexact(at), Self::outcome(self.denials.inexact))
    }

    fn register_repeating(
        &self,
        slot: AlarmSlot,
        first: DateTime<Utc>,
        period: Duration,
    ) -> PlatformResult<()> {
        self.record(
            slot,
            AlarmCall::Repeating(first, period),
            Self::outcome(self.denials.repeating),
        )
    }

    fn cancel(&self, slot: AlarmSlot) -> PlatformResult<()> {
        self.record(slot, AlarmCall::Cancel, Ok(()))
    }
}

// ============================================================================
// Notification and vibration fakes
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    pub channels: Mutex<Vec<NotificationChannel>>,
    pub delivered: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl Notifier for RecordingNotifier {
    fn recreate_channel(&self, channel: &NotificationChannel) -> PlatformResult<()> {
        self.channels.lock().push(channel.clone());
        Ok(())
    }

    fn deliver(&self, notification: &Notification) -> PlatformResult<()> {
        self.delivered.lock().push(notification.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingVibrator {
    pub broken: bool,
    pub patterns: Mutex<Vec<Vec<u64>>>,
}

impl RecordingVibrator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            broken: true,
            patterns: Mutex::new(Vec::new()),
        })
    }
}

impl Vibrator for RecordingVibrator {
    fn vibrate(&self, pattern_ms: &[u64]) -> PlatformResult<()> {
        if self.broken {
            return Err(PlatformError::Unavailable("no vibrator".to_string()));
        }
        self.patterns.lock().push(pattern_ms.to_vec());
        Ok(())
    }
}
