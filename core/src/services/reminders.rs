//! Hydration reminder scheduling and delivery
//!
//! One alarm slot holds the water reminder. Scheduling replaces whatever the
//! slot held, persists the interval and registers the first trigger one
//! interval from now, falling back from exact to windowed to inexact delivery
//! as the platform denies each mode. A repeating registration with the same
//! period follows. Reminders are best-effort: platform failures are logged
//! and never returned.

use crate::clock::Clock;
use crate::config::ReminderConfig;
use crate::error::CoreResult;
use crate::platform::{AlarmScheduler, AlarmSlot, DeepLink, Notification, Notifier, Vibrator};
use crate::repositories::WaterRepository;
use crate::store::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use moodflow_shared::{PlatformError, ReminderInterval};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ============================================================================
// Delivery Strategies
// ============================================================================

/// How strictly the platform is asked to honour the first trigger time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    Exact,
    /// Fire anywhere within `tolerance` after the target time
    Windowed { tolerance: Duration },
    /// Single best-effort delivery
    Inexact,
}

impl DeliveryStrategy {
    /// Strategies in the order they are tried, strictest first
    pub fn chain(interval: ReminderInterval) -> [DeliveryStrategy; 3] {
        [
            DeliveryStrategy::Exact,
            DeliveryStrategy::Windowed {
                tolerance: interval.as_duration(),
            },
            DeliveryStrategy::Inexact,
        ]
    }

    fn is_allowed(&self, capabilities: &ScheduleCapabilities) -> bool {
        match self {
            DeliveryStrategy::Exact => capabilities.exact,
            DeliveryStrategy::Windowed { .. } => capabilities.windowed,
            DeliveryStrategy::Inexact => capabilities.inexact,
        }
    }
}

/// Delivery modes the platform currently permits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleCapabilities {
    pub exact: bool,
    pub windowed: bool,
    pub inexact: bool,
}

impl ScheduleCapabilities {
    pub const ALL: ScheduleCapabilities = ScheduleCapabilities {
        exact: true,
        windowed: true,
        inexact: true,
    };

    fn deny(&mut self, strategy: DeliveryStrategy) {
        match strategy {
            DeliveryStrategy::Exact => self.exact = false,
            DeliveryStrategy::Windowed { .. } => self.windowed = false,
            DeliveryStrategy::Inexact => self.inexact = false,
        }
    }
}

/// First strategy in `chain` the capabilities allow
pub fn select_delivery(
    chain: &[DeliveryStrategy],
    capabilities: &ScheduleCapabilities,
) -> Option<DeliveryStrategy> {
    chain.iter().copied().find(|s| s.is_allowed(capabilities))
}

// ============================================================================
// Scheduler
// ============================================================================

/// Reminder slot state, derived from the persisted interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderState {
    Unscheduled,
    Scheduled(ReminderInterval),
}

/// What a schedule call managed to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReport {
    pub interval: ReminderInterval,
    pub first_fire: DateTime<Utc>,
    /// `None` when every strategy failed
    pub delivery: Option<DeliveryStrategy>,
    pub repeating: bool,
}

#[derive(Clone)]
pub struct ReminderScheduler {
    alarms: Arc<dyn AlarmScheduler>,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl ReminderScheduler {
    pub fn new(
        alarms: Arc<dyn AlarmScheduler>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            alarms,
            store,
            clock,
        }
    }

    pub fn state(&self) -> CoreResult<ReminderState> {
        Ok(
            match WaterRepository::load_reminder_interval(self.store.as_ref())? {
                Some(interval) => ReminderState::Scheduled(interval),
                None => ReminderState::Unscheduled,
            },
        )
    }

    /// Replace the reminder schedule with one firing every `interval`
    ///
    /// Only a storage failure is returned as an error.
    pub fn schedule(&self, interval: ReminderInterval) -> CoreResult<ScheduleReport> {
        let slot = AlarmSlot::WATER_REMINDER;
        if let Err(e) = self.alarms.cancel(slot) {
            warn!(slot = slot.name, error = %e, "Failed to cancel previous reminder");
        }

        WaterRepository::save_reminder_interval(self.store.as_ref(), interval)?;

        let first_fire = self.clock.now() + interval.as_duration();
        let delivery = self.register_first(slot, first_fire, interval);

        let repeating = match self
            .alarms
            .register_repeating(slot, first_fire, interval.as_duration())
        {
            Ok(()) => true,
            Err(e) => {
                warn!(slot = slot.name, error = %e, "Repeating reminder not registered");
                false
            }
        };

        info!(
            interval = %interval,
            first_fire = %first_fire,
            delivery = ?delivery,
            repeating,
            "Water reminders scheduled"
        );

        Ok(ScheduleReport {
            interval,
            first_fire,
            delivery,
            repeating,
        })
    }

    /// Schedule `chosen`, else the saved interval, else leave things alone
    pub fn schedule_or_keep(
        &self,
        chosen: Option<ReminderInterval>,
    ) -> CoreResult<Option<ScheduleReport>> {
        let interval = match chosen {
            Some(interval) => Some(interval),
            None => WaterRepository::load_reminder_interval(self.store.as_ref())?,
        };

        match interval {
            Some(interval) => self.schedule(interval).map(Some),
            None => {
                debug!("No reminder interval chosen or saved, keeping current schedule");
                Ok(None)
            }
        }
    }

    fn register_first(
        &self,
        slot: AlarmSlot,
        at: DateTime<Utc>,
        interval: ReminderInterval,
    ) -> Option<DeliveryStrategy> {
        let chain = DeliveryStrategy::chain(interval);
        let mut capabilities = ScheduleCapabilities::ALL;

        while let Some(strategy) = select_delivery(&chain, &capabilities) {
            match self.register(slot, at, strategy) {
                Ok(()) => return Some(strategy),
                Err(PlatformError::SchedulingDenied(reason)) => {
                    debug!(?strategy, %reason, "Delivery mode denied, falling back");
                    capabilities.deny(strategy);
                }
                Err(e) => {
                    warn!(?strategy, error = %e, "Reminder scheduling failed");
                    return None;
                }
            }
        }

        warn!(slot = slot.name, "Every reminder delivery mode was denied");
        None
    }

    fn register(
        &self,
        slot: AlarmSlot,
        at: DateTime<Utc>,
        strategy: DeliveryStrategy,
    ) -> Result<(), PlatformError> {
        match strategy {
            DeliveryStrategy::Exact => self.alarms.register_exact(slot, at),
            DeliveryStrategy::Windowed { tolerance } => {
                self.alarms.register_windowed(slot, at, tolerance)
            }
            DeliveryStrategy::Inexact => self.alarms.register_inexact(slot, at),
        }
    }
}

// ============================================================================
// Delivery
// ============================================================================

/// Handles each reminder trigger the platform delivers
#[derive(Clone)]
pub struct ReminderReceiver {
    notifier: Arc<dyn Notifier>,
    vibrator: Arc<dyn Vibrator>,
    clock: Arc<dyn Clock>,
    config: ReminderConfig,
}

impl ReminderReceiver {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        vibrator: Arc<dyn Vibrator>,
        clock: Arc<dyn Clock>,
        config: ReminderConfig,
    ) -> Self {
        Self {
            notifier,
            vibrator,
            clock,
            config,
        }
    }

    /// Post the hydration notification and buzz
    ///
    /// The channel is recreated on every fire so sound and vibration changes
    /// apply. A vibration failure is ignored.
    pub fn on_fire(&self) -> CoreResult<Notification> {
        self.notifier.recreate_channel(&self.config.channel())?;

        let notification = Notification {
            id: notification_id(self.clock.now()),
            channel_id: self.config.channel_id.clone(),
            title: self.config.title.clone(),
            body: self.config.body.clone(),
            deep_link: DeepLink::OpenLogWater,
        };
        self.notifier.deliver(&notification)?;

        if let Err(e) = self.vibrator.vibrate(&self.config.vibration_pattern_ms) {
            debug!(error = %e, "Reminder vibration skipped");
        }

        info!(notification_id = notification.id, "Hydration reminder delivered");
        Ok(notification)
    }
}

/// Low 32 bits of the fire instant in milliseconds
fn notification_id(at: DateTime<Utc>) -> i32 {
    at.timestamp_millis() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NONE: ScheduleCapabilities = ScheduleCapabilities {
        exact: false,
        windowed: false,
        inexact: false,
    };

    #[rstest]
    #[case(ScheduleCapabilities::ALL, Some(DeliveryStrategy::Exact))]
    #[case(ScheduleCapabilities { exact: false, ..ScheduleCapabilities::ALL },
           Some(DeliveryStrategy::Windowed { tolerance: Duration::minutes(30) }))]
    #[case(ScheduleCapabilities { inexact: true, ..NONE }, Some(DeliveryStrategy::Inexact))]
    #[case(NONE, None)]
    fn test_select_delivery(
        #[case] capabilities: ScheduleCapabilities,
        #[case] expected: Option<DeliveryStrategy>,
    ) {
        let chain = DeliveryStrategy::chain(ReminderInterval::ThirtyMinutes);
        assert_eq!(select_delivery(&chain, &capabilities), expected);
    }

    #[test]
    fn test_windowed_tolerance_matches_interval() {
        let chain = DeliveryStrategy::chain(ReminderInterval::TwoHours);
        assert_eq!(
            chain[1],
            DeliveryStrategy::Windowed {
                tolerance: Duration::hours(2)
            }
        );
    }

    #[test]
    fn test_notification_id_changes_per_fire() {
        let at = DateTime::from_timestamp_millis(1_704_099_600_000).unwrap();
        assert_ne!(
            notification_id(at),
            notification_id(at + Duration::milliseconds(1))
        );
    }
}
