//! Platform collaborators
//!
//! The alarm service, notification manager and vibrator belong to the host
//! OS. Trackers only see these traits; hosts supply the implementations.

use chrono::{DateTime, Duration, Utc};
use moodflow_shared::PlatformError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type PlatformResult<T> = Result<T, PlatformError>;

/// A named alarm registration the platform can replace or cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlarmSlot {
    pub name: &'static str,
    pub request_code: i32,
}

impl AlarmSlot {
    pub const WATER_REMINDER: AlarmSlot = AlarmSlot {
        name: "water_reminder",
        request_code: 1001,
    };
}

/// Alarm registration
///
/// Every method may fail with [`PlatformError::SchedulingDenied`] when the OS
/// refuses that delivery mode.
pub trait AlarmScheduler: Send + Sync {
    fn register_exact(&self, slot: AlarmSlot, at: DateTime<Utc>) -> PlatformResult<()>;

    fn register_windowed(
        &self,
        slot: AlarmSlot,
        at: DateTime<Utc>,
        tolerance: Duration,
    ) -> PlatformResult<()>;

    fn register_inexact(&self, slot: AlarmSlot, at: DateTime<Utc>) -> PlatformResult<()>;

    fn register_repeating(
        &self,
        slot: AlarmSlot,
        first: DateTime<Utc>,
        period: Duration,
    ) -> PlatformResult<()>;

    fn cancel(&self, slot: AlarmSlot) -> PlatformResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Default,
    High,
}

/// Channel settings, re-applied on every fire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    pub id: String,
    pub name: String,
    pub importance: Importance,
    pub vibration_pattern_ms: Vec<u64>,
    pub sound: Option<String>,
}

/// Where activating a notification takes the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeepLink {
    #[serde(rename = "open_log_water")]
    OpenLogWater,
}

impl DeepLink {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeepLink::OpenLogWater => "open_log_water",
        }
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i32,
    pub channel_id: String,
    pub title: String,
    pub body: String,
    pub deep_link: DeepLink,
}

pub trait Notifier: Send + Sync {
    /// Create or update the channel; must be idempotent
    fn recreate_channel(&self, channel: &NotificationChannel) -> PlatformResult<()>;

    fn deliver(&self, notification: &Notification) -> PlatformResult<()>;
}

pub trait Vibrator: Send + Sync {
    fn vibrate(&self, pattern_ms: &[u64]) -> PlatformResult<()>;
}
