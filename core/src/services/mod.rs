//! Tracker services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and platform collaborators.

pub mod habits;
pub mod hydration;
pub mod moods;
pub mod reminders;

pub use habits::{CompletionOutcome, HabitTracker};
pub use hydration::{DailyWaterTotal, WaterTracker};
pub use moods::MoodJournal;
pub use reminders::{
    select_delivery, DeliveryStrategy, ReminderReceiver, ReminderScheduler, ReminderState,
    ScheduleCapabilities, ScheduleReport,
};
