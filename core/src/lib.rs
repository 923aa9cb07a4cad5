//! MoodFlow Core Library
//!
//! Habit, water and mood trackers over an injected key-value store, plus the
//! hydration reminder scheduler.
//!
//! ## Architecture
//!
//! - Services: tracker business logic
//! - Repositories: record lists and scalars over the store
//! - Store: the key-value port and its memory and file backends
//! - Platform: alarm, notification and vibration ports the host implements

pub mod clock;
pub mod config;
pub mod error;
pub mod platform;
pub mod repositories;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;

pub use error::{CoreError, CoreResult};
pub use state::AppState;
