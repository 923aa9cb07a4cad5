//! Tracker error handling
//!
//! This module provides the unified error type for tracker operations and
//! maps each failure to the machine code and toast text the presentation
//! layer shows.

use crate::store::StoreError;
use chrono::NaiveDate;
use moodflow_shared::PlatformError;
use thiserror::Error;
use tracing::error;

/// Error type returned by every tracker operation
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Habit {habit_id} already marked on {date}")]
    AlreadyMarked { habit_id: String, date: NaiveDate },

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Storage error")]
    Storage(#[from] StoreError),
}

impl CoreError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::AlreadyMarked { .. } => "ALREADY_MARKED",
            CoreError::Platform(_) => "PLATFORM_ERROR",
            CoreError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation(msg) => msg.clone(),
            CoreError::NotFound(_) => "That item no longer exists".to_string(),
            CoreError::AlreadyMarked { .. } => "Already marked today".to_string(),
            CoreError::Platform(err) => {
                error!("Platform error: {:?}", err);
                "Reminders are unavailable on this device".to_string()
            }
            CoreError::Storage(err) => {
                error!("Storage error: {:?}", err);
                "Could not save your data".to_string()
            }
        }
    }
}

/// Result type alias for tracker operations
pub type CoreResult<T> = Result<T, CoreError>;
