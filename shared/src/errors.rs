//! Error types shared by the MoodFlow crates

use thiserror::Error;

/// Errors reported by platform collaborators (alarms, notifications, vibration)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform refused the requested scheduling mode (permission or OS policy)
    #[error("Scheduling denied: {0}")]
    SchedulingDenied(String),

    #[error("Platform service unavailable: {0}")]
    Unavailable(String),
}

/// Errors decoding a persisted payload envelope
#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unsupported payload version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
