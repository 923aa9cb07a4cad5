//! Key-value persistence port
//!
//! Trackers never reach into a process-wide preference store. They are
//! handed a [`KeyValueStore`] and keep their data under their own namespace.
//! Values are JSON text.

use moodflow_shared::EnvelopeError;
use thiserror::Error;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Persistence errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt data in namespace '{namespace}': {source}")]
    Corrupt {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unreadable payload at '{key}': {source}")]
    Payload {
        key: String,
        #[source]
        source: EnvelopeError,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Namespaced string key-value storage
///
/// Writes must be visible to the next read in the same process.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>>;

    fn set(&self, namespace: &str, key: &str, value: String) -> StoreResult<()>;

    /// Write several keys of one namespace; backends that can should apply
    /// them all or none
    fn set_many(&self, namespace: &str, entries: Vec<(String, String)>) -> StoreResult<()> {
        for (key, value) in entries {
            self.set(namespace, &key, value)?;
        }
        Ok(())
    }

    fn remove(&self, namespace: &str, key: &str) -> StoreResult<()>;
}
