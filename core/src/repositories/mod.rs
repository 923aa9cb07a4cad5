//! Tracker repositories
//!
//! Provides the data access layer over a [`KeyValueStore`]. Each tracker owns
//! one namespace; list payloads are stored in the versioned envelope.

pub mod habits;
pub mod moods;
pub mod water;

pub use habits::HabitRepository;
pub use moods::MoodRepository;
pub use water::WaterRepository;

use crate::store::{KeyValueStore, StoreError, StoreResult};
use moodflow_shared::{decode_payload, encode_payload};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Read a record list, treating a missing key as empty
fn load_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    namespace: &str,
    key: &str,
) -> StoreResult<Vec<T>> {
    let Some(raw) = store.get(namespace, key)? else {
        return Ok(Vec::new());
    };

    let envelope = decode_payload::<T>(&raw).map_err(|source| StoreError::Payload {
        key: format!("{}/{}", namespace, key),
        source,
    })?;
    debug!(
        namespace,
        key,
        version = envelope.version,
        count = envelope.items.len(),
        "Loaded records"
    );
    Ok(envelope.items)
}

fn encode_list<T: Serialize>(namespace: &str, key: &str, items: &[T]) -> StoreResult<String> {
    encode_payload(items).map_err(|source| StoreError::Payload {
        key: format!("{}/{}", namespace, key),
        source,
    })
}

/// Parse a scalar JSON value stored under `key`
fn parse_scalar<T: DeserializeOwned>(namespace: &str, raw: &str) -> StoreResult<T> {
    serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
        namespace: namespace.to_string(),
        source,
    })
}
