//! In-process store for tests and ephemeral hosts

use super::{KeyValueStore, StoreResult};
use parking_lot::RwLock;
use std::collections::HashMap;

type Namespaces = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Default)]
pub struct MemoryStore {
    namespaces: RwLock<Namespaces>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored under a namespace, sorted
    pub fn keys(&self, namespace: &str) -> Vec<String> {
        let guard = self.namespaces.read();
        let mut keys: Vec<String> = guard
            .get(namespace)
            .map(|ns| ns.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .namespaces
            .read()
            .get(namespace)
            .and_then(|ns| ns.get(key))
            .cloned())
    }

    fn set(&self, namespace: &str, key: &str, value: String) -> StoreResult<()> {
        self.namespaces
            .write()
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&self, namespace: &str, entries: Vec<(String, String)>) -> StoreResult<()> {
        let mut guard = self.namespaces.write();
        let ns = guard.entry(namespace.to_string()).or_default();
        ns.extend(entries);
        Ok(())
    }

    fn remove(&self, namespace: &str, key: &str) -> StoreResult<()> {
        if let Some(ns) = self.namespaces.write().get_mut(namespace) {
            ns.remove(key);
        }
        Ok(())
    }
}
