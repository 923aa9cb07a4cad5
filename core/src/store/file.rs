//! File-backed store: one JSON object per namespace
//!
//! Each namespace lives in `<data_dir>/<namespace>.json`. Writes go to a
//! temporary file that is renamed over the original, so a failed write
//! leaves the previous contents in place. Reads always go to disk.

use super::{KeyValueStore, StoreError, StoreResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(path = %dir.display(), "Opened file store");
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn namespace_path(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{}.json", namespace))
    }

    fn read_namespace(&self, namespace: &str) -> StoreResult<Entries> {
        let path = self.namespace_path(namespace);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            namespace: namespace.to_string(),
            source,
        })
    }

    fn write_namespace(&self, namespace: &str, entries: &Entries) -> StoreResult<()> {
        let path = self.namespace_path(namespace);
        let tmp = self.dir.join(format!(".{}.json.tmp", namespace));

        let body = serde_json::to_vec_pretty(entries).map_err(|source| StoreError::Corrupt {
            namespace: namespace.to_string(),
            source,
        })?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn update<F>(&self, namespace: &str, apply: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Entries),
    {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_namespace(namespace)?;
        apply(&mut entries);
        self.write_namespace(namespace, &entries)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, namespace: &str, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read_namespace(namespace)?.remove(key))
    }

    fn set(&self, namespace: &str, key: &str, value: String) -> StoreResult<()> {
        self.update(namespace, |entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn set_many(&self, namespace: &str, entries: Vec<(String, String)>) -> StoreResult<()> {
        self.update(namespace, |existing| existing.extend(entries))
    }

    fn remove(&self, namespace: &str, key: &str) -> StoreResult<()> {
        self.update(namespace, |entries| {
            entries.remove(key);
        })
    }
}
