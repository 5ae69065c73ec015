//! Durable Key-Value Persistence
//!
//! Cart and favorites state survive restarts through a small key-value
//! abstraction: whole-value JSON blobs under fixed keys. Malformed or
//! unreadable stored data is discarded in favor of the default value, and
//! write failures are swallowed — the in-memory state stays authoritative
//! for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Storage key for the serialized cart item list
pub const CART_STORAGE_KEY: &str = "elite-flower-cart";
/// Storage key for the serialized favorites id list
pub const FAVORITES_STORAGE_KEY: &str = "elite-flower-favorites";

/// Whole-value key-value store. Implementations never raise to the caller;
/// a failed `load` is `None` and a failed `save` is dropped.
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Deserializes the stored blob under `key`, falling back to `T::default()`
/// when the key is absent or holds malformed data.
pub fn load_json<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.load(key) {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "discarding malformed stored state");
                T::default()
            }
        },
        None => T::default(),
    }
}

/// Serializes `value` under `key`. Serialization failures are logged and
/// dropped.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.save(key, &raw),
        Err(err) => warn!(key, error = %err, "failed to serialize state"),
    }
}

// =============================================================================
// File-backed store
// =============================================================================

/// One JSON file per key under a state directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            warn!(key, error = %err, "failed to create state directory");
            return;
        }
        if let Err(err) = std::fs::write(self.path_for(key), value) {
            warn!(key, error = %err, "failed to persist state");
        }
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Non-durable store for tests and headless use.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, e.g. with corrupt data to exercise recovery paths.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}
