//! Key-value persistence for scores and settings
//!
//! Backends:
//! - `MemoryStore`: process-local, used by tests and headless runs
//! - `FileStore`: one JSON file per key (native only)
//! - `LocalStorage`: browser LocalStorage (wasm only)
//!
//! Storage is best-effort. Readers fall back to defaults and writers log
//! failures; nothing here can end a game.

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

/// A string-keyed store of string values
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read and deserialize `key`, falling back to `T::default()`
pub fn load_json<T, S>(store: &S, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(json) = store.get(key) else {
        log::info!("No saved '{}', using defaults", key);
        return T::default();
    };

    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Discarding unreadable '{}': {}", key, e);
            T::default()
        }
    }
}

/// Serialize and write `value` under `key`, logging any failure
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: serde::Serialize,
    S: KeyValueStore + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to encode '{}': {}", key, e);
            return false;
        }
    };

    match store.set(key, &json) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save '{}': {}", key, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_load_json_falls_back_on_garbage() {
        let mut store = MemoryStore::new();
        store.set("scores", "{not json").unwrap();
        let loaded: Vec<u64> = load_json(&store, "scores");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load_json() {
        let mut store = MemoryStore::new();
        assert!(save_json(&mut store, "scores", &vec![3u64, 2, 1]));
        assert_eq!(store.get("scores").as_deref(), Some("[3,2,1]"));
        let loaded: Vec<u64> = load_json(&store, "scores");
        assert_eq!(loaded, vec![3, 2, 1]);
    }
}
