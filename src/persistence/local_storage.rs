//! Browser LocalStorage backend

use super::KeyValueStore;

/// Handle to `window.localStorage`; a no-op when storage is unavailable
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| std::io::Error::other("LocalStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| std::io::Error::other(format!("{e:?}")))
    }
}
