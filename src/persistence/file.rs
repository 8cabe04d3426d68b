//! One file per key under a data directory

use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueStore;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CONNECTION_DEFENDER_DATA_DIR";

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `$CONNECTION_DEFENDER_DATA_DIR`, or `./.connection-defender`
    pub fn from_env() -> Self {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".connection-defender"));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        // Write then rename so a crash never leaves a half-written file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "connection-defender-test-{}",
            std::process::id()
        ));
        let mut store = FileStore::new(&dir);
        assert_eq!(store.get("highScore"), None);

        store.set("highScore", "[500,100]").unwrap();
        assert_eq!(store.get("highScore").as_deref(), Some("[500,100]"));

        store.set("highScore", "[900]").unwrap();
        assert_eq!(store.get("highScore").as_deref(), Some("[900]"));

        let _ = fs::remove_dir_all(&dir);
    }
}
