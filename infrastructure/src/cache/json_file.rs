//! Embedded JSON file cache adapter
//!
//! Persists the question → answer map as a single pretty-printed JSON
//! document. A missing file starts an empty cache; a corrupt file is
//! logged and discarded rather than taking the service down. Write
//! failures are surfaced to the caller.

use async_trait::async_trait;
use eightball_application::{Cache, CacheError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Persistent store serialized to JSON.
#[derive(Debug, Serialize, Deserialize, Default)]
struct CacheStore {
    entries: HashMap<String, String>,
}

/// File-backed cache for resolved answers.
///
/// Answers are stored as UTF-8 text so the file stays human-readable
/// and hand-editable. There is no expiry and no eviction: an answer,
/// once given, stands.
#[derive(Debug)]
pub struct JsonFileCache {
    store: Mutex<CacheStore>,
    path: PathBuf,
}

impl JsonFileCache {
    /// Open the cache at `path`, loading any existing entries.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = Self::load_from_disk(&path);
        Self {
            store: Mutex::new(store),
            path,
        }
    }

    /// The default on-disk location: `<data dir>/eightball/answers.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eightball")
            .join("answers.json")
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.store.lock().unwrap().entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.lock().unwrap().entries.is_empty()
    }

    fn load_from_disk(path: &Path) -> CacheStore {
        match std::fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(store) => store,
                Err(e) => {
                    warn!("Answer cache file is corrupt, starting empty: {}", e);
                    CacheStore::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CacheStore::default(),
            Err(e) => {
                warn!("Failed to read answer cache, starting empty: {}", e);
                CacheStore::default()
            }
        }
    }

    fn save_to_disk(&self, store: &CacheStore) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CacheError::Backend(format!("create {}: {e}", parent.display())))?;
        }
        let data = serde_json::to_string_pretty(store)
            .map_err(|e| CacheError::Backend(format!("serialize cache: {e}")))?;
        std::fs::write(&self.path, data)
            .map_err(|e| CacheError::Backend(format!("write {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl Cache for JsonFileCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let store = self.store.lock().unwrap();
        Ok(store.entries.get(key).map(|v| v.as_bytes().to_vec()))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let text = std::str::from_utf8(value)
            .map_err(|e| CacheError::Backend(format!("value is not UTF-8: {e}")))?;
        let mut store = self.store.lock().unwrap();
        store.entries.insert(key.to_string(), text.to_string());
        self.save_to_disk(&store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let cache = JsonFileCache::open(dir.path().join("answers.json"));
        assert!(cache.is_empty());
        assert_eq!(cache.get("Q").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.json");

        let cache = JsonFileCache::open(&path);
        cache.set("Will it work?", b"Absolutely!").await.unwrap();
        drop(cache);

        let reopened = JsonFileCache::open(&path);
        assert_eq!(
            reopened.get("Will it work?").await.unwrap(),
            Some(b"Absolutely!".to_vec())
        );
        assert_eq!(reopened.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let cache = JsonFileCache::open(&path);
        assert!(cache.is_empty());
        // And it recovers: the next write replaces the corrupt file.
        cache.set("Q", b"Unlikely").await.unwrap();
        let reopened = JsonFileCache::open(&path);
        assert_eq!(reopened.get("Q").await.unwrap(), Some(b"Unlikely".to_vec()));
    }

    #[tokio::test]
    async fn test_set_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("answers.json");
        let cache = JsonFileCache::open(&path);
        cache.set("Q", b"Simply put, no").await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_non_utf8_value_rejected() {
        let dir = tempdir().unwrap();
        let cache = JsonFileCache::open(dir.path().join("answers.json"));
        let result = cache.set("Q", &[0xff, 0xfe]).await;
        assert!(matches!(result, Err(CacheError::Backend(_))));
    }
}
