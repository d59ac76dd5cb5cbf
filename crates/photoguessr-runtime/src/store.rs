use std::{
    collections::{BTreeMap, HashMap},
    io::{self, Write as _},
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};

use async_trait::async_trait;
use serde_json::Value;
use tempfile::NamedTempFile;
use tokio::{fs, sync::Mutex, task};

use crate::{PreferenceStore, StoreError};

type Entries = BTreeMap<String, Value>;

/// Preference store that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<Entries>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Locks shared by every store handle opened on the same path.
static FILE_LOCKS: LazyLock<std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    LazyLock::new(Default::default);

fn file_lock(path: &Path) -> Arc<Mutex<()>> {
    let mut locks = FILE_LOCKS
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    Arc::clone(locks.entry(path.to_owned()).or_default())
}

/// Preference store backed by a single JSON object on disk.
///
/// Every write rewrites the whole file through a temporary file in the same
/// directory that is then persisted over the target, so a crash leaves either
/// the old or the new contents. A missing file reads as empty.
///
/// Handles opened on the same path within one process serialize their
/// read-modify-write cycles.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = file_lock(&path);
        Self { path, lock }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &Entries) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let path = self.path.clone();
        task::spawn_blocking(move || write_atomic(&path, &bytes))
            .await
            .map_err(io::Error::other)?
    }
}

fn write_atomic(target: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(bytes)?;
    temp.flush()?;
    temp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_owned(), value);
        self.save(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn create_test_store() -> (JsonFilePreferenceStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs").join("preferences.json"));
        (store, dir)
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", json!(0)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(0)));
        store.set("k", json!(1)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(1)));
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let (store, _dir) = create_test_store();
        assert_eq!(store.get("lastSeenPhotoId").await.unwrap(), None);
        store.set("lastSeenPhotoId", json!(228_481)).await.unwrap();
        store.set("other", json!({"a": 1})).await.unwrap();

        let reopened = JsonFilePreferenceStore::new(store.path());
        assert_eq!(
            reopened.get("lastSeenPhotoId").await.unwrap(),
            Some(json!(228_481))
        );
        assert_eq!(reopened.get("other").await.unwrap(), Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_file_store_leaves_no_temporary_files() {
        let (store, _dir) = create_test_store();
        store.set("a", json!(1)).await.unwrap();
        store.set("b", json!(2)).await.unwrap();

        let parent = store.path().parent().unwrap();
        let names: Vec<_> = std::fs::read_dir(parent)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["preferences.json"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_handles_keep_every_write() {
        let (first, _dir) = create_test_store();
        let first = Arc::new(first);
        let second = Arc::new(JsonFilePreferenceStore::new(first.path()));

        for round in 0..50_i64 {
            let a = Arc::clone(&first);
            let b = Arc::clone(&second);
            let seen = tokio::spawn(async move { a.set("lastSeenPhotoId", json!(round)).await });
            let settings = tokio::spawn(async move {
                b.set("userSettings", json!({"color_scheme": "dark"})).await
            });
            seen.await.unwrap().unwrap();
            settings.await.unwrap().unwrap();

            assert_eq!(
                second.get("lastSeenPhotoId").await.unwrap(),
                Some(json!(round))
            );
            assert!(first.get("userSettings").await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn test_file_store_rejects_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, b"not json").await.unwrap();

        let store = JsonFilePreferenceStore::new(&path);
        assert!(matches!(store.get("k").await, Err(StoreError::Json(_))));
    }
}
