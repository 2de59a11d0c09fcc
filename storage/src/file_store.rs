use crate::errors::StorageError;
use crate::store::KeyValueStore;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

const APP_DIR_NAME: &str = "promptdeck";
const DEFAULT_FILE_NAME: &str = "preferences.json";

static TMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value store persisted as a single JSON object file.
///
/// A missing file reads as an empty store. Writes re-read the file, apply
/// the change and replace the file through a uniquely named temporary
/// sibling, so a crash mid-write leaves the previous contents intact. A file
/// that is not a JSON object is replaced on the next write.
///
/// Clones share one write lock. Separately constructed stores for the same
/// path do not, so their read-modify-write cycles can interleave and the last
/// rename wins.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// `<config dir>/promptdeck/preferences.json`, falling back to the
    /// working directory when the platform has no config directory.
    pub fn default_location() -> PathBuf {
        match dirs::config_dir() {
            Some(dir) => dir.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME),
            None => {
                log::warn!("No platform config directory, storing preferences in working directory");
                PathBuf::from(DEFAULT_FILE_NAME)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        match value {
            Value::Object(entries) => Ok(entries),
            other => Err(self.corrupt(format!("expected a JSON object, found {other}"))),
        }
    }

    /// Current entries as the base for a write. A corrupt file counts as empty
    /// so that it gets overwritten instead of blocking every later write.
    async fn entries_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.read_entries().await {
            Err(StorageError::Corrupt { reason, .. }) => {
                log::warn!(
                    "Overwriting corrupt store file {}: {reason}",
                    self.path.display()
                );
                Ok(Map::new())
            }
            other => other,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        let n = TMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{n}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp_path = self.tmp_path();
        if let Err(e) = tokio::fs::write(&tmp_path, content).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StorageError::io(&tmp_path, e));
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StorageError::io(&self.path, e));
        }

        log::debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn corrupt(&self, reason: impl ToString) -> StorageError {
        StorageError::Corrupt {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.read_entries().await?;
        match entries.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(self.corrupt(format!(
                "value for key '{key}' is not a string: {other}"
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries_for_write().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("nested").join("prefs.json"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let value = assert_ok!(store.get("app_theme_mode").await);
        assert_none!(value);
    }

    #[tokio::test]
    async fn test_set_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_ok!(store.set("app_theme_mode", "light").await);
        assert!(store.path().exists());

        let value = assert_ok!(store.get("app_theme_mode").await);
        assert_some_eq!(value, "light".to_string());
    }

    #[tokio::test]
    async fn test_values_survive_new_instance() {
        let dir = TempDir::new().unwrap();
        assert_ok!(store_in(&dir).set("app_theme_mode", "dark").await);
        assert_ok!(store_in(&dir).set("other", "kept").await);

        let reopened = store_in(&dir);
        assert_some_eq!(
            assert_ok!(reopened.get("app_theme_mode").await),
            "dark".to_string()
        );
        assert_some_eq!(assert_ok!(reopened.get("other").await), "kept".to_string());
    }

    #[tokio::test]
    async fn test_remove_deletes_only_that_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_ok!(store.set("a", "1").await);
        assert_ok!(store.set("b", "2").await);

        assert_ok!(store.remove("a").await);
        assert_ok!(store.remove("never-set").await);

        assert_none!(assert_ok!(store.get("a").await));
        assert_some_eq!(assert_ok!(store.get("b").await), "2".to_string());
    }

    #[tokio::test]
    async fn test_non_object_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = FileStore::new(&path);
        let err = assert_err!(store.get("app_theme_mode").await);
        assert_matches!(err, StorageError::Corrupt { .. });
    }

    #[tokio::test]
    async fn test_non_string_value_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"app_theme_mode": 42}"#).unwrap();

        let store = FileStore::new(&path);
        let err = assert_err!(store.get("app_theme_mode").await);
        assert!(err.to_string().contains("app_theme_mode"));
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "").unwrap();

        let store = FileStore::new(&path);
        assert_none!(assert_ok!(store.get("app_theme_mode").await));
    }

    #[tokio::test]
    async fn test_set_overwrites_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(&path);
        assert_err!(store.get("app_theme_mode").await);

        assert_ok!(store.set("app_theme_mode", "light").await);
        assert_some_eq!(
            assert_ok!(store.get("app_theme_mode").await),
            "light".to_string()
        );
    }

    #[tokio::test]
    async fn test_set_replaces_non_string_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"app_theme_mode": 42, "other": "kept"}"#).unwrap();

        let store = FileStore::new(&path);
        assert_ok!(store.set("app_theme_mode", "dark").await);

        assert_some_eq!(
            assert_ok!(store.get("app_theme_mode").await),
            "dark".to_string()
        );
        assert_some_eq!(assert_ok!(store.get("other").await), "kept".to_string());
    }

    #[test]
    fn test_tmp_paths_are_unique_per_write() {
        let first = FileStore::new("/tmp/prefs.json");
        let second = FileStore::new("/tmp/prefs.json");

        let a = first.tmp_path();
        let b = second.tmp_path();
        assert_ne!(a, b);
        assert_eq!(a.parent(), first.path().parent());
        assert!(a.to_string_lossy().ends_with(".tmp"));
    }

    #[tokio::test]
    async fn test_independent_instances_write_without_collision() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        let first = FileStore::new(&path);
        let second = FileStore::new(&path);

        let (a, b) = tokio::join!(
            first.set("app_theme_mode", "light"),
            second.set("app_theme_mode", "dark")
        );
        assert_ok!(a);
        assert_ok!(b);

        let value = assert_some!(assert_ok!(FileStore::new(&path).get("app_theme_mode").await));
        assert!(value == "light" || value == "dark");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
