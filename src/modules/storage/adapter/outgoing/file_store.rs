use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::modules::storage::application::ports::outgoing::key_value_store::{
    validate_key, KeyValueStore, StorageError,
};

// ============================================================================
// File-backed store: one `<key>.json` file per key inside the data directory
// ============================================================================

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates the data directory if it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::Io(format!("cannot create {}: {}", root.display(), e))
        })?;

        debug!(path = %root.display(), "File key-value store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        // Write to a sibling file first so a crash never leaves a half-written key.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .map_err(|e| StorageError::Io(format!("cannot write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("cannot replace {}: {}", path.display(), e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!(
                "cannot remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("cms").join("data");

        let store = FileKeyValueStore::open(&nested).unwrap();

        assert!(nested.is_dir());
        assert_eq!(store.root(), nested.as_path());
    }

    #[test]
    fn test_set_writes_one_file_per_key() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.set("portfolio_section_order", r#"["hero"]"#).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("portfolio_section_order.json")).unwrap();
        assert_eq!(on_disk, r#"["hero"]"#);
        assert!(!dir.path().join("portfolio_section_order.json.tmp").exists());
    }

    #[test]
    fn test_get_roundtrip_and_absent_key() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert_eq!(store.get("portfolio_projects").unwrap(), None);

        store.set("portfolio_projects", "[]").unwrap();
        assert_eq!(
            store.get("portfolio_projects").unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.set("portfolio_settings", r#"{"a":1}"#).unwrap();
        store.set("portfolio_settings", r#"{"a":2}"#).unwrap();

        assert_eq!(
            store.get("portfolio_settings").unwrap(),
            Some(r#"{"a":2}"#.to_string())
        );
    }

    #[test]
    fn test_remove_deletes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.set("portfolio_gallery", "[]").unwrap();
        store.remove("portfolio_gallery").unwrap();
        store.remove("portfolio_gallery").unwrap();

        assert!(!dir.path().join("portfolio_gallery.json").exists());
        assert_eq!(store.get("portfolio_gallery").unwrap(), None);
    }

    #[test]
    fn test_rejects_keys_that_escape_the_directory() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.get("../outside"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
