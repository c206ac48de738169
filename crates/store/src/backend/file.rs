//! File-backed store backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] that keeps each key in `<dir>/<key>.json`.
///
/// Writes go to a temporary file that is then renamed over the target, so a
/// crash mid-write never leaves a truncated document behind.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if necessary) a store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        debug!(dir = %dir.display(), "Opened file store");
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    /// Directory holding the store files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '@' | '+' | '%'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(key: &str) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        key: key.to_owned(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("file store lock poisoned".to_owned()))?;
        fs::write(&tmp, value).map_err(io_error(key))?;
        fs::rename(&tmp, &path).map_err(io_error(key))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("file store lock poisoned".to_owned()))?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key)(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_store() -> FileStore {
        let dir = std::env::temp_dir().join(format!("wighub-store-{}", uuid::Uuid::new_v4()));
        FileStore::open(dir).unwrap()
    }

    #[test]
    fn test_persists_across_instances() {
        let store = temp_store();
        store.set("cart_jane@wighub.com", "[]").unwrap();

        let reopened = FileStore::open(store.dir()).unwrap();
        assert_eq!(
            reopened.get("cart_jane@wighub.com").unwrap().as_deref(),
            Some("[]")
        );
        assert!(store.dir().join("cart_jane@wighub.com.json").exists());
        assert!(!store.dir().join("cart_jane@wighub.com.json.tmp").exists());

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_missing_key_and_remove() {
        let store = temp_store();
        assert_eq!(store.get("products").unwrap(), None);
        store.remove("products").unwrap();

        store.set("products", "[]").unwrap();
        store.remove("products").unwrap();
        assert_eq!(store.get("products").unwrap(), None);

        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_rejects_path_traversal() {
        let store = temp_store();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get("a/b"),
            Err(StoreError::InvalidKey(_))
        ));
        fs::remove_dir_all(store.dir()).unwrap();
    }

    #[test]
    fn test_accepts_escaped_account_keys() {
        let store = temp_store();
        let key = crate::keys::cart(&wighub_core::Email::parse("o'brien@wighub.com").unwrap());
        store.set(&key, "[]").unwrap();
        assert_eq!(store.get(&key).unwrap().as_deref(), Some("[]"));
        fs::remove_dir_all(store.dir()).unwrap();
    }
}
