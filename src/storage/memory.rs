//! In-memory storage for unit tests
//!
//! Records every write and delete so tests can assert exactly which
//! operations a sync pass performed.

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::{Arc, RwLock};

use crate::error::{AssetSyncError, Result};

use super::Storage;

#[derive(Debug, Default)]
struct MemoryStorageInner {
    files: BTreeMap<String, Vec<u8>>,
    write_log: Vec<String>,
    delete_log: Vec<String>,
}

/// In-memory storage for testing
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<MemoryStorageInner>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written since the last `clear_log`, in order
    pub fn write_log(&self) -> Vec<String> {
        self.read_inner(|inner| inner.write_log.clone())
    }

    /// Paths deleted since the last `clear_log`, in order
    pub fn delete_log(&self) -> Vec<String> {
        self.read_inner(|inner| inner.delete_log.clone())
    }

    /// Forget recorded writes and deletes, keeping file contents
    pub fn clear_log(&self) {
        let mut inner = self.write_inner();
        inner.write_log.clear();
        inner.delete_log.clear();
    }

    /// All stored file paths, sorted
    pub fn all_files(&self) -> Vec<String> {
        self.read_inner(|inner| inner.files.keys().cloned().collect())
    }

    fn read_inner<T>(&self, f: impl FnOnce(&MemoryStorageInner) -> T) -> T {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&inner)
    }

    fn write_inner(&self) -> std::sync::RwLockWriteGuard<'_, MemoryStorageInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &str) -> bool {
        self.read_inner(|inner| {
            inner.files.contains_key(path)
                || inner
                    .files
                    .keys()
                    .any(|p| p.starts_with(&format!("{path}/")))
        })
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.read_inner(|inner| {
            inner
                .files
                .get(path)
                .cloned()
                .ok_or_else(|| AssetSyncError::storage_read(path, "no such file"))
        })
    }

    fn write(&self, path: &str, contents: &[u8]) -> Result<()> {
        let mut inner = self.write_inner();
        inner.files.insert(path.to_string(), contents.to_vec());
        inner.write_log.push(path.to_string());
        Ok(())
    }

    fn write_stream(&self, path: &str, reader: &mut dyn Read) -> Result<()> {
        let mut contents = Vec::new();
        reader
            .read_to_end(&mut contents)
            .map_err(|e| AssetSyncError::storage_write(path, e))?;
        self.write(path, &contents)
    }

    fn delete(&self, path: &str) -> Result<()> {
        let mut inner = self.write_inner();
        inner.files.remove(path);
        inner.delete_log.push(path.to_string());
        Ok(())
    }

    fn delete_dir(&self, path: &str) -> Result<()> {
        let prefix = format!("{path}/");
        let mut inner = self.write_inner();
        inner.files.retain(|p, _| !p.starts_with(&prefix));
        Ok(())
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>> {
        let prefix = format!("{path}/");
        Ok(self.read_inner(|inner| {
            inner
                .files
                .keys()
                .filter(|p| p.starts_with(&prefix))
                .cloned()
                .collect()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_roundtrip() {
        let storage = MemoryStorage::new();
        storage.write("bundles/example/one.js", b"1").unwrap();

        assert!(storage.exists("bundles/example/one.js"));
        assert_eq!(storage.read("bundles/example/one.js").unwrap(), b"1");
    }

    #[test]
    fn test_exists_for_directory_prefix() {
        let storage = MemoryStorage::new();
        storage.write("bundles/example/one.js", b"1").unwrap();

        assert!(storage.exists("bundles/example"));
        assert!(!storage.exists("bundles/other"));
    }

    #[test]
    fn test_write_stream_records_write() {
        let storage = MemoryStorage::new();
        let mut reader = std::io::Cursor::new(b"streamed".to_vec());

        storage.write_stream("bundles/example/a.js", &mut reader).unwrap();

        assert_eq!(storage.write_log(), vec!["bundles/example/a.js"]);
        assert_eq!(storage.read("bundles/example/a.js").unwrap(), b"streamed");
    }

    #[test]
    fn test_delete_dir_removes_prefix_only() {
        let storage = MemoryStorage::new();
        storage.write("bundles/example/a.js", b"a").unwrap();
        storage.write("bundles/examplelike/b.js", b"b").unwrap();

        storage.delete_dir("bundles/example").unwrap();

        assert!(!storage.exists("bundles/example/a.js"));
        assert!(storage.exists("bundles/examplelike/b.js"));
    }

    #[test]
    fn test_logs_reset() {
        let storage = MemoryStorage::new();
        storage.write("a.js", b"a").unwrap();
        storage.delete("a.js").unwrap();

        storage.clear_log();

        assert!(storage.write_log().is_empty());
        assert!(storage.delete_log().is_empty());
    }
}
