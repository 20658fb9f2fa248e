//! Local filesystem storage rooted at the public directory

use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AssetSyncError, Result};

use super::Storage;

/// Production storage backed by a directory on disk
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a storage rooted at the given public directory.
    ///
    /// The directory itself is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AssetSyncError::storage_write(parent.display().to_string(), e))?;
        }
        Ok(())
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        std::fs::read(self.full_path(path)).map_err(|e| AssetSyncError::storage_read(path, e))
    }

    fn write(&self, path: &str, contents: &[u8]) -> Result<()> {
        let full = self.full_path(path);
        self.ensure_parent_dir(&full)?;
        std::fs::write(&full, contents).map_err(|e| AssetSyncError::storage_write(path, e))
    }

    fn write_stream(&self, path: &str, reader: &mut dyn Read) -> Result<()> {
        let full = self.full_path(path);
        self.ensure_parent_dir(&full)?;

        let mut file =
            std::fs::File::create(&full).map_err(|e| AssetSyncError::storage_write(path, e))?;
        std::io::copy(reader, &mut file).map_err(|e| AssetSyncError::storage_write(path, e))?;

        Ok(())
    }

    fn delete(&self, path: &str) -> Result<()> {
        match std::fs::remove_file(self.full_path(path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssetSyncError::storage_delete(path, e)),
        }
    }

    fn delete_dir(&self, path: &str) -> Result<()> {
        match std::fs::remove_dir_all(self.full_path(path)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AssetSyncError::storage_delete(path, e)),
        }
    }

    fn list_files(&self, path: &str) -> Result<Vec<String>> {
        let dir = self.full_path(path);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir) {
            let entry = entry.map_err(|e| AssetSyncError::storage_read(path, e))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path());
            files.push(path_to_storage_key(relative));
        }

        files.sort();
        Ok(files)
    }
}

/// Render a relative path with `/` separators regardless of platform
pub(crate) fn path_to_storage_key(path: &Path) -> String {
    let parts: Vec<String> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
