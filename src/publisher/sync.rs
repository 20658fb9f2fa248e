//! The sync pass: scan, diff against the manifest, copy and prune

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AssetSyncError, Result};
use crate::hash;
use crate::manifest::{BundleManifest, Manifest};
use crate::storage::Storage;

use super::target_directory;

/// What one sync pass did to the destination
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Destination paths written this pass
    pub written: Vec<String>,
    /// Destination paths deleted this pass
    pub deleted: Vec<String>,
    /// Files whose recorded hash already matched
    pub unchanged: usize,
    /// Whether the manifest document was rewritten
    pub manifest_updated: bool,
}

/// Sync one asset root into the destination tree under `key`.
///
/// The manifest write is strictly the last step: if any copy or delete
/// fails, the document is left at the state of the previous completed pass.
pub(crate) fn sync_asset_root<S: Storage>(
    storage: &S,
    key: &str,
    asset_root: &Path,
) -> Result<SyncReport> {
    let files = scan_asset_root(asset_root)?;

    let mut current = BundleManifest::new();
    for (relative, source) in &files {
        current.insert(relative.clone(), hash::hash_file(source)?);
    }

    let mut manifest = Manifest::load(storage)?;
    let previous = manifest.bundle(key);
    let target_dir = target_directory(key);

    let mut report = SyncReport::default();

    for (relative, source) in &files {
        if previous.get(relative) == current.get(relative) {
            report.unchanged += 1;
            continue;
        }

        let destination = format!("{target_dir}/{relative}");
        let mut reader =
            File::open(source).map_err(|e| AssetSyncError::source_read(source, e))?;
        storage.write_stream(&destination, &mut reader)?;
        report.written.push(destination);
    }

    for relative in previous.keys() {
        if current.contains_key(relative) {
            continue;
        }

        let destination = format!("{target_dir}/{relative}");
        storage.delete(&destination)?;
        report.deleted.push(destination);
    }

    if current != previous {
        manifest.replace_bundle(key, current);
        manifest.persist(storage)?;
        report.manifest_updated = true;
    }

    Ok(report)
}

/// Enumerate all files under the asset root, keyed by `/`-separated
/// relative path
fn scan_asset_root(root: &Path) -> Result<BTreeMap<String, PathBuf>> {
    let mut files = BTreeMap::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| AssetSyncError::SourceRead {
            path: root.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        files.insert(
            crate::storage::local::path_to_storage_key(relative),
            entry.path().to_path_buf(),
        );
    }

    Ok(files)
}
