//! Asset publisher
//!
//! Copies the public asset files of bundles and apps into the shared public
//! directory, tracking per-bundle content hashes in the manifest document so
//! repeated syncs only touch what changed.
//!
//! ## Destination layout
//!
//! ```text
//! <public root>/
//! ├── asset-manifest.json
//! └── bundles/
//!     ├── example/          # ExampleBundle
//!     │   └── <relative asset paths>
//!     └── storefront/       # StorefrontBundle
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::manifest::Manifest;
use crate::registry::Bundle;
use crate::storage::Storage;

mod sync;

pub use sync::SyncReport;

/// Destination subdirectory holding all published bundles
pub const BUNDLE_PREFIX: &str = "bundles";

/// Where a source keeps its public assets, relative to its root
pub const PUBLIC_ASSETS_SUBDIR: &str = "Resources/public";

/// Publishes bundle and app assets into a destination store
pub struct AssetPublisher<S: Storage> {
    storage: S,
    /// Concurrent syncs of the same manifest key race on the manifest
    /// read-modify-write, so each key gets its own critical section.
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: Storage> AssetPublisher<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Sync a bundle's public assets into the destination tree.
    ///
    /// A bundle without a public asset directory is a no-op: nothing is
    /// written and the manifest is not touched.
    pub fn sync_bundle(&self, bundle: &Bundle) -> Result<SyncReport> {
        let Some(asset_root) = locate_public_assets(&bundle.path) else {
            return Ok(SyncReport::default());
        };

        self.sync_root(&bundle.name, &asset_root)
    }

    /// Sync an app's public assets, keyed by the app name.
    ///
    /// Apps without a public asset directory are skipped without error.
    pub fn sync_app(&self, name: &str, app_root: &Path) -> Result<SyncReport> {
        let Some(asset_root) = locate_public_assets(app_root) else {
            return Ok(SyncReport::default());
        };

        self.sync_root(name, &asset_root)
    }

    /// Delete a bundle's published assets and drop its manifest section.
    ///
    /// Never-synced names are a no-op. Other bundles' manifest sections are
    /// untouched.
    pub fn remove_bundle(&self, name: &str) -> Result<()> {
        let lock = self.lock_for(name);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        self.storage.delete_dir(&target_directory(name))?;

        let mut manifest = Manifest::load(&self.storage)?;
        if manifest.remove_bundle(name) {
            manifest.persist(&self.storage)?;
        }

        Ok(())
    }

    fn sync_root(&self, key: &str, asset_root: &Path) -> Result<SyncReport> {
        let lock = self.lock_for(key);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        sync::sync_asset_root(&self.storage, key, asset_root)
    }

    fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(key.to_string()).or_default().clone()
    }
}

/// Destination subdirectory for a bundle name: lowercased, with a trailing
/// `bundle` suffix stripped (`ExampleBundle` publishes under
/// `bundles/example`)
pub fn destination_subdir(name: &str) -> String {
    let lower = name.to_lowercase();
    lower
        .strip_suffix("bundle")
        .filter(|stripped| !stripped.is_empty())
        .unwrap_or(&lower)
        .to_string()
}

/// Full destination directory for a bundle name, relative to the public root
pub fn target_directory(name: &str) -> String {
    format!("{BUNDLE_PREFIX}/{}", destination_subdir(name))
}

/// Locate a source's public asset directory, if it has one
pub fn locate_public_assets(root: &Path) -> Option<PathBuf> {
    let dir = root.join(PUBLIC_ASSETS_SUBDIR);
    dir.is_dir().then_some(dir)
}
