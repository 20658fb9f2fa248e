//! Asset manifest (asset-manifest.json) data structures
//!
//! The manifest is one aggregate JSON document in the public directory,
//! mapping bundle name to a sub-mapping of relative asset path to content
//! hash. Sub-mappings are kept in `BTreeMap`s so serialization is
//! deterministic with sorted keys.

use std::collections::BTreeMap;

use console::Style;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::Storage;

/// Manifest document location, relative to the public root
pub const MANIFEST_PATH: &str = "asset-manifest.json";

/// Per-bundle mapping of relative asset path to content hash
pub type BundleManifest = BTreeMap<String, String>;

/// The full manifest document covering all published bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    bundles: BTreeMap<String, BundleManifest>,
}

impl Manifest {
    /// Load the manifest document from storage.
    ///
    /// An absent document is an empty manifest. An unparseable document is
    /// recoverable: it is treated as empty (every current file will be
    /// re-published) after a warning on stderr. Storage read failures are
    /// surfaced.
    pub fn load<S: Storage>(storage: &S) -> Result<Self> {
        if !storage.exists(MANIFEST_PATH) {
            return Ok(Self::default());
        }

        let raw = storage.read(MANIFEST_PATH)?;
        match serde_json::from_slice(&raw) {
            Ok(bundles) => Ok(Self { bundles }),
            Err(e) => {
                eprintln!(
                    "{} {} is not a valid manifest ({}); treating it as empty",
                    Style::new().yellow().bold().apply_to("warning:"),
                    MANIFEST_PATH,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Persist the manifest document as pretty-printed JSON
    pub fn persist<S: Storage>(&self, storage: &S) -> Result<()> {
        storage.write(MANIFEST_PATH, self.to_json()?.as_bytes())
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.bundles).map_err(|e| {
            crate::error::AssetSyncError::StorageWrite {
                path: MANIFEST_PATH.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// The sub-mapping for one bundle, empty if the bundle has no entry
    pub fn bundle(&self, name: &str) -> BundleManifest {
        self.bundles.get(name).cloned().unwrap_or_default()
    }

    /// Replace a bundle's sub-mapping
    pub fn replace_bundle(&mut self, name: &str, files: BundleManifest) {
        self.bundles.insert(name.to_string(), files);
    }

    /// Drop a bundle's sub-mapping. Returns true if an entry was removed.
    pub fn remove_bundle(&mut self, name: &str) -> bool {
        self.bundles.remove(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Iterate bundle names with their sub-mappings, in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BundleManifest)> {
        self.bundles.iter()
    }
}
