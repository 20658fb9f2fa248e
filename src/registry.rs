//! Bundle registry (assetsync.yaml)
//!
//! Standalone replacement for the host framework's plugin loader: a YAML
//! document declaring each bundle's name, filesystem root and active flag.
//!
//! ```yaml
//! bundles:
//!   - name: StorefrontBundle
//!     path: ./plugins/storefront
//!     active: true
//! ```
//!
//! Relative paths are resolved against the registry file's directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AssetSyncError, Result};

/// Default registry filename
pub const DEFAULT_CONFIG_FILE: &str = "assetsync.yaml";

/// A registered asset source
#[derive(Debug, Clone)]
pub struct Bundle {
    /// Bundle name, used as manifest and destination key
    pub name: String,
    /// Bundle root directory
    pub path: PathBuf,
    /// Whether the bundle participates in sync-everything runs
    pub active: bool,
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    bundles: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    name: String,
    path: PathBuf,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

/// All bundles known to this workspace
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    bundles: Vec<Bundle>,
}

impl BundleRegistry {
    /// Load the registry from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|_| AssetSyncError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        let file: RegistryFile =
            serde_yaml::from_str(&raw).map_err(|e| AssetSyncError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        let bundles = file
            .bundles
            .into_iter()
            .map(|entry| {
                let root = if entry.path.is_absolute() {
                    entry.path
                } else {
                    base.join(entry.path)
                };
                Bundle {
                    name: entry.name,
                    // Canonicalize when the root exists so later scans see a
                    // clean path; a missing root stays as-is and the sync
                    // pass treats it as having no assets.
                    path: dunce::canonicalize(&root).unwrap_or(root),
                    active: entry.active,
                }
            })
            .collect();

        Ok(Self { bundles })
    }

    /// Resolve a bundle by name
    pub fn resolve(&self, name: &str) -> Result<&Bundle> {
        self.bundles
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| AssetSyncError::BundleNotFound {
                name: name.to_string(),
            })
    }

    /// Bundles with the active flag set
    pub fn active_bundles(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.iter().filter(|b| b.active)
    }
}
