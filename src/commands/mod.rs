//! Command implementations
//!
//! Each submodule is a thin wrapper that resolves the global CLI options,
//! builds the publisher, and delegates to it.

use std::path::PathBuf;

use console::Style;

use crate::error::Result;
use crate::publisher::SyncReport;
use crate::registry::{BundleRegistry, DEFAULT_CONFIG_FILE};
use crate::storage::LocalStorage;

pub mod completions;
pub mod list;
pub mod remove;
pub mod sync;
pub mod sync_app;
pub mod version;

/// Default public directory when none is configured
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Build the destination storage from the global --public-dir option
pub(crate) fn public_storage(public_dir: Option<PathBuf>) -> LocalStorage {
    LocalStorage::new(public_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)))
}

/// Load the bundle registry from the global --config option
pub(crate) fn load_registry(config: Option<PathBuf>) -> Result<BundleRegistry> {
    let path = config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    BundleRegistry::load(&path)
}

/// Print the per-source summary line after a sync pass
pub(crate) fn print_sync_summary(key: &str, report: &SyncReport, verbose: bool) {
    println!(
        "{} {} ({} written, {} deleted, {} unchanged)",
        Style::new().green().apply_to("synced"),
        Style::new().bold().yellow().apply_to(key),
        report.written.len(),
        report.deleted.len(),
        report.unchanged
    );

    if verbose {
        for path in &report.written {
            println!("  {} {}", Style::new().green().apply_to("+"), path);
        }
        for path in &report.deleted {
            println!("  {} {}", Style::new().red().apply_to("-"), path);
        }
        if report.manifest_updated {
            println!(
                "  {} {}",
                Style::new().cyan().apply_to("~"),
                crate::manifest::MANIFEST_PATH
            );
        }
    }
}
