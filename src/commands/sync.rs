//! Sync command implementation
//!
//! Syncs the named bundles, or every active bundle in the registry when no
//! names are given.

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::publisher::AssetPublisher;
use crate::registry::Bundle;

/// Run sync command
pub fn run(
    public_dir: Option<PathBuf>,
    config: Option<PathBuf>,
    verbose: bool,
    args: SyncArgs,
) -> Result<()> {
    let registry = super::load_registry(config)?;

    let bundles: Vec<Bundle> = if args.names.is_empty() {
        registry.active_bundles().cloned().collect()
    } else {
        // Explicitly named bundles sync even when inactive
        args.names
            .iter()
            .map(|name| registry.resolve(name).cloned())
            .collect::<Result<_>>()?
    };

    if bundles.is_empty() {
        println!("No active bundles to sync.");
        return Ok(());
    }

    let storage = super::public_storage(public_dir);
    if verbose {
        println!("Publishing into {}", storage.root().display());
    }

    let publisher = AssetPublisher::new(storage);
    let total = bundles.len();
    let progress = ProgressDisplay::new(total as u64);

    let mut reports = Vec::with_capacity(total);
    for (i, bundle) in bundles.iter().enumerate() {
        progress.update_bundle(&bundle.name, i + 1, total);

        match publisher.sync_bundle(bundle) {
            Ok(report) => {
                reports.push((bundle.name.clone(), report));
                progress.inc_bundle();
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
    }
    progress.finish();

    let mut written = 0;
    let mut deleted = 0;
    for (name, report) in &reports {
        super::print_sync_summary(name, report, verbose);
        written += report.written.len();
        deleted += report.deleted.len();
    }

    println!();
    println!(
        "{} {} bundle(s): {} file(s) written, {} deleted",
        Style::new().green().bold().apply_to("Synced"),
        reports.len(),
        written,
        deleted
    );

    Ok(())
}
