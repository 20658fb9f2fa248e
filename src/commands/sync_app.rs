//! Sync-app command implementation

use std::path::PathBuf;

use crate::cli::SyncAppArgs;
use crate::error::Result;
use crate::publisher::AssetPublisher;

/// Run sync-app command
pub fn run(public_dir: Option<PathBuf>, verbose: bool, args: SyncAppArgs) -> Result<()> {
    let publisher = AssetPublisher::new(super::public_storage(public_dir));

    let report = publisher.sync_app(&args.name, &args.path)?;

    if report.written.is_empty() && report.deleted.is_empty() && report.unchanged == 0 {
        println!("App '{}' has no public assets; nothing to do.", args.name);
        return Ok(());
    }

    super::print_sync_summary(&args.name, &report, verbose);

    Ok(())
}
