//! Remove command implementation
//!
//! Deletes a bundle's published destination directory and drops its manifest
//! section. Unknown or never-synced names are not an error.

use std::path::PathBuf;

use console::Style;

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::publisher::{AssetPublisher, target_directory};
use crate::storage::Storage;

/// Run remove command
pub fn run(public_dir: Option<PathBuf>, verbose: bool, args: RemoveArgs) -> Result<()> {
    let publisher = AssetPublisher::new(super::public_storage(public_dir));

    for name in &args.names {
        if verbose {
            for path in publisher.storage().list_files(&target_directory(name))? {
                println!("  {} {}", Style::new().red().apply_to("-"), path);
            }
        }

        publisher.remove_bundle(name)?;
        println!(
            "{} {}",
            Style::new().red().apply_to("removed"),
            Style::new().bold().yellow().apply_to(name)
        );
    }

    Ok(())
}
