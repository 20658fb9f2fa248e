//! List command implementation
//!
//! Lists published bundles from the manifest document with their file
//! counts, and with every path + hash when --detailed is given.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::manifest::Manifest;

/// Run list command
pub fn run(public_dir: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let storage = super::public_storage(public_dir);
    let manifest = Manifest::load(&storage)?;

    if manifest.is_empty() {
        println!("No assets published.");
        return Ok(());
    }

    let count = manifest.iter().count();
    println!("Published bundles ({}):", count);
    println!();

    for (name, files) in manifest.iter() {
        println!(
            "  {} ({} file(s))",
            Style::new().bold().yellow().apply_to(name),
            files.len()
        );

        if args.detailed {
            for (path, hash) in files {
                println!("    {}  {}", path, Style::new().dim().apply_to(hash));
            }
        }
    }

    Ok(())
}
