//! Sync-app command CLI arguments

use clap::Args;
use std::path::PathBuf;

/// Arguments for the sync-app command
#[derive(Args, Debug)]
pub struct SyncAppArgs {
    /// App name, used as the manifest and destination key
    pub name: String,

    /// App root directory
    pub path: PathBuf,
}
