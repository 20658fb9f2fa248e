//! Sync command CLI arguments

use clap::Args;

/// Arguments for the sync command
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Bundle names to sync (all active bundles when omitted)
    pub names: Vec<String>,
}
