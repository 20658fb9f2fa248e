//! List command CLI arguments

use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show every published file with its content hash
    #[arg(long, short = 'd')]
    pub detailed: bool,
}
