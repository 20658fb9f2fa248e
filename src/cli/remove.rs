//! Remove command CLI arguments

use clap::Args;

/// Arguments for the remove command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Bundle names whose published assets should be removed
    #[arg(required = true)]
    pub names: Vec<String>,
}
