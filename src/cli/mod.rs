//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sync: Sync command arguments
//! - sync_app: Sync-app command arguments
//! - remove: Remove command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod remove;
pub mod sync;
pub mod sync_app;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use remove::RemoveArgs;
pub use sync::SyncArgs;
pub use sync_app::SyncAppArgs;

/// assetsync - static asset publisher
///
/// Publish the public assets of plugin bundles and apps into a shared public
/// directory, copying only what changed since the last sync.
#[derive(Parser, Debug)]
#[command(
    name = "assetsync",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manifest-driven static asset publisher for plugin bundles and apps",
    long_about = "assetsync copies the public asset files of registered bundles into a shared \
                  public directory, tracking per-bundle content hashes in a manifest so repeated \
                  syncs write only changed files and prune files a bundle no longer ships.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  assetsync sync                         \x1b[90m# Sync all active bundles\x1b[0m\n   \
                  assetsync sync StorefrontBundle        \x1b[90m# Sync one bundle by name\x1b[0m\n   \
                  assetsync sync-app MyApp ./apps/my-app \x1b[90m# Sync an app's assets\x1b[0m\n   \
                  assetsync remove StorefrontBundle      \x1b[90m# Remove published assets\x1b[0m\n   \
                  assetsync list --detailed              \x1b[90m# Show the published manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Public directory to publish into (defaults to ./public)
    #[arg(long, short = 'p', global = true, env = "ASSETSYNC_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// Bundle registry file (defaults to ./assetsync.yaml)
    #[arg(long, short = 'c', global = true, env = "ASSETSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync bundle assets into the public directory
    Sync(SyncArgs),

    /// Sync an app's assets into the public directory
    #[command(name = "sync-app")]
    SyncApp(SyncAppArgs),

    /// Remove published bundle assets
    Remove(RemoveArgs),

    /// List published bundles from the manifest
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
