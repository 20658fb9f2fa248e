//! assetsync - static asset publisher
//!
//! Publishes the public asset files of plugin bundles and apps into a shared
//! public directory, tracking per-bundle content hashes in a manifest so
//! repeated syncs copy only changed files and prune stale ones.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod hash;
mod manifest;
mod progress;
mod publisher;
mod registry;
mod storage;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sync(args) => commands::sync::run(cli.public_dir, cli.config, cli.verbose, args),
        Commands::SyncApp(args) => commands::sync_app::run(cli.public_dir, cli.verbose, args),
        Commands::Remove(args) => commands::remove::run(cli.public_dir, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.public_dir, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
