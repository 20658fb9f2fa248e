//! Error types and handling for assetsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetSyncError {
    // Bundle errors
    #[error("Bundle '{name}' not found")]
    #[diagnostic(
        code(assetsync::bundle::not_found),
        help("Check that the bundle is declared in the registry file")
    )]
    BundleNotFound { name: String },

    // Storage errors
    #[error("Failed to read '{path}' from the public directory")]
    #[diagnostic(code(assetsync::storage::read_failed))]
    StorageRead { path: String, reason: String },

    #[error("Failed to write '{path}' to the public directory")]
    #[diagnostic(
        code(assetsync::storage::write_failed),
        help("Check permissions on the public directory")
    )]
    StorageWrite { path: String, reason: String },

    #[error("Failed to delete '{path}' from the public directory")]
    #[diagnostic(code(assetsync::storage::delete_failed))]
    StorageDelete { path: String, reason: String },

    // Source errors
    #[error("Failed to read source file: {path}")]
    #[diagnostic(code(assetsync::source::read_failed))]
    SourceRead { path: String, reason: String },

    // Registry errors
    #[error("Registry file not found: {path}")]
    #[diagnostic(
        code(assetsync::registry::not_found),
        help("Create an assetsync.yaml listing your bundles, or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse registry file: {path}")]
    #[diagnostic(code(assetsync::registry::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(assetsync::io_error))]
    IoError { message: String },
}

impl AssetSyncError {
    pub fn storage_read(path: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Self::StorageRead {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn storage_write(path: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Self::StorageWrite {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn storage_delete(path: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Self::StorageDelete {
            path: path.into(),
            reason: e.to_string(),
        }
    }

    pub fn source_read(path: &std::path::Path, e: impl std::fmt::Display) -> Self {
        Self::SourceRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for AssetSyncError {
    fn from(err: std::io::Error) -> Self {
        AssetSyncError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AssetSyncError {
    fn from(err: serde_yaml::Error) -> Self {
        AssetSyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetSyncError>;
