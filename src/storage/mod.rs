//! Storage abstraction over the public asset directory
//!
//! The publisher only ever talks to the destination through this trait, so
//! production runs against a directory on disk ([`local::LocalStorage`])
//! while unit tests run against an in-memory store.
//!
//! All paths are relative to the public root and use `/` separators.

use std::io::Read;

use crate::error::Result;

pub mod local;
#[cfg(test)]
pub mod memory;

pub use local::LocalStorage;

/// Capability interface for the destination asset store
pub trait Storage {
    /// Check whether a file exists
    fn exists(&self, path: &str) -> bool;

    /// Read a file's full contents
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Write a file from a byte slice, creating parent directories as needed
    fn write(&self, path: &str, contents: &[u8]) -> Result<()>;

    /// Write a file by draining a reader to EOF, creating parent directories
    /// as needed. The reader is always fully consumed, even by backends that
    /// buffer the content up front.
    fn write_stream(&self, path: &str, reader: &mut dyn Read) -> Result<()>;

    /// Delete a file. Deleting a missing file is not an error.
    fn delete(&self, path: &str) -> Result<()>;

    /// Recursively delete a directory. Missing directories are a no-op.
    fn delete_dir(&self, path: &str) -> Result<()>;

    /// List all files under a directory recursively, as paths relative to
    /// the storage root. A missing directory yields an empty list.
    fn list_files(&self, path: &str) -> Result<Vec<String>>;
}
