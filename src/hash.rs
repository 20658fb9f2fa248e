//! BLAKE3 content hashing for asset files

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use blake3::Hasher;

use crate::error::{AssetSyncError, Result};

/// Calculate the BLAKE3 hash of a file, returned as lowercase hex
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| AssetSyncError::source_read(path, e))?;

    let mut reader = BufReader::new(file);
    let mut hasher = Hasher::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| AssetSyncError::source_read(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

/// Calculate the BLAKE3 hash of a byte slice, returned as lowercase hex
pub fn hash_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hash_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.txt");
        std::fs::write(&file_path, "test content").unwrap();

        let hash = hash_file(&file_path).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_file_not_found() {
        let result = hash_file(Path::new("/nonexistent/file.txt"));
        assert!(matches!(
            result.unwrap_err(),
            AssetSyncError::SourceRead { .. }
        ));
    }

    #[test]
    fn test_hash_file_matches_hash_bytes() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("test.txt");
        std::fs::write(&file_path, "same content").unwrap();

        assert_eq!(
            hash_file(&file_path).unwrap(),
            hash_bytes(b"same content")
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("a.txt");
        std::fs::write(&file_path, "aaa").unwrap();

        let hash1 = hash_file(&file_path).unwrap();
        let hash2 = hash_file(&file_path).unwrap();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_changes_with_content() {
        assert_ne!(hash_bytes(b"one"), hash_bytes(b"two"));
    }
}
