//! Common test utilities for assetsync integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file or directory exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Delete a file from the workspace
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }

    /// Write the bundle registry file
    pub fn write_registry(&self, yaml: &str) {
        self.write_file("assetsync.yaml", yaml);
    }

    /// Write a public asset file for a bundle rooted at `plugins/<dir>`
    pub fn write_bundle_asset(&self, dir: &str, relative: &str, content: &str) {
        self.write_file(
            &format!("plugins/{}/Resources/public/{}", dir, relative),
            content,
        );
    }

    /// Parse the published manifest document
    pub fn manifest(&self) -> serde_json::Value {
        let raw = self.read_file("public/asset-manifest.json");
        serde_json::from_str(&raw).expect("Failed to parse manifest")
    }

    /// Whether the manifest document exists at all
    pub fn has_manifest(&self) -> bool {
        self.file_exists("public/asset-manifest.json")
    }
}

/// Build an assetsync command running inside the given workspace
pub fn assetsync_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("assetsync").expect("Failed to find assetsync binary");
    cmd.current_dir(&workspace.path)
        .env_remove("ASSETSYNC_PUBLIC_DIR")
        .env_remove("ASSETSYNC_CONFIG");
    cmd
}
