//! Manifest test utilities

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` as package.json into a fresh temporary directory
pub fn write_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
