//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;

use fxforge_core::{application::ports::Filesystem, error::FxforgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> FxforgeResult<()> {
        debug!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> FxforgeResult<()> {
        debug!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> fxforge_core::error::FxforgeError {
    use fxforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("main.lua");

        fs.write_file(&path, "-- test\n").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-- test\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("main.lua");

        fs.write_file(&path, "old").unwrap();
        fs.write_file(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn create_dir_all_tolerates_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("client");

        fs.create_dir_all(&path).unwrap();
        fs.create_dir_all(&path).unwrap();
        assert!(fs.exists(&path));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("missing").join("main.lua");

        assert!(fs.write_file(&path, "x").is_err());
    }
}
