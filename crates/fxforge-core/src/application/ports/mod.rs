//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fxforge-adapters` crate provides implementations.

use std::path::Path;

use crate::error::FxforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `fxforge_adapters::filesystem::LocalFilesystem` (production)
/// - `fxforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FxforgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> FxforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the interactive text channel.
///
/// Implemented by:
/// - `fxforge_adapters::console::StdioConsole` (production)
/// - `fxforge_adapters::console::ScriptedConsole` (testing)
///
/// ## Design Notes
///
/// - `ask` prints the prompt without a trailing newline and blocks until one
///   line of input is available; end-of-input yields the empty string.
/// - Answers are returned raw (minus the line terminator); trimming is the
///   caller's concern.
pub trait Console: Send + Sync {
    /// Print a prompt and read one line of input.
    fn ask(&self, prompt: &str) -> FxforgeResult<String>;

    /// Write one line to the output channel.
    fn say(&self, line: &str) -> FxforgeResult<()>;
}
