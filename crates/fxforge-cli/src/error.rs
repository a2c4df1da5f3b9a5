//! Comprehensive error handling for the FXForge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use fxforge_core::error::{ErrorCategory as CoreCategory, FxforgeError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `fxforge-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] FxforgeError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed outside the core ports.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// FXForge is single-shot: success exits 0 and every caught error —
    /// validation or filesystem alike — exits 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        // Main error message
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\n\u{2717} Error: {}\n", self));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation).
    UserError,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxforge_core::{application::ApplicationError, domain::DomainError};
    use std::io;
    use std::path::PathBuf;

    // ── categories ────────────────────────────────────────────────────────

    #[test]
    fn missing_name_is_a_user_error() {
        let err = CliError::Core(DomainError::ScriptNameRequired.into());
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn filesystem_failure_is_internal() {
        let err = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("/tmp/x"),
                reason: "disk full".into(),
            }
            .into(),
        );
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_error_exits_one() {
        let validation = CliError::Core(DomainError::ScriptNameRequired.into());
        let io_err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(validation.exit_code(), 1);
        assert_eq!(io_err.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_name_suggestions_mention_prompt() {
        let err = CliError::Core(DomainError::ScriptNameRequired.into());
        assert!(err.suggestions().iter().any(|s| s.contains("Script name")));
    }

    #[test]
    fn filesystem_suggestions_mention_permissions() {
        let err = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("/tmp/x"),
                reason: "denied".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_failure_marker() {
        let err = CliError::Core(DomainError::ScriptNameRequired.into());
        let s = err.format_plain(false);
        assert!(s.contains("\u{2717} Error:"));
        assert!(s.contains("script name is required"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Core(DomainError::ScriptNameRequired.into());
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn io_error_converts() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.map_err(CliError::from);
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
