// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may hold on to them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("script name is required")]
    ScriptNameRequired,

    // ========================================================================
    // Plan Integrity Errors
    // ========================================================================
    #[error("duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("scaffold plan is empty")]
    EmptyPlan,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ScriptNameRequired => vec![
                "Enter a non-empty name at the 'Script name' prompt".into(),
                "Re-run fxforge to start a new interview".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("The scaffold plan lists '{}' twice", path),
                "This is a bug in the plan builder, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ScriptNameRequired => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                ErrorCategory::Internal
            }
        }
    }
}
