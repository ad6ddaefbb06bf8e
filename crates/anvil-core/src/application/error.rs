//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! generation rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A directory or file could not be created.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The target root already exists and overwriting was not requested.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The metadata service could not be reached or returned garbage.
    ///
    /// Never fatal: the version resolver turns it into a fallback.
    #[error("Version metadata unavailable: {reason}")]
    MetadataFetch { reason: String },

    /// A blueprint could not be turned into text.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// A write failed and removing the partial tree failed too.
    #[error("{cause}; rollback of {path} also failed: {reason}")]
    RollbackFailed {
        path: PathBuf,
        cause: String,
        reason: String,
    },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Shared adapter state is unusable after a panic.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file occupies the target path".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite generated files in place".into(),
                "Choose a different project name or --output directory".into(),
            ],
            Self::MetadataFetch { .. } => vec![
                "Check your network connection".into(),
                "Use --offline to skip the lookup and use built-in versions".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![format!(
                "Remove the partially generated directory manually: {}",
                path.display()
            )],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::MetadataFetch { .. } => ErrorCategory::NotFound,
            Self::ValidationFailed(_) | Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_exists_is_a_user_error_with_force_hint() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("clinic-api"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn filesystem_error_names_path() {
        let err = ApplicationError::FilesystemError {
            path: PathBuf::from("clinic-api/api/build.gradle"),
            reason: "Failed to write file: permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("clinic-api/api/build.gradle"));
        assert!(msg.contains("write file"));
    }
}
