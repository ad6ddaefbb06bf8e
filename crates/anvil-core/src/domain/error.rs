// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for reporting after the fact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors (rejected before generation starts)
    // ========================================================================
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid group id '{group_id}': {reason}")]
    InvalidGroupId { group_id: String, reason: String },

    #[error("invalid {kind} version '{version}': {reason}")]
    InvalidVersion {
        kind: &'static str,
        version: String,
        reason: String,
    },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid version metadata: {0}")]
    InvalidMetadata(String),

    // ========================================================================
    // Blueprint Invariant Violations
    // ========================================================================
    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("package '{package}' does not match location '{path}'")]
    PackageMismatch { package: String, path: String },

    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Start with a letter; use letters, digits, '-' and '_' only".into(),
                "Examples: clinic, order-service, billing_api".into(),
            ],
            Self::InvalidGroupId { group_id, .. } => vec![
                format!("Group id '{}' is not a valid Java package", group_id),
                "Use dot-separated identifiers, e.g. com.example".into(),
            ],
            Self::InvalidVersion { kind, .. } => vec![
                format!("Pick one of the {} versions offered by `anvil versions`", kind),
            ],
            Self::UnknownVariant { kind, value } => vec![format!(
                "'{}' is not a known {}; see `anvil new --help`",
                value, kind
            )],
            Self::InvalidMetadata(_) => vec![
                "The metadata service returned an unexpected document".into(),
                "Built-in version defaults will be used instead".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::InvalidGroupId { .. }
            | Self::InvalidVersion { .. }
            | Self::MissingRequiredField { .. }
            | Self::UnknownVariant { .. }
            | Self::InvalidMetadata(_) => ErrorCategory::Validation,
            Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PackageMismatch { .. }
            | Self::InvalidBlueprint(_) => ErrorCategory::Invariant,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Invariant,
}
