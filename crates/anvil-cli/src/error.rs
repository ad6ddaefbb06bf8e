//! CLI errors, their suggestions and exit codes.

use std::error::Error as _;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use anvil_core::application::ApplicationError;
use anvil_core::error::{AnvilError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A flag or answer the domain rejected.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `anvil-core` or an adapter.
    #[error("Generation failed: {0}")]
    Core(#[from] AnvilError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Operation cancelled")]
    Cancelled,

    /// A question needs a terminal but none is attached.
    #[error("Cannot ask '{question}' without an interactive terminal")]
    NotInteractive { question: String },

    #[error("Unknown config key: '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// Interactive prompts need the `interactive` feature.
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
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
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Project names start with a letter and use only letters, digits, '-' and '_'".into(),
                "Group ids are dot-separated Java identifiers, e.g. com.example".into(),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the TOML syntax of your config file".into(),
                "Run 'anvil config path' to see which files are read".into(),
                "Run 'anvil init --force' to write a fresh default file".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Cancelled => vec!["No files were written".into()],
            Self::NotInteractive { .. } => vec![
                "Pass --yes to use flags and configured defaults".into(),
            ],
            Self::UnknownConfigKey { .. } => vec![
                "Run 'anvil config list' to see every key".into(),
            ],
            Self::ConfigExists { .. } => vec!["Use --force to overwrite it".into()],
            Self::FeatureNotAvailable { feature } => vec![
                format!("This build was compiled without the '{feature}' feature"),
                "Pass --yes to run without prompts".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::Cancelled
            | Self::NotInteractive { .. }
            | Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } | Self::FeatureNotAvailable { .. } => {
                ErrorCategory::Configuration
            }
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// `true` when the failure left a partially generated tree on disk.
    pub fn left_partial_output(&self) -> bool {
        matches!(
            self,
            Self::Core(AnvilError::Application(ApplicationError::RollbackFailed { .. }))
        )
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{} {}\n", "\u{2717}".red().bold(), "Error:".red().bold());
        let _ = writeln!(out, "  {}", self.to_string().red());

        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "\n  {} {}", "\u{2192}".dimmed(), cause.dimmed());
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "\n{}", "Suggestions:".yellow().bold());
            for s in suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{} {}",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed()
            );
        }
        out
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\nError: {self}");

        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "  Caused by: {cause}");
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(error = %self, "User error"),
            ErrorCategory::NotFound => tracing::warn!(error = %self, "Not found"),
            ErrorCategory::Configuration => tracing::error!(error = %self, "Configuration error"),
            ErrorCategory::Internal => tracing::error!(error = %self, "Internal error"),
        }
        for cause in self.causes() {
            tracing::debug!("Caused by: {cause}");
        }
    }

    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            causes.push(err.to_string());
            source = err.source();
        }
        causes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anvil_core::domain::DomainError;
    use std::io;

    fn exists() -> CliError {
        CliError::Core(
            ApplicationError::ProjectExists {
                path: PathBuf::from("/tmp/clinic-api"),
            }
            .into(),
        )
    }

    #[test]
    fn project_exists_is_a_user_error_suggesting_force() {
        let err = exists();
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn invalid_project_name_is_a_user_error() {
        let err = CliError::Core(
            DomainError::InvalidProjectName {
                name: ".x".into(),
                reason: "must start with a letter".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn filesystem_failure_is_internal() {
        let err = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("/ro/clinic-api"),
                reason: "Failed to create directory: permission denied".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/ro/clinic-api"));
    }

    #[test]
    fn exit_codes_by_category() {
        assert_eq!(CliError::UnknownConfigKey { key: "x".into() }.exit_code(), 3);
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::from(io::Error::other("e")).exit_code(),
            1
        );
        assert_eq!(CliError::Cancelled.exit_code(), 2);
    }

    #[test]
    fn rollback_failure_is_flagged() {
        let err = CliError::Core(
            ApplicationError::RollbackFailed {
                path: PathBuf::from("/out/clinic-api"),
                cause: "disk full".into(),
                reason: "busy".into(),
            }
            .into(),
        );
        assert!(err.left_partial_output());
        assert!(!exists().left_partial_output());
    }

    #[test]
    fn plain_format_has_header_and_suggestions() {
        let text = exists().format_plain(false);
        assert!(text.contains("Error: Generation failed"));
        assert!(text.contains("Suggestions:"));
        assert!(text.contains("--verbose"));
    }

    #[test]
    fn verbose_plain_format_lists_causes() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("line 3"))),
        };
        let text = err.format_plain(true);
        assert!(text.contains("Caused by: line 3"));
        assert!(!text.contains("--verbose"));
    }
}
