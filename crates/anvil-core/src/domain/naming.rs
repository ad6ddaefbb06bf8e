//! Naming rules shared by every generated artifact.
//!
//! Package names, directory names and the application class name are all
//! derived from the two user-supplied strings (`projectName`, `groupId`).
//! Keeping the derivations here means a package declaration and the directory
//! holding it can never disagree.

use std::fmt;

use crate::domain::error::DomainError;

/// Suffix appended to the project name for the root directory.
pub const ROOT_DIR_SUFFIX: &str = "-api";

/// Suffix appended to the PascalCase project name for the entrypoint class.
pub const ENTRYPOINT_SUFFIX: &str = "ApiApplication";

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

// ── JavaPackage ───────────────────────────────────────────────────────────────

/// A dot-separated Java package name, e.g. `com.example.domain.patient`.
///
/// Invariant: at least one segment, every segment a Java identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaPackage {
    segments: Vec<String>,
}

impl JavaPackage {
    /// Parse a user-supplied group id.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidGroupId {
            group_id: value.to_string(),
            reason: reason.to_string(),
        };

        if value.is_empty() {
            return Err(invalid("group id cannot be empty"));
        }

        let mut segments = Vec::new();
        for segment in value.split('.') {
            if segment.is_empty() {
                return Err(invalid("group id cannot contain empty segments"));
            }
            if !is_java_identifier(segment) {
                return Err(invalid(&format!(
                    "'{segment}' is not a valid Java identifier"
                )));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Append `/`- or `.`-separated sub-package segments.
    ///
    /// Segments come from the static stub catalog, so they are trusted.
    pub fn join(&self, sub_package: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            sub_package
                .split(['/', '.'])
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        Self { segments }
    }

    /// Directory form: segments joined with `/`.
    pub fn as_path(&self) -> String {
        self.segments.join("/")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for JavaPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Whether `s` may be used as a Java identifier (package segment or type name).
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !JAVA_KEYWORDS.contains(&s)
}

// ── Project name ──────────────────────────────────────────────────────────────

/// Check a project name before it becomes a directory and a class name.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("name must start with a letter"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(invalid(&format!("character '{c}' is not allowed")));
    }
    Ok(())
}

/// `clinic` → `clinic-api`.
pub fn root_dir_name(project_name: &str) -> String {
    format!("{project_name}{ROOT_DIR_SUFFIX}")
}

/// `my-clinic` → `MyClinicApiApplication`.
///
/// Each hyphen-separated segment gets its first character upper-cased; the
/// rest of the segment is kept as typed.
pub fn entrypoint_class_name(project_name: &str) -> String {
    let mut name: String = project_name
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();
    name.push_str(ENTRYPOINT_SUFFIX);
    name
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
