use std::fmt;
use std::path::{Path, PathBuf};

/// A path inside the generated project, relative to its root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// # Panics
    /// If `path` is absolute. Blueprint paths are assembled from validated
    /// names and constants, so this only fires on a planning bug.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        assert!(!path.is_absolute(), "blueprint path must be relative: {path:?}");
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path rendered with `/` separators regardless of platform.
    pub fn to_slash_string(&self) -> String {
        self.0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Containing directory; `None` for entries at the project root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}
