//! Source loading utilities
//!
//! [`SourceLoader`] reads a source file once, in full, and hands its lines to
//! the outliner. It is used by the CLI and by tests (via `from_string`).

use std::fmt;
use std::fs;
use std::path::Path;

/// Error that can occur when loading a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// IO error when reading file
    IoError(String),
    /// File content is not valid UTF-8
    Encoding(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::IoError(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

/// Source text read once, in full
#[derive(Debug, Clone)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Read a UTF-8 file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| LoaderError::IoError(format!("{}: {}", path.display(), e)))?;
        let source = String::from_utf8(bytes)
            .map_err(|e| LoaderError::Encoding(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");

        Ok(SourceLoader { source })
    }

    /// Wrap in-memory text
    pub fn from_string(source: impl Into<String>) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Lines in file order, without terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.lines()
    }
}
