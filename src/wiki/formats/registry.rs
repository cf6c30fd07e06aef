//! Format registry for format discovery and selection
//!
//! Formatters are registered and retrieved by name. The CLI resolves the
//! requested format here before anything is written to stdout.

use crate::wiki::outline::Block;
use std::collections::HashMap;
use std::fmt;

/// Errors raised while selecting a format or rendering a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No formatter registered under this name
    FormatNotFound(String),
    /// The formatter could not render the block
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders flushed blocks to text
pub trait Formatter {
    /// The name of this format (e.g., "markdown", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render the file heading written before any block
    fn render_header(&self, path: &str) -> Result<String, FormatError>;

    /// Render one flushed block, including its trailing separator
    fn render_block(&self, block: &Block) -> Result<String, FormatError>;
}

/// Registry of output formats
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::MarkdownFormatter);
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
