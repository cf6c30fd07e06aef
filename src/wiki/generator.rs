//! Outline generation pipeline
//!
//! Ties the pieces together: one injected [`TextConverter`], one selected
//! [`Formatter`], and a writer. The file heading is written first, then each
//! block is written as soon as the outliner flushes it, in source order.

use crate::wiki::conversion::TextConverter;
use crate::wiki::formats::{FormatError, Formatter};
use crate::wiki::loader::{LoaderError, SourceLoader};
use crate::wiki::outline::Outliner;
use std::fmt;
use std::io::Write;

/// Errors during outline generation
#[derive(Debug)]
pub enum GenerateError {
    Loader(LoaderError),
    Format(FormatError),
    Write(std::io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Loader(err) => write!(f, "{}", err),
            GenerateError::Format(err) => write!(f, "{}", err),
            GenerateError::Write(err) => write!(f, "Write failed: {}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Loader(err) => Some(err),
            GenerateError::Format(err) => Some(err),
            GenerateError::Write(err) => Some(err),
        }
    }
}

impl From<LoaderError> for GenerateError {
    fn from(err: LoaderError) -> Self {
        GenerateError::Loader(err)
    }
}

impl From<FormatError> for GenerateError {
    fn from(err: FormatError) -> Self {
        GenerateError::Format(err)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::Write(err)
    }
}

/// Summary of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerateReport {
    pub lines: usize,
    pub blocks: usize,
}

/// Generates a documentation outline for one source file
pub struct WikiGenerator<'a> {
    converter: &'a dyn TextConverter,
    formatter: &'a dyn Formatter,
}

impl<'a> WikiGenerator<'a> {
    pub fn new(converter: &'a dyn TextConverter, formatter: &'a dyn Formatter) -> Self {
        Self {
            converter,
            formatter,
        }
    }

    /// Load `path` and write its outline to `out`
    pub fn run_path<W: Write>(
        &self,
        path: &str,
        out: &mut W,
    ) -> Result<GenerateReport, GenerateError> {
        let loader = SourceLoader::from_path(path)?;
        self.run(path, &loader, out)
    }

    /// Write the outline of already-loaded source to `out`.
    ///
    /// `label` is the path shown in the heading line.
    pub fn run<W: Write>(
        &self,
        label: &str,
        loader: &SourceLoader,
        out: &mut W,
    ) -> Result<GenerateReport, GenerateError> {
        out.write_all(self.formatter.render_header(label)?.as_bytes())?;

        let mut outliner = Outliner::new(self.converter);
        let mut report = GenerateReport::default();

        for line in loader.lines() {
            report.lines += 1;
            if let Some(block) = outliner.feed(line) {
                out.write_all(self.formatter.render_block(&block)?.as_bytes())?;
                report.blocks += 1;
            }
        }
        out.flush()?;

        tracing::debug!(
            converter = self.converter.name(),
            format = self.formatter.name(),
            lines = report.lines,
            blocks = report.blocks,
            "outline complete"
        );
        Ok(report)
    }

    /// Convenience wrapper returning the outline as a string
    pub fn render(&self, label: &str, source: &str) -> Result<String, GenerateError> {
        let mut out = Vec::new();
        self.run(label, &SourceLoader::from_string(source), &mut out)?;
        String::from_utf8(out).map_err(|e| {
            GenerateError::Format(FormatError::SerializationError(e.to_string()))
        })
    }
}
