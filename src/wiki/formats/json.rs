//! JSON rendering of outline blocks
//!
//! Emits JSON Lines: a `{"file": ...}` object first, then one object per
//! flushed block holding its tagged line records.

use super::registry::{FormatError, Formatter};
use crate::wiki::outline::Block;
use serde_json::json;

/// Structured block dump
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "One JSON object per block (debugging aid)"
    }

    fn render_header(&self, path: &str) -> Result<String, FormatError> {
        Ok(format!("{}\n", json!({ "file": path.trim() })))
    }

    fn render_block(&self, block: &Block) -> Result<String, FormatError> {
        let mut line = serde_json::to_string(block)
            .map_err(|e| FormatError::SerializationError(format!("JSON: {}", e)))?;
        line.push('\n');
        Ok(line)
    }
}
