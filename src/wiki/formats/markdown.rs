//! Markdown rendering of outline blocks
//!
//! ```text
//! # <path>
//! **<title>**
//!
//! ## <heading>
//! - `<signature>`
//!  - <body line, one leading space per tab>
//! ```
//!
//! Every block is followed by one blank line.

use super::registry::{FormatError, Formatter};
use crate::wiki::line_classification::CODE_PLACEHOLDER;
use crate::wiki::outline::{Block, OutlineLine};

/// Markdown outline renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown documentation outline"
    }

    fn render_header(&self, path: &str) -> Result<String, FormatError> {
        Ok(format!("# {}\n", path.trim()))
    }

    fn render_block(&self, block: &Block) -> Result<String, FormatError> {
        let mut out = String::new();
        for line in &block.lines {
            render_line(line, &mut out);
        }
        out.push('\n');
        Ok(out)
    }
}

fn render_line(line: &OutlineLine, out: &mut String) {
    match line {
        OutlineLine::Title { text } => {
            out.push_str("**");
            out.push_str(text);
            out.push_str("**\n\n");
        }
        OutlineLine::Heading { text } => {
            out.push_str("## ");
            out.push_str(text);
            out.push('\n');
        }
        OutlineLine::CodePlaceholder => code_bullet(CODE_PLACEHOLDER, out),
        OutlineLine::Code { text } => code_bullet(text, out),
        OutlineLine::Bullet { depth, text } => {
            out.push_str(&" ".repeat(*depth));
            out.push_str("- ");
            out.push_str(text);
            out.push('\n');
        }
    }
}

fn code_bullet(code: &str, out: &mut String) {
    out.push_str("- `");
    out.push_str(code);
    out.push_str("`\n");
}
