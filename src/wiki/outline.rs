//! Outline accumulation
//!
//! The [`Outliner`] consumes source lines one by one and accumulates a pending
//! [`Block`] of structured [`OutlineLine`] records. Blocks are only turned into
//! text by a [`Formatter`](crate::wiki::formats::Formatter) once they are
//! flushed, which happens every time a section is closed by a function line.

use crate::wiki::conversion::TextConverter;
use crate::wiki::line_classification::{
    classify_line, header_text, signature_text, split_indentation, strip_comment_markers,
};
use crate::wiki::state::{transition, Action, ParserState};
use serde::Serialize;

/// One structured line of a documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutlineLine {
    /// File title, taken from the first source line.
    Title { text: String },
    /// Section heading, taken from a header comment.
    Heading { text: String },
    /// Where the function signature goes once the section closes.
    CodePlaceholder,
    /// Function signature closing the section.
    Code { text: String },
    /// Body comment, indented by `depth` levels.
    Bullet { depth: usize, text: String },
}

/// An ordered run of outline lines emitted together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub lines: Vec<OutlineLine>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: OutlineLine) {
        self.lines.push(line);
    }

    /// Replace every signature placeholder with `signature`.
    pub fn resolve(&mut self, signature: &str) {
        for line in &mut self.lines {
            if *line == OutlineLine::CodePlaceholder {
                *line = OutlineLine::Code {
                    text: signature.to_string(),
                };
            }
        }
    }

    /// The section heading, if the block has one
    pub fn heading(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            OutlineLine::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Line-by-line outline builder.
///
/// The converter is injected once and reused for every line; the outliner
/// itself owns only the state and the pending block.
pub struct Outliner<'c> {
    converter: &'c dyn TextConverter,
    state: ParserState,
    pending: Block,
}

impl<'c> Outliner<'c> {
    pub fn new(converter: &'c dyn TextConverter) -> Self {
        Self {
            converter,
            state: ParserState::Start,
            pending: Block::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// The block accumulated so far (not yet flushed).
    pub fn pending(&self) -> &Block {
        &self.pending
    }

    /// Feed one raw source line. Returns the block if this line flushed it.
    pub fn feed(&mut self, raw: &str) -> Option<Block> {
        let line = self.converter.convert(raw.trim());
        let line = line.trim();
        let step = transition(self.state, classify_line(line));

        tracing::trace!(from = %self.state, to = %step.next, action = ?step.action, "line");

        match step.action {
            Action::OpenBlock => {
                self.pending.push(OutlineLine::Title {
                    text: strip_comment_markers(line).trim().to_string(),
                });
            }
            Action::OpenSection | Action::OpenAndFlush => self.open_section(line),
            Action::AppendBullet => {
                let stripped = strip_comment_markers(line);
                let (depth, text) = split_indentation(&stripped);
                self.pending.push(OutlineLine::Bullet {
                    depth,
                    text: text.to_string(),
                });
            }
            Action::Flush | Action::Ignore => {}
        }

        self.state = step.next;

        if step.action.flushes() {
            let mut block = std::mem::take(&mut self.pending);
            block.resolve(signature_text(line));
            tracing::debug!(heading = block.heading().unwrap_or_default(), "flush");
            return Some(block);
        }

        None
    }

    /// Run the outliner over a whole sequence of lines.
    ///
    /// Anything still pending after the last line is discarded: a section
    /// without a closing function line is never emitted.
    pub fn outline<'a, I>(mut self, lines: I) -> Vec<Block>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let blocks: Vec<Block> = lines.into_iter().filter_map(|l| self.feed(l)).collect();
        if !self.pending.is_empty() {
            tracing::debug!(state = %self.state, "discarding unterminated block");
        }
        blocks
    }

    fn open_section(&mut self, line: &str) {
        let text = header_text(line).unwrap_or_default();
        self.pending.push(OutlineLine::Heading {
            text: text.to_string(),
        });
        self.pending.push(OutlineLine::CodePlaceholder);
    }
}
