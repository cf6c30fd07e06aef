//! Outliner state machine
//!
//! The outliner walks a file in three states:
//!
//! ```text
//! Start ──(first line)──▶ SeekHeader ──(header line)──▶ Body
//!                             ▲                          │
//!                             └──────(function line)─────┘
//! ```
//!
//! [`transition`] is a pure function: it receives the current state and the
//! line classification and answers with the next state plus the [`Action`]
//! the caller must apply to its pending block.

use crate::wiki::line_classification::LineType;
use std::fmt;

/// Where the outliner is within the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// Nothing read yet. The first line becomes the title.
    #[default]
    Start,
    /// Waiting for a header line.
    SeekHeader,
    /// Collecting body bullets until a function line.
    Body,
}

impl ParserState {
    /// Numeric code used in diagnostics (-1, 0, 2).
    pub fn code(self) -> i8 {
        match self {
            ParserState::Start => -1,
            ParserState::SeekHeader => 0,
            ParserState::Body => 2,
        }
    }
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Start => "start",
            ParserState::SeekHeader => "seek-header",
            ParserState::Body => "body",
        };
        write!(f, "{}({})", name, self.code())
    }
}

/// What to do with the pending block for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the block with the line as bold title.
    OpenBlock,
    /// Append the heading and the signature placeholder.
    OpenSection,
    /// Open the section and flush it at once, the header line doubling as
    /// signature.
    OpenAndFlush,
    /// Append the line as an indented bullet.
    AppendBullet,
    /// Resolve the placeholder with the line and emit the block.
    Flush,
    /// Leave the block untouched.
    Ignore,
}

impl Action {
    /// Whether the pending block is emitted after this action.
    pub fn flushes(self) -> bool {
        matches!(self, Action::Flush | Action::OpenAndFlush)
    }
}

/// Result of feeding one line to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ParserState,
    pub action: Action,
}

impl Transition {
    fn new(next: ParserState, action: Action) -> Self {
        Self { next, action }
    }
}

/// Compute the next state and action for a line.
pub fn transition(state: ParserState, line_type: LineType) -> Transition {
    use ParserState::*;

    match (state, line_type) {
        (Start, _) => Transition::new(SeekHeader, Action::OpenBlock),
        (SeekHeader, LineType::Header { function: false }) => {
            Transition::new(Body, Action::OpenSection)
        }
        (SeekHeader, LineType::Header { function: true }) => {
            Transition::new(SeekHeader, Action::OpenAndFlush)
        }
        // A function without a preceding header has no section to close.
        (SeekHeader, _) => Transition::new(SeekHeader, Action::Ignore),
        (Body, LineType::Function) | (Body, LineType::Header { function: true }) => {
            Transition::new(SeekHeader, Action::Flush)
        }
        (Body, _) => Transition::new(Body, Action::AppendBullet),
    }
}
