//! Output format implementations for flushed outline blocks
//!
//! This module contains the renderers that turn a [`Block`](crate::wiki::outline::Block)
//! into text:
//! - `markdown`: the documentation outline itself
//! - `json`: one JSON object per block, for inspecting the structured records

pub mod json;
pub mod markdown;
pub mod registry;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
