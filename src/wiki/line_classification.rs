//! Line Classification
//!
//! Substring cues used to categorize a single source line. Lines reach this
//! module already trimmed and script-converted, so every test here is a plain
//! `contains` / `strip` over text.
//!
//! Only the `//` comment and `func ` declaration conventions are recognized.
//! Sources written with other comment syntaxes classify as [`LineType::Other`]
//! throughout and produce no sections.

/// Marks a comment line.
pub const COMMENT_MARKER: &str = "//";
/// Separates the identifier from the heading text on a header line.
pub const HEADER_DELIMITER: &str = ": ";
/// Marks a function declaration line.
pub const FUNCTION_MARKER: &str = "func ";
/// Stand-in for the function signature until the section is flushed.
pub const CODE_PLACEHOLDER: &str = "<[code]>";
/// Opening brace removed from the end of a captured signature.
pub const SIGNATURE_SUFFIX: &str = " {";

/// The kinds of line the outliner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Comment line carrying a `Name: heading` pair. `function` records
    /// whether the function marker appears on the same line.
    Header { function: bool },
    /// Function declaration, terminates a section.
    Function,
    /// Anything else. Becomes a bullet while a section is open.
    Other,
}

/// Determine the type of a line.
///
/// Classification order:
/// 1. Header lines (comment marker and header delimiter both present)
/// 2. Function lines (function marker present)
/// 3. Everything else
///
/// A header line that also contains the function marker stays a header and
/// carries the marker as a flag.
pub fn classify_line(line: &str) -> LineType {
    if is_header_line(line) {
        return LineType::Header {
            function: is_function_line(line),
        };
    }

    if is_function_line(line) {
        return LineType::Function;
    }

    LineType::Other
}

/// Check if line is a section header: a comment containing `": "`
pub fn is_header_line(line: &str) -> bool {
    line.contains(COMMENT_MARKER) && line.contains(HEADER_DELIMITER)
}

/// Check if line declares a function
pub fn is_function_line(line: &str) -> bool {
    line.contains(FUNCTION_MARKER)
}

/// Remove every comment marker from the line
pub fn strip_comment_markers(line: &str) -> String {
    line.replace(COMMENT_MARKER, "")
}

/// Extract the heading from a header line.
///
/// Returns the text between the first delimiter and the next one (or the end
/// of the line), so `//Name: Heading: extra` yields `Heading`.
pub fn header_text(line: &str) -> Option<&str> {
    line.split(HEADER_DELIMITER).nth(1)
}

/// Split a body line into its indentation depth and content.
///
/// The leading run of ASCII spaces and tabs is dropped; each tab inside it
/// counts as one level. Other whitespace, such as the full-width U+3000 used
/// for alignment in Chinese comments, is content.
pub fn split_indentation(text: &str) -> (usize, &str) {
    let content = text.trim_start_matches(&[' ', '\t'][..]);
    let leading = &text[..text.len() - content.len()];
    let depth = leading.chars().filter(|&c| c == '\t').count();
    (depth, content)
}

/// Function signature with one trailing `" {"` removed
pub fn signature_text(line: &str) -> &str {
    line.strip_suffix(SIGNATURE_SUFFIX).unwrap_or(line)
}
