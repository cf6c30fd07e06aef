//! # nyawiki
//!
//! Generates a Markdown documentation outline from the comment blocks of a Go
//! source file, converting Chinese script variants along the way.
//!
//! A documented function looks like this:
//!
//! ```text
//! //Elapsed: 經過時間
//! //	`startTime` time.Time 起始時間
//! //	return      string    經過時間
//! func Elapsed(startTime time.Time) string {
//! ```
//!
//! and becomes a `## 经过时间` section with the signature and one bullet per
//! body line. See [`wiki::generator::WikiGenerator`] for the entry point.

pub mod wiki;
