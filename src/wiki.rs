//! Main module for nyawiki library functionality
//!
//! Pipeline: source lines → [`conversion`] → [`line_classification`] →
//! [`state`] → [`outline`] blocks → [`formats`] → stdout.

pub mod config;
pub mod conversion;
pub mod formats;
pub mod generator;
pub mod line_classification;
pub mod loader;
pub mod logging;
pub mod outline;
pub mod state;
