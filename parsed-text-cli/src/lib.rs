//! parsed-text CLI library
//!
//! This library provides the command-line interface for splitting text into
//! matched and unmatched chunks with ordered regex patterns.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pattern_source;
pub mod progress;

pub use error::{CliError, CliResult};
