//! Output formatting module

use anyhow::Result;
use parsed_text_core::Chunk;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the chunks of each input; `None` stands for stdin
    fn start_input(&mut self, _path: Option<&Path>) -> Result<()> {
        Ok(())
    }

    /// Format and output a single chunk
    ///
    /// `pattern` is the name of the pattern that matched the chunk, if any.
    fn format_chunk(&mut self, chunk: &Chunk, pattern: Option<&str>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
