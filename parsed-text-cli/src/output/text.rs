//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use parsed_text_core::Chunk;
use std::io::Write;
use std::path::Path;

/// Plain text formatter - outputs the rendered text
///
/// Consecutive inputs are separated by a blank line; an input that does not
/// end with a newline gets one first.
pub struct TextFormatter<W: Write> {
    writer: W,
    inputs: usize,
    ends_with_newline: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inputs: 0,
            ends_with_newline: true,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn start_input(&mut self, _path: Option<&Path>) -> Result<()> {
        if self.inputs > 0 {
            if !self.ends_with_newline {
                writeln!(self.writer)?;
            }
            writeln!(self.writer)?;
            self.ends_with_newline = true;
        }
        self.inputs += 1;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk, _pattern: Option<&str>) -> Result<()> {
        if chunk.children.is_empty() {
            return Ok(());
        }
        self.writer.write_all(chunk.children.as_bytes())?;
        self.ends_with_newline = chunk.children.ends_with('\n');
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
