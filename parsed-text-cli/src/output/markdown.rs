//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use parsed_text_core::Chunk;
use std::io::Write;
use std::path::Path;

/// Markdown formatter - outputs matched chunks as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
    match_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
            match_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_input(&mut self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => writeln!(self.writer, "## {}", path.display())?,
            None => writeln!(self.writer, "## <stdin>")?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk, pattern: Option<&str>) -> Result<()> {
        self.chunk_count += 1;
        if !chunk.is_matched() {
            return Ok(());
        }

        self.match_count += 1;
        let name = pattern.unwrap_or("unnamed");
        if chunk.children == chunk.text {
            writeln!(self.writer, "{}. `{}` ({})", self.match_count, chunk.text, name)?;
        } else {
            writeln!(
                self.writer,
                "{}. `{}` → {} ({})",
                self.match_count, chunk.text, chunk.children, name
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chunks: {}, matched: {}*",
            self.chunk_count, self.match_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
