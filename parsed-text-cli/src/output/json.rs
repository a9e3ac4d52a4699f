//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use parsed_text_core::Chunk;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// JSON formatter - outputs chunks as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    current_file: Option<String>,
    chunks: Vec<ChunkData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkData {
    /// Source file, if the input came from one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Original text of the chunk
    pub text: String,
    /// Rendered text of the chunk
    pub children: String,
    /// Byte offset in the original text
    pub offset: usize,
    /// Byte length of the original text
    pub length: usize,
    /// Name of the matching pattern
    pub pattern: Option<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            current_file: None,
            chunks: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_input(&mut self, path: Option<&Path>) -> Result<()> {
        self.current_file = path.map(|p| p.display().to_string());
        Ok(())
    }

    fn format_chunk(&mut self, chunk: &Chunk, pattern: Option<&str>) -> Result<()> {
        self.chunks.push(ChunkData {
            file: self.current_file.clone(),
            text: chunk.text.clone(),
            children: chunk.children.clone(),
            offset: chunk.offset,
            length: chunk.len(),
            pattern: pattern.map(str::to_string),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.chunks)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.chunks)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
