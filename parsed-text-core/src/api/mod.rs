//! Public parsing API

pub mod chunk;
pub mod parser;

pub use chunk::{render, Chunk};
pub use parser::{parse, TextParser, TextParserBuilder};
