//! Parser front end

use super::chunk::Chunk;
use crate::config::{self, PatternSetConfig};
use crate::domain::{segment, PatternSpec};
use crate::error::Result;
use std::path::Path;

/// Parse `text` with `specs`, earlier specs taking priority
pub fn parse(text: &str, specs: &[PatternSpec]) -> Vec<Chunk> {
    segment(text, specs)
        .into_iter()
        .map(|span| Chunk::from_span(span, text))
        .collect()
}

/// Reusable set of ordered patterns
///
/// Parsing never mutates the parser, so one instance can serve many inputs
/// (and threads) with identical results.
#[derive(Debug, Clone, Default)]
pub struct TextParser {
    specs: Vec<PatternSpec>,
}

impl TextParser {
    /// Create a parser from ordered specs
    pub fn new(specs: Vec<PatternSpec>) -> Self {
        Self { specs }
    }

    /// Start building a parser
    pub fn builder() -> TextParserBuilder {
        TextParserBuilder::default()
    }

    /// Compile a parser from a pattern configuration
    pub fn from_config(config: &PatternSetConfig) -> Result<Self> {
        Ok(Self::new(config.compile()?))
    }

    /// Load and compile a TOML pattern file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(&PatternSetConfig::from_file(path)?)
    }

    /// Parser over the named built-in patterns, in the given order
    pub fn with_builtins<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .try_fold(Self::builder(), |builder, name| builder.builtin(name.as_ref()))
            .map(TextParserBuilder::build)
    }

    /// The ordered specs
    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    /// Display name of the spec at `index`
    pub fn pattern_name(&self, index: usize) -> Option<&str> {
        self.specs.get(index).and_then(PatternSpec::name)
    }

    /// Split `text` into chunks
    pub fn parse(&self, text: &str) -> Vec<Chunk> {
        let chunks = parse(text, &self.specs);
        log::debug!(
            "parsed {} bytes into {} chunk(s) with {} pattern(s)",
            text.len(),
            chunks.len(),
            self.specs.len()
        );
        chunks
    }
}

/// Builder for [`TextParser`]
#[derive(Debug, Default)]
pub struct TextParserBuilder {
    specs: Vec<PatternSpec>,
}

impl TextParserBuilder {
    /// Append a pattern; earlier patterns win overlaps
    pub fn pattern(mut self, spec: PatternSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Append every pattern of `specs`
    pub fn patterns(mut self, specs: impl IntoIterator<Item = PatternSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Append a built-in pattern by name
    pub fn builtin(self, name: &str) -> Result<Self> {
        Ok(self.pattern(config::builtin_spec(name)?))
    }

    /// Build the parser
    pub fn build(self) -> TextParser {
        TextParser::new(self.specs)
    }
}
