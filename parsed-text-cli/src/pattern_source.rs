//! Pattern source management for CLI

use anyhow::{Context, Result};
use parsed_text_core::{PatternSetConfig, TextParser};
use std::path::PathBuf;

/// Where the ordered pattern list comes from
#[derive(Debug, Clone)]
pub enum PatternSource {
    /// Built-in patterns, by name
    BuiltIn(Vec<String>),
    /// External pattern file
    External {
        /// Path to the pattern file
        path: PathBuf,
    },
    /// Built-in patterns first, then the patterns of a file
    Mixed {
        /// Built-in pattern names
        builtins: Vec<String>,
        /// Path to the pattern file
        path: PathBuf,
    },
}

impl PatternSource {
    /// Choose a source from optional built-in names and an optional file
    ///
    /// Returns `None` when neither was given.
    pub fn from_parts(builtins: Vec<String>, path: Option<PathBuf>) -> Option<Self> {
        match (builtins.is_empty(), path) {
            (true, None) => None,
            (false, None) => Some(PatternSource::BuiltIn(builtins)),
            (true, Some(path)) => Some(PatternSource::External { path }),
            (false, Some(path)) => Some(PatternSource::Mixed { builtins, path }),
        }
    }

    /// Get the display name for the pattern source
    pub fn display_name(&self) -> String {
        match self {
            PatternSource::BuiltIn(names) => format!("Built-in: {}", names.join(", ")),
            PatternSource::External { path } => format!("External: {}", path.display()),
            PatternSource::Mixed { builtins, path } => {
                format!("Built-in: {} + External: {}", builtins.join(", "), path.display())
            }
        }
    }

    /// Compile the patterns into a parser
    pub fn load(&self) -> Result<TextParser> {
        match self {
            PatternSource::BuiltIn(names) => TextParser::with_builtins(names.as_slice())
                .context("Failed to load built-in patterns"),
            PatternSource::External { path } => TextParser::from_file(path)
                .with_context(|| format!("Failed to load patterns from {}", path.display())),
            PatternSource::Mixed { builtins, path } => {
                let file = PatternSetConfig::from_file(path)
                    .with_context(|| format!("Failed to load patterns from {}", path.display()))?;
                let specs = file.compile()?;
                let builder = builtins
                    .iter()
                    .try_fold(TextParser::builder(), |builder, name| builder.builtin(name))
                    .context("Failed to load built-in patterns")?;
                Ok(builder.patterns(specs).build())
            }
        }
    }
}
