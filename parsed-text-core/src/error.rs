//! Configuration error types
//!
//! Parsing itself never fails. Errors only arise while turning pattern
//! definitions (files, TOML strings, built-in names) into compiled patterns.

use thiserror::Error;

/// Errors raised while loading or compiling pattern definitions
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Pattern file could not be read
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or shape error
    #[error("Failed to parse pattern configuration: {0}")]
    Parse(String),

    /// Regex failed to compile
    #[error("Invalid regex for pattern '{name}': {source}")]
    InvalidRegex {
        /// Name of the offending pattern
        name: String,
        /// Compilation error reported by the regex engine
        #[source]
        source: regex::Error,
    },

    /// Reference to a built-in pattern that does not exist
    #[error("Unknown built-in pattern: {0}")]
    UnknownBuiltin(String),

    /// Pattern definition is structurally invalid
    #[error("Invalid pattern definition: {0}")]
    InvalidPattern(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
