//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Built-in patterns used when none are given on the command line
    pub default_builtins: Vec<String>,

    /// Pattern file used when none is given on the command line
    pub pattern_file: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_builtins: parsed_text_core::list_builtin_patterns()
                .into_iter()
                .map(str::to_string)
                .collect(),
            pattern_file: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel parsing (0 = auto)
    pub worker_threads: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert!(config.processing.default_builtins.contains(&"url".to_string()));
        assert!(config.processing.pattern_file.is_none());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[processing]\ndefault_builtins = [\"hashtag\"]\n\n[output]\ndefault_format = \"json\""
        )
        .unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.processing.default_builtins, vec!["hashtag"]);
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output\npretty_json = maybe").unwrap();

        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
