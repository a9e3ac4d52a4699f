use super::loader::builtin_pattern;
use crate::domain::{MatchLimit, PatternSpec, RenderText};
use crate::error::{ConfigError, Result};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// An ordered list of pattern definitions, as stored in TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternSetConfig {
    /// Definitions in priority order
    #[serde(default)]
    pub patterns: Vec<PatternConfig>,
}

/// One pattern definition
///
/// Exactly one of `regex` and `builtin` must be set. `render` and
/// `max_matches` are kept loosely typed and normalized at compile time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Display name, unique within a set
    pub name: String,
    /// Regex source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Name of a built-in pattern to inherit from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<String>,
    /// Compile the regex case-insensitively
    #[serde(default)]
    pub case_insensitive: bool,
    /// Replacement template; non-string values are ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<toml::Value>,
    /// Occurrence bound per scan; anything but a positive integer is unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_matches: Option<toml::Value>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PatternSetConfig {
    /// Parse a pattern set from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PatternSetConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML pattern file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check every definition and reject duplicate names
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for pattern in &self.patterns {
            pattern.validate()?;
            if !seen.insert(pattern.name.as_str()) {
                return Err(ConfigError::InvalidPattern(format!(
                    "duplicate pattern name '{}'",
                    pattern.name
                )));
            }
        }
        Ok(())
    }

    /// Compile every definition, preserving order
    pub fn compile(&self) -> Result<Vec<PatternSpec>> {
        self.patterns.iter().map(PatternConfig::compile).collect()
    }
}

impl PatternConfig {
    /// A definition backed by a regex
    pub fn with_regex(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: Some(regex.into()),
            builtin: None,
            case_insensitive: false,
            render: None,
            max_matches: None,
            description: None,
        }
    }

    /// Structural checks that do not need the regex engine
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidPattern(
                "pattern name must not be empty".to_string(),
            ));
        }
        match (&self.regex, &self.builtin) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidPattern(format!(
                "pattern '{}' sets both 'regex' and 'builtin'",
                self.name
            ))),
            (None, None) => Err(ConfigError::InvalidPattern(format!(
                "pattern '{}' needs either 'regex' or 'builtin'",
                self.name
            ))),
            _ => Ok(()),
        }
    }

    /// Compile into a [`PatternSpec`]
    ///
    /// A `builtin` reference inherits the built-in regex and flags; `render`
    /// and `max_matches` given here take precedence over the built-in ones.
    pub fn compile(&self) -> Result<PatternSpec> {
        self.validate()?;

        let (source, case_insensitive, render, max_matches) = match &self.builtin {
            Some(name) => {
                let base = builtin_pattern(name)?;
                let source = base
                    .regex
                    .as_deref()
                    .ok_or_else(|| ConfigError::UnknownBuiltin(name.clone()))?;
                (
                    source,
                    base.case_insensitive || self.case_insensitive,
                    self.render.as_ref().or(base.render.as_ref()),
                    self.max_matches.as_ref().or(base.max_matches.as_ref()),
                )
            }
            None => (
                self.regex.as_deref().unwrap_or_default(),
                self.case_insensitive,
                self.render.as_ref(),
                self.max_matches.as_ref(),
            ),
        };

        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|source| ConfigError::InvalidRegex {
                name: self.name.clone(),
                source,
            })?;

        Ok(PatternSpec::new(regex)
            .named(self.name.clone())
            .render(render.map(RenderText::from_value).unwrap_or_default())
            .max_matches(max_matches.map(MatchLimit::from_value).unwrap_or_default()))
    }
}
