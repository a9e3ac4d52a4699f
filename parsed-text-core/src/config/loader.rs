//! Embedded library of built-in patterns

use super::types::{PatternConfig, PatternSetConfig};
use crate::domain::PatternSpec;
use crate::error::{ConfigError, Result};
use std::sync::OnceLock;

static BUILTIN_PATTERNS: OnceLock<std::result::Result<Vec<PatternConfig>, String>> =
    OnceLock::new();

const BUILTIN_TOML: &str = include_str!("../../configs/patterns/builtin.toml");

fn load_builtin_patterns() -> Result<Vec<PatternConfig>> {
    let config: PatternSetConfig = toml::from_str(BUILTIN_TOML)
        .map_err(|e| ConfigError::Parse(format!("Failed to parse built-in patterns: {e}")))?;
    config.validate()?;

    // Built-ins are self-contained; references would recurse
    if let Some(pattern) = config.patterns.iter().find(|p| p.builtin.is_some()) {
        return Err(ConfigError::InvalidPattern(format!(
            "built-in pattern '{}' must define its own regex",
            pattern.name
        )));
    }

    Ok(config.patterns)
}

fn builtins() -> Result<&'static [PatternConfig]> {
    match BUILTIN_PATTERNS.get_or_init(|| load_builtin_patterns().map_err(|e| e.to_string())) {
        Ok(patterns) => Ok(patterns),
        Err(msg) => Err(ConfigError::Parse(msg.clone())),
    }
}

/// Look up a built-in pattern definition by name
pub fn builtin_pattern(name: &str) -> Result<&'static PatternConfig> {
    builtins()?
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| ConfigError::UnknownBuiltin(name.to_string()))
}

/// Compile a built-in pattern by name
pub fn builtin_spec(name: &str) -> Result<PatternSpec> {
    builtin_pattern(name)?.compile()
}

/// Names of the built-in patterns, in library order
pub fn list_builtin_patterns() -> Vec<&'static str> {
    builtins()
        .map(|patterns| patterns.iter().map(|p| p.name.as_str()).collect())
        .unwrap_or_default()
}
