//! Input argument expansion using glob

use super::STDIN_MARKER;
use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Files matched by one pattern, sorted
///
/// A pattern that matches nothing yields an empty list.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|_| CliError::InvalidGlob(pattern.to_string()))?;

    let mut files = paths
        .map(|entry| entry.with_context(|| format!("Error resolving pattern: {}", pattern)))
        .filter(|entry| entry.as_ref().map_or(true, |path| path.is_file()))
        .collect::<Result<Vec<_>>>()?;
    files.sort();
    Ok(files)
}

/// One resolved input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

/// Expand every input argument, keeping argument order
///
/// Files are sorted within a pattern. An input named by several arguments is
/// kept at its first position, so stdin is read at most once.
pub fn resolve_inputs(args: &[String]) -> Result<Vec<InputSource>> {
    let mut seen = HashSet::new();
    let mut inputs = Vec::new();

    for arg in args {
        let sources = if arg == STDIN_MARKER {
            vec![InputSource::Stdin]
        } else {
            resolve_pattern(arg)?
                .into_iter()
                .map(InputSource::File)
                .collect()
        };

        for source in sources {
            if seen.insert(source.clone()) {
                inputs.push(source);
            }
        }
    }

    if inputs.is_empty() {
        return Err(CliError::NoFilesFound.into());
    }
    Ok(inputs)
}
