//! Validate command implementation

use anyhow::Result;
use clap::Args;
use parsed_text_core::{PatternSetConfig, TextParser};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the pattern file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub patterns: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating pattern file: {}", self.patterns.display());

        match PatternSetConfig::from_file(&self.patterns).and_then(|c| TextParser::from_config(&c))
        {
            Ok(parser) => {
                println!("✓ Configuration is valid!");
                println!("  Patterns: {}", parser.specs().len());
                for (index, spec) in parser.specs().iter().enumerate() {
                    println!(
                        "  {}. {} /{}/",
                        index + 1,
                        spec.name().unwrap_or("unnamed"),
                        spec.regex().as_str()
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
