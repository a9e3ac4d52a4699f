//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# Pattern file for parsed-text
#
# Patterns are applied in the order they appear. Text claimed by an earlier
# pattern is never matched again by a later one.

# Reuse a built-in pattern by name
[[patterns]]
name = "links"
builtin = "url"

# A custom regex with a replacement template ($0 is the whole match,
# $1.. are capture groups)
[[patterns]]
name = "ticket"
regex = 'TICKET-(\d+)'
render = "issue #$1"
description = "Issue tracker references"

# Limit how many occurrences are claimed in each unclaimed span
[[patterns]]
name = "first-todo"
regex = 'TODO'
case_insensitive = true
max_matches = 1
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating pattern file template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to add your own patterns");
        println!("2. Validate your patterns:");
        println!("   parsed-text validate -c {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   parsed-text process -i input.txt -p {}",
            self.output.display()
        );

        Ok(())
    }
}
