//! CLI command implementations

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Split text into matched and unmatched chunks with ordered regex patterns
#[derive(Debug, Parser)]
#[command(name = "parsed-text", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse text files into chunks
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a pattern file
    Validate(validate::ValidateArgs),

    /// Generate a pattern file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in patterns
    Patterns,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Patterns => {
                println!("Built-in patterns:");
                for name in parsed_text_core::list_builtin_patterns() {
                    let description = parsed_text_core::config::builtin_pattern(name)?
                        .description
                        .as_deref()
                        .unwrap_or("");
                    println!("  {:<10} {}", name, description);
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text       Rendered text");
                println!("  json       JSON array of chunks with metadata");
                println!("  markdown   Numbered list of matched chunks");
            }
        }
        Ok(())
    }
}
