//! parsed-text command-line entry point

use clap::Parser;
use parsed_text_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
