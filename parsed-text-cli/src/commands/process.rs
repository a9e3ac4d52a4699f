//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_inputs, FileReader, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::pattern_source::PatternSource;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use parsed_text_core::{Chunk, TextParser};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob, "-" for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pattern file (TOML) appended after any built-in patterns
    #[arg(short, long, value_name = "FILE")]
    pub patterns: Option<PathBuf>,

    /// Built-in patterns to apply, in priority order
    #[arg(short, long, value_name = "NAME", value_delimiter = ',')]
    pub builtin: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Parse input files in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of worker threads for parallel parsing
    #[arg(short, long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered text
    Text,
    /// JSON array of chunks with metadata
    Json,
    /// Markdown list of matched chunks
    Markdown,
}

/// One input document
struct Input {
    path: Option<PathBuf>,
    text: String,
}

impl Input {
    fn label(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        if self.threads == Some(0) {
            return Err(
                CliError::InvalidArgument("Thread count must be greater than 0".to_string()).into(),
            );
        }

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let format = self.resolve_format(&config)?;
        let source = self.pattern_source(&config).ok_or_else(|| {
            CliError::InvalidArgument(
                "No patterns selected; use --builtin or --patterns".to_string(),
            )
        })?;
        log::info!("Using patterns: {}", source.display_name());
        let parser = source.load()?;

        let inputs = self.load_inputs()?;
        log::info!("Loaded {} input(s)", inputs.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let results = if self.parallel && inputs.len() > 1 {
            let threads = self
                .threads
                .or(match config.performance.worker_threads {
                    0 => None,
                    n => Some(n),
                })
                .unwrap_or_else(num_cpus::get);
            log::debug!("Parsing in parallel on {} thread(s)", threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to create thread pool")?;
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|input| parse_input(&parser, input, &progress))
                    .collect::<Vec<_>>()
            })
        } else {
            inputs
                .iter()
                .map(|input| parse_input(&parser, input, &progress))
                .collect()
        };

        let mut formatter = self.create_formatter(format, &config)?;
        for (input, chunks) in inputs.iter().zip(&results) {
            formatter.start_input(input.path.as_deref())?;
            for chunk in chunks {
                let name = chunk.pattern.and_then(|index| parser.pattern_name(index));
                formatter.format_chunk(chunk, name)?;
            }
        }
        formatter.finish()?;
        progress.finish();

        log::info!("Matched {} chunk(s)", progress.matched_total());
        log::info!("Processing complete");
        Ok(())
    }

    /// Pick the output format: flag, then config, then text
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "Unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Command-line patterns win over the configured defaults
    fn pattern_source(&self, config: &CliConfig) -> Option<PatternSource> {
        if !self.builtin.is_empty() || self.patterns.is_some() {
            return PatternSource::from_parts(self.builtin.clone(), self.patterns.clone());
        }
        PatternSource::from_parts(
            config.processing.default_builtins.clone(),
            config.processing.pattern_file.clone(),
        )
    }

    /// Read every input in argument order
    fn load_inputs(&self) -> Result<Vec<Input>> {
        resolve_inputs(&self.input)?
            .into_iter()
            .map(|source| -> Result<Input> {
                Ok(match source {
                    InputSource::Stdin => Input {
                        path: None,
                        text: FileReader::read_stdin()?,
                    },
                    InputSource::File(path) => Input {
                        text: FileReader::read_text(&path)?,
                        path: Some(path),
                    },
                })
            })
            .collect()
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        config: &CliConfig,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }
}

fn parse_input(parser: &TextParser, input: &Input, progress: &ProgressReporter) -> Vec<Chunk> {
    let chunks = parser.parse(&input.text);
    let matched = chunks.iter().filter(|chunk| chunk.is_matched()).count();
    progress.file_completed(&input.label(), matched);
    chunks
}
