//! Command line definition and dispatch

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use annotation_engine::FilterMode;
use corpus_core::{count_directory, process_markdown, scan_markdown, BatchOptions};

use crate::config::Config;
use crate::reporter::{OutputFormat, Reporter};

#[derive(Parser, Debug)]
#[command(name = "kb-cli")]
#[command(
    version,
    about = "Annotation cleanup, word counts and FAQ conversion for a Markdown knowledge base"
)]
pub struct Cli {
    /// Knowledge base root directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: kb-tools.toml in the root, if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report bracketed English annotations without modifying files
    Scan,

    /// Remove annotations from every Markdown file in place
    Strip(StripArgs),

    /// Count CJK characters, characters, words and lines
    Count(CountArgs),

    /// Convert the FAQ JSON file into Markdown
    Faq(FaqArgs),
}

/// Removal policy selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StripMode {
    /// Remove every annotation and collapse whitespace
    All,
    /// Keep allow-listed annotations, remove the rest
    Selective,
    /// Remove every annotation, keep all formatting
    PreserveLayout,
}

#[derive(Args, Debug)]
pub struct StripArgs {
    #[arg(long, value_enum)]
    pub mode: StripMode,

    /// Show which files would change without writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Number of files in the largest-files list
    #[arg(long)]
    pub top: Option<usize>,

    /// File extensions to count (repeatable); overrides the config
    #[arg(long = "ext")]
    pub extensions: Vec<String>,
}

#[derive(Args, Debug)]
pub struct FaqArgs {
    /// FAQ JSON source
    #[arg(long, default_value = "5-faq_detailed.json")]
    pub input: PathBuf,

    /// Markdown destination
    #[arg(long, default_value = "FAQ.md")]
    pub output: PathBuf,
}

impl StripMode {
    pub fn into_filter(self, config: &Config) -> FilterMode {
        match self {
            StripMode::All => FilterMode::RemoveAll,
            StripMode::Selective => FilterMode::SelectiveRemove(config.annotations.allow_list()),
            StripMode::PreserveLayout => FilterMode::PreserveLayout,
        }
    }
}

impl Cli {
    /// Run the selected command and return its rendered report
    pub fn execute(&self) -> Result<String> {
        let config = Config::resolve(self.config.as_deref(), &self.root)?;
        let reporter = Reporter::new(self.format);

        match &self.command {
            Command::Scan => {
                let outcome = scan_markdown(&self.root, &config.annotations.discovery())
                    .with_context(|| format!("Failed to scan {}", self.root.display()))?;
                reporter.scan(&self.root, &outcome)
            }
            Command::Strip(args) => {
                let mode = args.mode.into_filter(&config);
                if let FilterMode::SelectiveRemove(keep) = &mode {
                    tracing::info!(terms = keep.len(), "allow-list loaded");
                }
                let outcome = process_markdown(
                    &self.root,
                    &config.annotations.discovery(),
                    &mode,
                    BatchOptions {
                        dry_run: args.dry_run,
                    },
                )
                .with_context(|| format!("Failed to process {}", self.root.display()))?;
                reporter.strip(&self.root, mode.name(), &outcome)
            }
            Command::Count(args) => {
                let mut count = config.count.clone();
                if !args.extensions.is_empty() {
                    count.extensions = args.extensions.clone();
                }
                let top = args.top.unwrap_or(count.top);
                let outcome = count_directory(&self.root, &count.discovery())
                    .with_context(|| format!("Failed to count {}", self.root.display()))?;
                reporter.count(&self.root, &outcome, top)
            }
            Command::Faq(args) => {
                let summary = faq_markdown::convert_file(&args.input, &args.output, &config.faq)?;
                reporter.faq(&args.input, &args.output, &summary)
            }
        }
    }
}
