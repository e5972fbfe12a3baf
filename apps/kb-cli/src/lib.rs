//! Knowledge base command line tools
//!
//! Subcommands: `scan`, `strip`, `count` and `faq`. Reports go to stdout,
//! logs to stderr.

pub mod cli;
pub mod config;
pub mod reporter;

pub use cli::{Cli, Command, StripMode};
pub use config::Config;
pub use reporter::{OutputFormat, Reporter};
