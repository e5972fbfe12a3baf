//! Knowledge base tools binary

use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kb_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Reports own stdout; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("kb-cli v{}", env!("CARGO_PKG_VERSION"));

    let report = cli.execute()?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
