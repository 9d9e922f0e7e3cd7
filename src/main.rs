use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod decoder;
mod defaults;
mod encoding;
mod error;
mod key;

use crate::cli::Cli;
use crate::defaults::Defaults;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let out = (!cli.print_only).then_some(cli.out.as_path());
    let mut stdout = std::io::stdout().lock();
    commands::extract::run(&cli.keypair, out, &mut stdout)
        .with_context(|| format!("extracting program id from {}", cli.keypair.display()))?;
    Ok(())
}

// Logs go to stderr; stdout only carries the id.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Defaults::LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
