mod cli;
mod filter;

use anyhow::Result;
use clap::Parser;
use keyscrub_security::Redactor;

fn main() -> Result<()> {
    // Logs go to stderr: stdout carries the filtered content
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = cli::Cli::parse();

    let redactor = Redactor::new();
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    filter::run(&redactor, stdin, stdout)?;

    Ok(())
}
