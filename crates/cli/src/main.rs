mod args;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use photokey_core::{load_config_or_default, run, validate_config, Event, EventSink};

use args::Cli;

/// Prints each event as soon as it is emitted.
struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&mut self, event: Event) {
        println!("{}", event);
    }
}

fn main() {
    if let Err(e) = try_main() {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    // Logs go to stderr so stdout only carries the run output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref())
        .with_context(|| match cli.config.as_deref() {
            Some(path) => format!("Failed to load config from {:?}", path),
            None => "Failed to load config".to_string(),
        })?;
    validate_config(&config).context("Configuration validation failed")?;

    let request = cli.to_request(&config);
    print_banner(&request.root, request.options.dry_run);

    let report = run(&request, &mut StdoutSink);
    tracing::debug!(?report, "Run finished");

    Ok(())
}

fn print_banner(root: &Path, dry_run: bool) {
    println!("Root: {}", root.display());
    if dry_run {
        println!("Dry run: no files will be moved or copied.");
    }
}
