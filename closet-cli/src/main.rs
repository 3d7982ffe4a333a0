//! # Closet CLI
//!
//! Command-line entry point for the closet configurator.

use std::process::ExitCode;

use clap::Parser;
use closet_cli::CliArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing on stderr so stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,closet_core=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // Use JSON format in production (RUST_LOG_FORMAT=json)
    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = CliArgs::parse();
    tracing::debug!(command = ?args.command, "Running closet command");

    let outcome = closet_cli::run(&args)?;
    println!("{}", outcome.output);

    Ok(ExitCode::from(outcome.exit_code))
}
