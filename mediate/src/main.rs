//! mediate - CLI entry point

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use mediate::cli::{Cli, Command};
use mediate::config::Config;
use mediate::mediator::Role;
use mediate::output::{ConsoleSink, OutputFormat};
use mediate::wiring::{Wiring, run_demo};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mediate")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Stdout carries deliveries, so logs go to a file
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("mediate.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let format = cli.format.unwrap_or(config.output.format);

    info!(?format, "mediate starting");

    let result = match cli.command {
        None | Some(Command::Demo) => cmd_demo(&config, format),
        Some(Command::Send { from, repeat, message }) => cmd_send(&config, format, from, repeat, &message),
        Some(Command::Config) => cmd_config(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// Run the two-send demo
fn cmd_demo(config: &Config, format: OutputFormat) -> Result<()> {
    let stats = run_demo(config, Rc::new(ConsoleSink::new(format))).context("Demo failed")?;
    info!(routed = stats.routed, rejected = stats.rejected, "Demo finished");
    Ok(())
}

/// Relay one message from the chosen colleague
fn cmd_send(config: &Config, format: OutputFormat, from: Role, repeat: usize, message: &str) -> Result<()> {
    let wiring = Wiring::build(config, Rc::new(ConsoleSink::new(format)));
    wiring
        .send_from(from, message, repeat)
        .context(format!("Failed to send from {} colleague", from))?;

    let stats = wiring.stats();
    info!(routed = stats.routed, rejected = stats.rejected, "Send finished");
    Ok(())
}

/// Print the effective configuration
fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
