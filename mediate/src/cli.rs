//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::mediator::Role;
use crate::output::OutputFormat;

/// Two colleagues talking through a mediator
#[derive(Parser, Debug)]
#[command(
    name = "mediate",
    about = "Two colleagues talking through a mediator",
    version,
    after_help = "Logs are written to: ~/.local/share/mediate/logs/mediate.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Output format (overrides config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Wire both colleagues and have each send its demo message (default)
    Demo,

    /// Send one message from a colleague to the other
    Send {
        /// Sending colleague (first/one or second/two)
        #[arg(long, default_value = "first")]
        from: Role,

        /// How many times to send it
        #[arg(short, long, default_value = "1")]
        repeat: usize,

        /// Message to relay
        message: String,
    },

    /// Print the effective configuration as YAML
    Config,
}
