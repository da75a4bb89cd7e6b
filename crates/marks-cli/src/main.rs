//! marks CLI
//!
//! Command-line interface for marks - inspect bookmark payloads.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use config::Config;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "marks")]
#[command(about = "marks - Turn raw bookmark records into typed bookmarks")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show bookmarks from a payload file (stdin if omitted or "-")
    #[command(alias = "ls")]
    Show {
        /// Payload file
        file: Option<PathBuf>,
    },
    /// List tags with usage counts, including #hashtags found in titles
    Tags {
        /// Payload file
        file: Option<PathBuf>,
        /// Count only the tags field, ignoring title hashtags
        #[arg(long)]
        explicit_only: bool,
    },
    /// Show configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;

    init_logging(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    let output = Output::new(
        OutputFormat::from_flags(cli.json || config.json, cli.quiet),
        config.tag_separator.clone(),
    );

    match cli.command {
        Commands::Show { file } => commands::show::run(file.as_ref(), &output),
        Commands::Tags {
            file,
            explicit_only,
        } => commands::tags::list(file.as_ref(), explicit_only, &output),
        Commands::Config { command } => match command {
            Some(ConfigCommands::Show) | None => {
                commands::config::show(&config, cli.config.as_ref(), &output)
            }
            Some(ConfigCommands::Path) => commands::config::path(cli.config.as_ref()),
        },
    }
}

/// Initialize logging
///
/// RUST_LOG wins when set. Otherwise the level comes from -v flags or the
/// config. Logs go to config.log_file when set, stderr otherwise.
fn init_logging(config: &Config, verbose: u8) {
    let level = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("marks_core={},marks_cli={}", level, level)));

    // Ignore errors if a subscriber is already installed
    match &config.log_file {
        Some(path) => {
            let log_file = match File::create(path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not create log file {:?}: {}", path, e);
                    return;
                }
            };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(log_file)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
