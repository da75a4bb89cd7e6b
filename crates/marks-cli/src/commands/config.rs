//! Config command handlers

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::output::{Output, OutputFormat};

/// Show the effective configuration
pub fn show(config: &Config, config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let effective_path = effective_path(config_path);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "tag_separator": config.tag_separator,
                    "log_level": config.log_level,
                    "log_file": config.log_file,
                    "json": config.json,
                    "config_file": effective_path
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", effective_path.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  tag_separator: {:?}", config.tag_separator);
            println!("  log_level:     {}", config.log_level);
            println!(
                "  log_file:      {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  json:          {}", config.json);
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Print the config file path
pub fn path(config_path: Option<&PathBuf>) -> Result<()> {
    println!("{}", effective_path(config_path).display());
    Ok(())
}

fn effective_path(config_path: Option<&PathBuf>) -> PathBuf {
    config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path)
}
