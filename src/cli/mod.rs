//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Pulse using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Pulse - Patient Vital Signs Pipeline
#[derive(Parser, Debug)]
#[command(name = "pulse")]
#[command(version, about, long_about = None)]
#[command(author = "Pulse Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pulse.toml", env = "PULSE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PULSE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest pending vital-sign batches: evaluate, export, persist
    Ingest(commands::ingest::IngestArgs),

    /// Run the patient monitoring simulator (uploads synthetic batches)
    Simulate(commands::simulate::SimulateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_ingest() {
        let cli = Cli::parse_from(["pulse", "ingest"]);
        assert_eq!(cli.config, "pulse.toml");
        assert!(matches!(cli.command, Commands::Ingest(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["pulse", "--config", "custom.toml", "ingest"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["pulse", "--log-level", "debug", "ingest"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_simulate() {
        let cli = Cli::parse_from(["pulse", "simulate"]);
        assert!(matches!(cli.command, Commands::Simulate(_)));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["pulse", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["pulse", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
