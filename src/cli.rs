//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// LinkFlow - terminal dashboard for short links
#[derive(Parser)]
#[command(name = "linkflow")]
#[command(version)]
#[command(about = "A terminal dashboard for managing short links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// JSON seed file replacing the built-in sample groups
    #[arg(long, global = true)]
    pub seed: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard (default)
    Tui,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Manage seed data
    Seed {
        #[command(subcommand)]
        action: SeedCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output file path (default: stdout)
        output_path: Option<String>,
    },
}

/// Seed data commands
#[derive(Subcommand)]
pub enum SeedCommands {
    /// Write the built-in sample groups as JSON
    Export {
        /// Output file path (default: stdout)
        output_path: Option<String>,
    },
}
