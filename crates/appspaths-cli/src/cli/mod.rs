//! CLI for resolving application extension paths.

mod commands;

use anyhow::Result;
use appspaths_core::config::OutputFormat;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_config_path, run_resolve};

/// Top-level CLI for appspaths.
#[derive(Debug, Parser)]
#[command(name = "appspaths")]
#[command(about = "Resolve built-in and custom apps directories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the apps paths for a server root and print them.
    Resolve {
        /// Server root (overrides `server_root` from the config file).
        #[arg(long, value_name = "PATH")]
        server_root: Option<String>,
        /// Output format: toml or json (overrides `output_format` from the config file).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
        /// Config file to use instead of ~/.config/appspaths/config.toml.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the location of the config file.
    ConfigPath,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                server_root,
                format,
                config,
            } => run_resolve(server_root, format, config.as_deref())?,
            CliCommand::ConfigPath => run_config_path()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
