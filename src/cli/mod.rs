//! Command-line interface.
//!
//! The binary plays the part of the host: it loads the service
//! configuration, wires up the SSM backend and fires lifecycle events.

pub mod completions;
pub mod hooks;
pub mod output;
pub mod status;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::config::ServiceConfig;
use crate::core::constants;
use crate::core::host::LocalHost;
use crate::core::lifecycle::SecretBaker;
use crate::core::params::CliParams;
use crate::core::store::{default_backend, ParameterStore};
use crate::error::Result;

/// Secret Baker - bakes SSM secrets into deployment packages.
#[derive(Parser)]
#[command(
    name = "secret-baker",
    about = "Bakes SSM Parameter Store secrets into deployment packages",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Service configuration file (.toml or .json)
    #[arg(
        short,
        long,
        global = true,
        env = "SECRET_BAKER_CONFIG",
        default_value = constants::SERVICE_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Deployment params as key=value[,key=value...]
    #[arg(long = "param", global = true, value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve secrets, write the secrets file and add it to the package
    Package,

    /// Remove the secrets file after packaging
    Cleanup,

    /// Fire a single lifecycle event
    Hook {
        /// Event name (e.g. before:invoke:local:invoke)
        event: String,
    },

    /// List registered lifecycle events
    Hooks {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show declared secrets and the secrets file state
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Orchestrator over the local host and the default backend.
pub type LocalBaker = SecretBaker<LocalHost<Box<dyn ParameterStore>>>;

/// Execute a command.
pub fn execute(command: Command, config: &Path, params: &[String]) -> Result<()> {
    use Command::*;

    match command {
        Package => hooks::package(&mut baker(config, params)?),
        Cleanup => hooks::cleanup(&mut baker(config, params)?),
        Hook { event } => hooks::dispatch(&mut baker(config, params)?, &event),
        Hooks { json } => hooks::list(&baker(config, params)?, json),
        Status => status::execute(&baker(config, params)?),
        Completions { shell } => completions::execute(shell),
    }
}

/// Build the orchestrator the way the host would at startup.
///
/// Params are parsed before the configuration is read so a malformed
/// `--param` fails first.
pub fn baker(config: &Path, params: &[String]) -> Result<LocalBaker> {
    let params = CliParams::parse(params)?;
    let service = ServiceConfig::load(config)?;
    let host = LocalHost::new(service, default_backend()).with_logger(output::log);
    SecretBaker::new(host, &params)
}
