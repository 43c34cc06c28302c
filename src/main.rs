//! Secret Baker - bakes SSM secrets into deployment packages.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secret_baker::cli::output;
use secret_baker::cli::{execute, Cli};
use secret_baker::error::{ConfigError, Error, SecretError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SECRET_BAKER_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secret_baker=debug")
        } else {
            EnvFilter::new("secret_baker=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.config, &cli.params) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NotFound(_)) => {
                Some("create serverless.toml or pass --config <path>")
            }
            Error::Config(ConfigError::InvalidSecrets(_)) => {
                Some("secretBaker.secrets takes a list of names or a NAME = \"path\" table")
            }
            Error::Secret(SecretError::NotFound(_)) => {
                Some("check the parameter exists in SSM in the current region")
            }
            Error::Param(_) => Some("params look like --param key=value[,key=value]"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
