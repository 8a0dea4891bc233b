#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod helpers;
pub mod models;
pub mod normalize;
pub mod output;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};
use config::Config;
use output::Output;

pub use error::{ParseError, RowError};

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let level: tracing::Level = level.parse().context("Invalid log level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Commands::Domain { link, json } => {
            let result = commands::domain::run(link)?;
            Output::new(json).domain(&result)
        }
        Commands::Referrer {
            link,
            identity,
            json,
        } => {
            let result = commands::referrer::run(link, identity, &config)?;
            Output::new(json).referrer(&result)
        }
        Commands::Truncate {
            text,
            max_length,
            word_max_length,
            json,
        } => {
            let result = commands::truncate::run(text, max_length, word_max_length, &config)?;
            Output::new(json).truncated(&result)
        }
        Commands::Ago { instant, json } => {
            let result = commands::ago::run(&instant)?;
            Output::new(json).ago(&result)
        }
        Commands::Rows { file, json } => {
            let rows = commands::rows::run(file.as_deref(), &config)?;
            Output::new(json).rows(&rows)
        }
    }
}
