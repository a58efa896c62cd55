//! Line gauge CLI - validate configs, render rulers, replay scroll scripts.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use linegauge::widgets::GaugeConfig;

mod commands;
mod script;

#[derive(Parser)]
#[command(name = "linegauge")]
#[command(author, version, about = "Scrollable ruler gauge toolkit")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a gauge configuration file
    Check {
        /// Path to the TOML config
        config: PathBuf,
    },

    /// Render the ruler around the current value as text
    Render {
        #[command(flatten)]
        source: ConfigArgs,

        /// Override the value under the centerline
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i64>,

        /// Number of ticks to show
        #[arg(short, long, default_value = "41")]
        columns: usize,
    },

    /// Replay a scripted event sequence through the gauge
    Simulate {
        #[command(flatten)]
        source: ConfigArgs,

        /// Comma-separated steps: scroll:<x>, settle:<x>, set:<v>,
        /// range:<min>:<max>, content
        #[arg(short, long)]
        script: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where the gauge configuration comes from.
#[derive(Args)]
struct ConfigArgs {
    /// Path to a TOML config (defaults apply otherwise)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the range minimum
    #[arg(long, allow_hyphen_values = true)]
    min: Option<i64>,

    /// Override the range maximum
    #[arg(long, allow_hyphen_values = true)]
    max: Option<i64>,
}

impl ConfigArgs {
    fn load(&self) -> Result<GaugeConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GaugeConfig::default(),
        };
        if let Some(min) = self.min {
            config.min = min;
        }
        if let Some(max) = self.max {
            config.max = max;
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<GaugeConfig> {
    GaugeConfig::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Check { config } => commands::check::run(&config),
        Commands::Render {
            source,
            value,
            columns,
        } => commands::render::run(source.load()?, value, columns),
        Commands::Simulate {
            source,
            script,
            json,
        } => commands::simulate::run(source.load()?, &script, json),
    }
}
