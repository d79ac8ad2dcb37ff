use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::Context;

#[derive(Parser)]
#[command(name = "starlog")]
#[command(about = "Stargazing observation log with achievements and streaks")]
#[command(version)]
struct Cli {
    /// Path to the observation database (defaults to ~/.starlog/observations.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.starlog/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Manage the observation log
    #[command(subcommand)]
    Log(cli::log::LogCommand),

    /// Show statistics derived from the observation log
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show achievement progress
    Achievements {
        /// Only show the achievements closest to being earned
        #[arg(long)]
        next: bool,

        /// Only show the earned showcase (highest tier first)
        #[arg(long, conflicts_with = "next")]
        showcase: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show objects observed near a location
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Search radius in km (defaults to the configured radius)
        #[arg(long)]
        radius_km: Option<f64>,

        /// Look back this many days (defaults to the configured window)
        #[arg(long)]
        days: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let load_context = || Context::load(cli.config.as_deref(), cli.db.as_deref());

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(cli.config.as_deref(), force)?;
        }
        Commands::Log(command) => {
            cli::log::log_command(&load_context()?, command)?;
        }
        Commands::Stats { json } => {
            cli::stats::stats_command(&load_context()?, json)?;
        }
        Commands::Achievements {
            next,
            showcase,
            json,
        } => {
            cli::achievements::achievements_command(&load_context()?, next, showcase, json)?;
        }
        Commands::Nearby {
            lat,
            lon,
            radius_km,
            days,
        } => {
            cli::nearby::nearby_command(&load_context()?, lat, lon, radius_km, days)?;
        }
    }

    Ok(())
}
