//! Fuel tank demonstration CLI.
//!
//! A thin console front end over the `fueltank` library.
//!
//! # Quick Start
//!
//! ```bash
//! # Run the demonstration scenario (50 L tank holding 20 L)
//! fueltank demo
//!
//! # Same scenario against a tank described in a TOML preset
//! fueltank demo --preset ./tank.toml
//!
//! # Replay the documented examples
//! fueltank check
//! ```

mod commands;
mod preset;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fueltank_types::Liters;

/// Fuel tank demonstration and self-test CLI.
#[derive(Parser)]
#[command(name = "fueltank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Run the demonstration scenario against a tank.
    Demo {
        /// Tank capacity in liters.
        #[arg(long, default_value = "50", allow_negative_numbers = true)]
        capacity: Liters,

        /// Starting fuel level in liters.
        #[arg(long, default_value = "20", allow_negative_numbers = true)]
        fuel: Liters,

        /// Load the tank from a TOML preset file instead.
        #[arg(long, conflicts_with_all = ["capacity", "fuel"])]
        preset: Option<PathBuf>,
    },

    /// Replay the documented examples and report pass/fail.
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Demo {
            capacity,
            fuel,
            preset,
        } => commands::demo::run(capacity, fuel, preset.as_deref()),
        Commands::Check => commands::check::run(),
    }
}
