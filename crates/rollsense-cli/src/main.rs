//! rollctl - Roll Sensing Control CLI
//!
//! Replays recorded accelerometer samples through a roll sensing session,
//! prints low-pass filter coefficients and validates sensor configurations.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;
mod recording;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CheckConfigArgs, CoefficientsArgs, ReplayArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "rollctl")]
#[command(about = "Roll Sensing Control CLI - Replay recordings and tune roll detection")]
#[command(version)]
#[command(long_about = "
rollctl drives the RollSense roll detector from the command line.
It replays CSV recordings of raw X/Y accelerometer samples through the
low-pass filter and hysteresis detector, prints filter coefficients for a
given sample rate and cutoff, and validates sensor configuration files.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a CSV recording through the roll detector
    Replay(ReplayArgs),

    /// Print low-pass filter coefficients
    Coefficients(CoefficientsArgs),

    /// Validate a sensor configuration file
    CheckConfig(CheckConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rollctl={log_level},rollsense_sensor={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
        Commands::Coefficients(args) => commands::coefficients::execute(args, cli.json),
        Commands::CheckConfig(args) => commands::check_config::execute(args, cli.json),
    }
}
