//! Command implementations for rollctl CLI

pub mod check_config;
pub mod coefficients;
pub mod replay;

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// CSV recording with an `x,y` header
    pub samples: PathBuf,

    /// Sensor configuration file (.yaml, .yml or .json)
    #[arg(short, long, env = "ROLLCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed the filter from the first sample instead of starting at zero
    #[arg(long)]
    pub prime: bool,

    /// Only print samples where the roll state changes
    #[arg(short, long)]
    pub transitions_only: bool,
}

#[derive(Args, Debug)]
pub struct CoefficientsArgs {
    /// Sample frequency in Hz
    #[arg(long, default_value_t = rollsense_filters::DEFAULT_SAMPLE_FREQ_HZ)]
    pub sample_freq: f32,

    /// Cutoff frequency in Hz; zero or negative selects bypass
    #[arg(
        long,
        default_value_t = rollsense_filters::DEFAULT_CUTOFF_FREQ_HZ,
        allow_negative_numbers = true
    )]
    pub cutoff: f32,
}

#[derive(Args, Debug)]
pub struct CheckConfigArgs {
    /// Sensor configuration file (.yaml, .yml or .json)
    pub file: PathBuf,
}
