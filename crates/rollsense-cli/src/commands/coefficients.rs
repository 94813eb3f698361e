//! Filter coefficient inspection

use anyhow::Result;
use rollsense_filters::LowPassFilter;
use rollsense_sensor::SensorError;

use crate::commands::CoefficientsArgs;
use crate::error::CliError;
use crate::output;

/// Execute coefficients command
pub fn execute(args: &CoefficientsArgs, json: bool) -> Result<()> {
    let filter = LowPassFilter::new(args.sample_freq, args.cutoff)
        .map_err(|e| CliError::Config(SensorError::from(e)))?;

    output::print_coefficients(&filter, json);
    Ok(())
}
