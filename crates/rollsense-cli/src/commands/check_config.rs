//! Configuration validation

use anyhow::{Context, Result};

use crate::commands::CheckConfigArgs;
use crate::error::CliError;
use crate::output;
use crate::recording::load_config;

/// Execute check-config command
pub fn execute(args: &CheckConfigArgs, json: bool) -> Result<()> {
    let config = load_config(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    config.validate().map_err(CliError::Config)?;

    output::print_config(&config, json);
    Ok(())
}
