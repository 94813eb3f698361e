//! Replay a recorded sample file through a roll sensing session

use anyhow::{Context, Result};
use rollsense_filters::FilterError;
use rollsense_sensor::{
    RollReading, RollSensor, RollSensorConfig, RollState, SampleSource, SensorError,
};

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::output::{self, ReplaySummary};
use crate::recording::{CsvSource, load_config};

/// Execute replay command
pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => RollSensorConfig::default(),
    };

    let mut sensor = RollSensor::new(config).map_err(CliError::Config)?;
    let mut source = CsvSource::open(&args.samples)
        .with_context(|| format!("Failed to open {}", args.samples.display()))?;

    if json {
        let mut readings = Vec::new();
        let summary = run(&mut sensor, &mut source, args.prime, |reading, transition| {
            if transition || !args.transitions_only {
                readings.push(*reading);
            }
        })
        .with_context(|| format!("Failed to replay {}", args.samples.display()))?;
        output::print_replay_json(&readings, &summary);
    } else {
        output::print_reading_header();
        let summary = run(&mut sensor, &mut source, args.prime, |reading, transition| {
            if transition || !args.transitions_only {
                output::print_reading_human(reading, transition);
            }
        })
        .with_context(|| format!("Failed to replay {}", args.samples.display()))?;
        output::print_summary_human(&summary);
    }

    Ok(())
}

/// Drive `sensor` until `source` is exhausted, handing each reading to
/// `on_reading` together with whether it changed the roll state.
pub fn run<S, F>(
    sensor: &mut RollSensor,
    source: &mut S,
    prime: bool,
    mut on_reading: F,
) -> Result<ReplaySummary, CliError>
where
    S: SampleSource,
    F: FnMut(&RollReading, bool),
{
    let mut summary = ReplaySummary::default();
    let mut previous = RollState::NotDetected;
    let mut record = |reading: RollReading, summary: &mut ReplaySummary| {
        let transition = reading.state != previous;
        previous = reading.state;

        summary.samples += 1;
        if transition {
            summary.transitions += 1;
        }
        if reading.state.is_detected() {
            summary.detected_samples += 1;
        }
        on_reading(&reading, transition);
    };

    if prime {
        if let Some(sample) = source.next_sample().map_err(SensorError::source_error)? {
            let reading = match sensor.prime(sample) {
                Ok(reading) => {
                    summary.primed = true;
                    reading
                }
                Err(SensorError::Filter(FilterError::Bypassed)) => sensor.process(sample),
                Err(e) => return Err(e.into()),
            };
            record(reading, &mut summary);
        }
    }

    while let Some(reading) = sensor.poll(source)? {
        record(reading, &mut summary);
    }
    summary.final_state = sensor.state();

    tracing::info!(
        samples = summary.samples,
        transitions = summary.transitions,
        final_state = ?summary.final_state,
        "Replay finished"
    );

    Ok(summary)
}
