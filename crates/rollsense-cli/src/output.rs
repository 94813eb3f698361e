//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use rollsense_filters::{FilterCoefficients, LowPassFilter};
use rollsense_sensor::{Axis, RollReading, RollSensorConfig, RollState};
use serde::Serialize;
use serde_json::json;

/// Totals for one replayed recording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub samples: u64,
    pub transitions: u64,
    pub detected_samples: u64,
    pub final_state: RollState,
    pub primed: bool,
}

fn print_json(value: &serde_json::Value, what: &str) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format {what} as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "chain": error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>(),
        }
    });
    print_json(&error_json, "error");
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".yellow(), cause);
    }
}

fn state_label(state: RollState) -> ColoredString {
    match state {
        RollState::Detected => "ROLL".red().bold(),
        RollState::NotDetected => "level".green(),
    }
}

fn axis_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "X",
        Axis::Y => "Y",
    }
}

/// Print one reading as a table row.
pub fn print_reading_human(reading: &RollReading, transition: bool) {
    let marker = if transition { "→".yellow() } else { " ".normal() };
    println!(
        "{} {:>8} {:>7} {:>7} {:>9} {:>10.3} {}",
        marker,
        reading.seq,
        reading.x,
        reading.y,
        reading.magnitude,
        reading.filtered,
        state_label(reading.state)
    );
}

/// Print the table header for replay output.
pub fn print_reading_header() {
    let header = format!(
        "  {:>8} {:>7} {:>7} {:>9} {:>10} state",
        "seq", "x", "y", "magnitude", "filtered"
    );
    println!("{}", header.as_str().bold());
}

/// Print replay totals.
pub fn print_summary_human(summary: &ReplaySummary) {
    println!();
    println!("{}", "Replay Summary:".bold());
    println!("  Samples: {}", summary.samples);
    println!("  Transitions: {}", summary.transitions);
    println!("  Detected samples: {}", summary.detected_samples);
    println!("  Final state: {}", state_label(summary.final_state));
    if summary.primed {
        println!("  Filter primed from first sample");
    }
}

/// Print a full replay result as JSON.
pub fn print_replay_json(readings: &[RollReading], summary: &ReplaySummary) {
    let output = json!({
        "success": true,
        "readings": readings,
        "summary": summary,
    });
    print_json(&output, "replay result");
}

/// Print filter coefficients in the requested format.
pub fn print_coefficients(filter: &LowPassFilter, json: bool) {
    let coefficients = filter.coefficients();

    if json {
        let output = json!({
            "success": true,
            "sample_freq_hz": filter.sample_freq_hz(),
            "cutoff_freq_hz": filter.cutoff_freq_hz(),
            "bypass": filter.is_bypassed(),
            "coefficients": coefficients,
            "dc_gain": coefficients.as_ref().map(FilterCoefficients::dc_gain),
            "stable": coefficients.as_ref().map(FilterCoefficients::is_stable),
        });
        print_json(&output, "coefficients");
        return;
    }

    println!(
        "{} fs = {} Hz, fc = {} Hz",
        "Low-pass filter:".bold(),
        filter.sample_freq_hz(),
        filter.cutoff_freq_hz()
    );

    match coefficients {
        Some(c) => {
            println!("  b0 = {:.6}", c.b0);
            println!("  b1 = {:.6}", c.b1);
            println!("  b2 = {:.6}", c.b2);
            println!("  a1 = {:.6}", c.a1);
            println!("  a2 = {:.6}", c.a2);
            println!("  DC gain: {:.6}", c.dc_gain());
            let stable = if c.is_stable() {
                "yes".green()
            } else {
                "no".red()
            };
            println!("  Stable: {stable}");
        }
        None => println!("  {}", "Bypass (cutoff <= 0): output equals input".yellow()),
    }
}

/// Print a validated configuration.
pub fn print_config(config: &RollSensorConfig, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "valid": true,
            "config": config,
        });
        print_json(&output, "configuration");
        return;
    }

    let detector = &config.detector;
    let release = detector.diff_trigger.saturating_sub(detector.hysteresis);

    println!("{} {}", "✓".green(), "Configuration is valid".bold());
    println!("  Axis: {}", axis_label(config.axis));
    println!("  Center point: {}", config.center_point);
    println!("  Sample frequency: {} Hz", config.sample_freq_hz);
    if config.cutoff_freq_hz > 0.0 {
        println!("  Cutoff frequency: {} Hz", config.cutoff_freq_hz);
    } else {
        println!("  Cutoff frequency: {}", "bypass".yellow());
    }
    println!("  Trigger above: {}", detector.diff_trigger);
    println!("  Release below: {release}");
    if detector.trigger_time == 0 {
        println!("  Dwell: immediate");
    } else {
        println!("  Dwell: {} samples", detector.trigger_time);
    }
}
