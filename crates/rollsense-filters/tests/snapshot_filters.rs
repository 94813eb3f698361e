//! Insta snapshot tests for filter and detector outputs.
//!
//! Each test feeds a known input sequence through a stage and captures the
//! output as an inline snapshot, so any behavioural regression is caught.

use rollsense_filters::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

// ---------------------------------------------------------------------------
// Helper: render detector states as a compact 0/1 trace
// ---------------------------------------------------------------------------
fn trace(detector: &mut RollDetector, values: &[f32]) -> String {
    values
        .iter()
        .map(|&v| if detector.update(v).is_detected() { '1' } else { '0' })
        .collect()
}

// ---------------------------------------------------------------------------
// Butterworth coefficient table
// ---------------------------------------------------------------------------

#[test]
fn butterworth_coefficient_table_snapshot() {
    let table: Vec<String> = [1.0f32, 5.0, 10.0, 20.0]
        .iter()
        .map(|&cutoff| {
            let c = FilterCoefficients::butterworth(100.0, cutoff);
            format!(
                "fc={cutoff} b0={:.4} b1={:.4} b2={:.4} a1={:.4} a2={:.4}",
                c.b0, c.b1, c.b2, c.a1, c.a2
            )
        })
        .collect();

    insta::assert_snapshot!(table.join("\n"), @r"
    fc=1 b0=0.0009 b1=0.0019 b2=0.0009 a1=-1.9112 a2=0.9150
    fc=5 b0=0.0201 b1=0.0402 b2=0.0201 a1=-1.5610 a2=0.6414
    fc=10 b0=0.0675 b1=0.1349 b2=0.0675 a1=-1.1430 a2=0.4128
    fc=20 b0=0.2066 b1=0.4131 b2=0.2066 a1=-0.3695 a2=0.1958
    ");
}

// ---------------------------------------------------------------------------
// Roll detector – immediate policy
// ---------------------------------------------------------------------------

#[test]
fn immediate_detector_trace_snapshot() -> TestResult {
    let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10))?;
    let values = [
        0.0, 30.0, 50.0, 51.0, 49.0, 45.0, 41.0, 40.0, 39.0, 45.0, 51.0, 60.0, 20.0,
    ];

    insta::assert_snapshot!(trace(&mut detector, &values), @"0001111100110");
    Ok(())
}

// ---------------------------------------------------------------------------
// Roll detector – debounced policy
// ---------------------------------------------------------------------------

#[test]
fn debounced_detector_trace_snapshot() -> TestResult {
    let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10).with_trigger_time(3))?;
    let values = [
        60.0, 60.0, 60.0, 60.0, 45.0, 39.0, 60.0, 60.0, 40.0, 60.0, 60.0, 60.0, 60.0, 60.0,
    ];

    insta::assert_snapshot!(trace(&mut detector, &values), @"00011000000011");
    Ok(())
}

// ---------------------------------------------------------------------------
// Full stage chain – noisy tilt
// ---------------------------------------------------------------------------

#[test]
fn filtered_chatter_trace_snapshot() -> TestResult {
    // A magnitude hovering around the trigger with ±15 counts of vibration.
    // The raw signal crosses 50 on every other sample; filtered, it settles
    // at 52 and the detector latches once.
    let mut filter = LowPassFilter::new(100.0, 5.0)?;
    let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10))?;

    let mut transitions = 0u32;
    let mut last = RollState::NotDetected;
    for i in 0..300 {
        let noise = if i % 2 == 0 { 15.0 } else { -15.0 };
        let mut frame = Frame::from_magnitude(52.0 + noise);
        lowpass_filter(&mut frame, &mut filter);
        roll_detector(&mut frame, &mut detector);
        if detector.state() != last {
            transitions += 1;
            last = detector.state();
        }
    }

    insta::assert_snapshot!(format!("{transitions} {last:?}"), @"1 Detected");
    Ok(())
}
