//! RT-Safe Roll Sensing Filters
//!
//! This crate provides the signal path of the roll sensor: a second-order
//! Butterworth low-pass filter that removes vibration noise from the
//! rectified accelerometer axis, and a hysteresis state machine that turns
//! the filtered magnitude into a stable roll/no-roll decision. Both stages
//! are evaluated once per sample at a fixed 100 Hz cadence.
//!
//! # Overview
//!
//! - **Low-pass**: Butterworth biquad with bypass mode and steady-state reset
//! - **Roll detector**: Trigger/release thresholds with optional dwell time
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations in `apply`/`update`
//! - O(1) time complexity for all per-sample operations
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use rollsense_filters::prelude::*;
//!
//! // Create stages at initialization time
//! let mut filter = LowPassFilter::new(100.0, 5.0)?;
//! let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10))?;
//!
//! // In the sampling loop (100 Hz):
//! for _ in 0..200 {
//!     let mut frame = Frame::from_magnitude(80.0);
//!     lowpass_filter(&mut frame, &mut filter);
//!     roll_detector(&mut frame, &mut detector);
//! }
//!
//! assert!(detector.is_detected());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod lowpass;
pub mod prelude;
pub mod roll_detector;
pub mod state;

pub use error::{DetectorError, DetectorResult, FilterError, FilterResult};
pub use lowpass::{
    BUTTERWORTH_DAMPING, DEFAULT_CUTOFF_FREQ_HZ, DEFAULT_SAMPLE_FREQ_HZ, FilterCoefficients,
    FilterState, LowPassFilter, lowpass_filter,
};
pub use roll_detector::{RollDetector, RollDetectorConfig, RollState, TriggerPolicy, roll_detector};
pub use state::Resettable;

/// Per-sample data passed through the roll sensing stages.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame {
    /// Calibrated, rectified axis magnitude in sensor counts
    pub magnitude: f32,
    /// Low-pass filtered magnitude
    pub filtered: f32,
    /// Roll detection flag
    pub roll_detected: bool,
    /// Sample sequence number
    pub seq: u64,
}

impl Frame {
    /// Frame carrying only an input magnitude.
    pub fn from_magnitude(magnitude: f32) -> Self {
        Self {
            magnitude,
            ..Self::default()
        }
    }
}
