//! Error types for filter configuration and detector construction.
//!
//! Nothing in the per-sample hot path returns these errors. They are raised
//! when a filter or detector is (re)configured, or when the filter is asked
//! to reset while it cannot produce a meaningful steady state.

use thiserror::Error;

/// Errors raised while configuring or resetting a [`LowPassFilter`](crate::LowPassFilter).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
    /// Sample frequency must be finite and strictly positive.
    #[error("Invalid sample frequency: {0} Hz")]
    InvalidSampleRate(f32),

    /// Cutoff frequency is NaN or infinite.
    #[error("Invalid cutoff frequency: {0} Hz")]
    InvalidCutoff(f32),

    /// Cutoff frequency is at or above the Nyquist frequency.
    #[error("Cutoff frequency {cutoff_hz} Hz is not below Nyquist ({nyquist_hz} Hz)")]
    CutoffAboveNyquist {
        /// Requested cutoff frequency.
        cutoff_hz: f32,
        /// Half of the sample frequency.
        nyquist_hz: f32,
    },

    /// The filter is in bypass mode, so it has no steady state to reset to.
    #[error("Filter is bypassed; reset requires a positive cutoff frequency")]
    Bypassed,

    /// The numerator gain `b0 + b1 + b2` is zero or not finite.
    #[error("Degenerate filter gain: b0 + b1 + b2 = {0}")]
    DegenerateGain(f32),
}

/// Errors raised while constructing a [`RollDetector`](crate::RollDetector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DetectorError {
    /// The release threshold `diff_trigger - hysteresis` would be negative.
    #[error("Hysteresis {hysteresis} exceeds diff trigger {diff_trigger}")]
    HysteresisExceedsTrigger {
        /// Configured trigger threshold.
        diff_trigger: u32,
        /// Configured hysteresis band.
        hysteresis: u32,
    },

    /// The dwell counter saturates at `u32::MAX` and can never exceed it.
    #[error("Trigger time {trigger_time} can never be reached")]
    TriggerTimeUnreachable {
        /// Configured dwell time in samples.
        trigger_time: u32,
    },
}

/// A specialized `Result` type for filter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// A specialized `Result` type for detector construction.
pub type DetectorResult<T> = std::result::Result<T, DetectorError>;
