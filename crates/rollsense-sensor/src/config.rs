//! Roll sensor configuration.
//!
//! All fields are supplied at construction time. Missing fields take the
//! defaults of the reference hardware: X axis, centre point 0, 100 Hz
//! sampling, 5 Hz cutoff, trigger 50, hysteresis 10, immediate detection.

use crate::axis::Axis;
use crate::error::SensorResult;
use rollsense_filters::{
    DEFAULT_CUTOFF_FREQ_HZ, DEFAULT_SAMPLE_FREQ_HZ, LowPassFilter, RollDetector,
    RollDetectorConfig,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Nominal sampling period at the default sample frequency.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(10);

/// Configuration of one roll sensing session.
///
/// # Example
///
/// ```
/// use rollsense_sensor::{Axis, RollSensorConfig};
///
/// let config = RollSensorConfig {
///     axis: Axis::Y,
///     center_point: -3,
///     ..RollSensorConfig::default()
/// }
/// .with_thresholds(40, 8)
/// .with_trigger_time(5);
///
/// config.validate()?;
/// # Ok::<(), rollsense_sensor::SensorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollSensorConfig {
    /// Monitored axis
    pub axis: Axis,
    /// Raw reading of the monitored axis when level
    pub center_point: i32,
    /// Sample frequency in Hz
    pub sample_freq_hz: f32,
    /// Low-pass cutoff frequency in Hz; zero or negative disables filtering
    pub cutoff_freq_hz: f32,
    /// Detector thresholds
    #[serde(flatten)]
    pub detector: RollDetectorConfig,
}

impl Default for RollSensorConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            center_point: 0,
            sample_freq_hz: DEFAULT_SAMPLE_FREQ_HZ,
            cutoff_freq_hz: DEFAULT_CUTOFF_FREQ_HZ,
            detector: RollDetectorConfig::default(),
        }
    }
}

impl RollSensorConfig {
    /// Set trigger and hysteresis thresholds.
    pub fn with_thresholds(mut self, diff_trigger: u32, hysteresis: u32) -> Self {
        self.detector.diff_trigger = diff_trigger;
        self.detector.hysteresis = hysteresis;
        self
    }

    /// Set the detector dwell time in samples.
    pub fn with_trigger_time(mut self, trigger_time: u32) -> Self {
        self.detector.trigger_time = trigger_time;
        self
    }

    /// Set the low-pass cutoff frequency.
    pub fn with_cutoff(mut self, cutoff_freq_hz: f32) -> Self {
        self.cutoff_freq_hz = cutoff_freq_hz;
        self
    }

    /// Check the configuration without building a session.
    ///
    /// # Errors
    ///
    /// Returns the filter or detector error the session constructor would
    /// return.
    pub fn validate(&self) -> SensorResult<()> {
        self.build_stages().map(|_| ())
    }

    pub(crate) fn build_stages(&self) -> SensorResult<(LowPassFilter, RollDetector)> {
        let filter = LowPassFilter::new(self.sample_freq_hz, self.cutoff_freq_hz)?;
        let detector = RollDetector::new(self.detector)?;
        Ok((filter, detector))
    }
}
