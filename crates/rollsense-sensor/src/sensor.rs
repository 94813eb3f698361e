//! Roll sensing session.
//!
//! A [`RollSensor`] owns one low-pass filter and one roll detector and runs
//! them once per raw sample. Independent axes or devices use independent
//! sessions; nothing is shared between them.

use crate::axis::{Axis, AxisSample};
use crate::config::RollSensorConfig;
use crate::error::{SensorError, SensorResult};
use crate::source::SampleSource;
use rollsense_filters::{
    Frame, LowPassFilter, Resettable, RollDetector, RollState, lowpass_filter, roll_detector,
};
use serde::{Deserialize, Serialize};

/// Result of processing one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollReading {
    /// Sample sequence number within the session
    pub seq: u64,
    /// Raw X axis counts
    pub x: i32,
    /// Raw Y axis counts
    pub y: i32,
    /// Absolute deviation of the monitored axis from its centre point
    pub magnitude: u32,
    /// Low-pass filtered magnitude
    pub filtered: f32,
    /// Filtered magnitude truncated to whole counts
    pub monitored_axis: i32,
    /// Roll state after this sample
    pub state: RollState,
}

/// One roll sensing session.
///
/// # Example
///
/// ```
/// use rollsense_sensor::{AxisSample, RollSensor, RollSensorConfig};
///
/// let mut sensor = RollSensor::new(RollSensorConfig::default())?;
/// for _ in 0..100 {
///     sensor.process(AxisSample::new(90, 0));
/// }
/// assert!(sensor.is_rolling_detected());
/// # Ok::<(), rollsense_sensor::SensorError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollSensor {
    config: RollSensorConfig,
    filter: LowPassFilter,
    detector: RollDetector,
    seq: u64,
    last: Option<RollReading>,
}

impl RollSensor {
    /// Build a session from `config`.
    ///
    /// # Errors
    ///
    /// [`SensorError::Filter`] or [`SensorError::Detector`] for an invalid
    /// configuration.
    pub fn new(config: RollSensorConfig) -> SensorResult<Self> {
        let (filter, detector) = config.build_stages()?;

        tracing::debug!(
            axis = ?config.axis,
            center_point = config.center_point,
            sample_freq_hz = config.sample_freq_hz,
            cutoff_freq_hz = config.cutoff_freq_hz,
            diff_trigger = config.detector.diff_trigger,
            hysteresis = config.detector.hysteresis,
            trigger_time = config.detector.trigger_time,
            "Roll sensor configured"
        );

        Ok(Self {
            config,
            filter,
            detector,
            seq: 0,
            last: None,
        })
    }

    /// Run one raw sample through calibration, filter and detector.
    pub fn process(&mut self, sample: AxisSample) -> RollReading {
        let magnitude = sample.deviation(self.config.axis, self.config.center_point);
        let mut frame = Frame {
            magnitude: magnitude as f32,
            seq: self.seq,
            ..Frame::default()
        };

        lowpass_filter(&mut frame, &mut self.filter);
        self.detect(sample, magnitude, frame)
    }

    /// Seed the filter with `sample` so it starts in steady state instead of
    /// ramping up from zero, then run the detector on the result.
    ///
    /// # Errors
    ///
    /// [`SensorError::Filter`] when the filter is bypassed. The session is
    /// left unchanged in that case.
    pub fn prime(&mut self, sample: AxisSample) -> SensorResult<RollReading> {
        let magnitude = sample.deviation(self.config.axis, self.config.center_point);
        let filtered = self.filter.reset(magnitude as f32).map_err(|err| {
            tracing::warn!(error = %err, "Cannot prime roll sensor filter");
            SensorError::from(err)
        })?;

        tracing::debug!(magnitude, filtered, "Roll sensor filter primed");

        let frame = Frame {
            magnitude: magnitude as f32,
            filtered,
            seq: self.seq,
            ..Frame::default()
        };
        Ok(self.detect(sample, magnitude, frame))
    }

    /// Pull one sample from `source` and process it.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// [`SensorError::Source`] when the source fails.
    pub fn poll<S: SampleSource>(&mut self, source: &mut S) -> SensorResult<Option<RollReading>> {
        let sample = source.next_sample().map_err(SensorError::source_error)?;
        Ok(sample.map(|sample| self.process(sample)))
    }

    /// Clear filter and detector state; configuration is kept.
    pub fn reset(&mut self) {
        self.filter.reset_state();
        self.detector.reset_state();
        self.last = None;
        tracing::debug!(seq = self.seq, "Roll sensor reset");
    }

    /// Retune the low-pass cutoff. The filter's delay line is kept.
    ///
    /// # Errors
    ///
    /// [`SensorError::Filter`] for an invalid cutoff; the previous cutoff
    /// stays active.
    pub fn set_cutoff_frequency(&mut self, cutoff_freq_hz: f32) -> SensorResult<()> {
        self.filter
            .set_cutoff_frequency(self.config.sample_freq_hz, cutoff_freq_hz)?;
        self.config.cutoff_freq_hz = cutoff_freq_hz;
        tracing::debug!(cutoff_freq_hz, "Roll sensor filter retuned");
        Ok(())
    }

    fn detect(&mut self, sample: AxisSample, magnitude: u32, mut frame: Frame) -> RollReading {
        let previous = self.detector.state();
        roll_detector(&mut frame, &mut self.detector);
        let state = self.detector.state();

        if state != previous {
            tracing::info!(
                seq = frame.seq,
                axis = ?self.config.axis,
                filtered = frame.filtered,
                state = ?state,
                "Roll state changed"
            );
        }

        let reading = RollReading {
            seq: frame.seq,
            x: sample.x,
            y: sample.y,
            magnitude,
            filtered: frame.filtered,
            monitored_axis: frame.filtered as i32,
            state,
        };

        self.last = Some(reading);
        self.seq = self.seq.wrapping_add(1);
        reading
    }

    /// Current roll state.
    pub fn state(&self) -> RollState {
        self.detector.state()
    }

    /// True while a roll is detected.
    pub fn is_rolling_detected(&self) -> bool {
        self.detector.is_detected()
    }

    /// Filtered magnitude of the monitored axis, in whole counts.
    pub fn monitored_axis(&self) -> i32 {
        self.last.map_or(0, |r| r.monitored_axis)
    }

    /// Filtered magnitude of the monitored axis.
    pub fn filtered_magnitude(&self) -> f32 {
        self.last.map_or(0.0, |r| r.filtered)
    }

    /// Last raw X axis reading.
    pub fn x_axis(&self) -> i32 {
        self.last.map_or(0, |r| r.x)
    }

    /// Last raw Y axis reading.
    pub fn y_axis(&self) -> i32 {
        self.last.map_or(0, |r| r.y)
    }

    /// Most recent reading, if any sample has been processed since the last
    /// reset.
    pub fn last_reading(&self) -> Option<RollReading> {
        self.last
    }

    /// Number of samples processed by this session.
    pub fn samples_processed(&self) -> u64 {
        self.seq
    }

    /// Monitored axis.
    pub fn axis(&self) -> Axis {
        self.config.axis
    }

    /// Session configuration.
    pub fn config(&self) -> &RollSensorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReplaySource;
    use rollsense_filters::FilterError;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn sensor(config: RollSensorConfig) -> SensorResult<RollSensor> {
        RollSensor::new(config)
    }

    #[test]
    fn test_accessors_before_first_sample() -> TestResult {
        let sensor = sensor(RollSensorConfig::default())?;
        assert_eq!(sensor.state(), RollState::NotDetected);
        assert_eq!(sensor.monitored_axis(), 0);
        assert_eq!(sensor.x_axis(), 0);
        assert_eq!(sensor.y_axis(), 0);
        assert!(sensor.last_reading().is_none());
        Ok(())
    }

    #[test]
    fn test_process_selects_and_calibrates_axis() -> TestResult {
        let config = RollSensorConfig {
            axis: Axis::Y,
            center_point: 10,
            ..RollSensorConfig::default()
        }
        .with_cutoff(0.0);
        let mut sensor = sensor(config)?;

        let reading = sensor.process(AxisSample::new(100, -30));

        assert_eq!(reading.magnitude, 40);
        assert_eq!(reading.monitored_axis, 40);
        assert_eq!(sensor.x_axis(), 100);
        assert_eq!(sensor.y_axis(), -30);
        Ok(())
    }

    #[test]
    fn test_bypass_detects_on_first_sample() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default().with_cutoff(0.0))?;

        let reading = sensor.process(AxisSample::new(51, 0));

        assert_eq!(reading.state, RollState::Detected);
        assert!(sensor.is_rolling_detected());
        Ok(())
    }

    #[test]
    fn test_filter_delays_detection() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default())?;

        let first = sensor.process(AxisSample::new(90, 0));
        assert_eq!(first.state, RollState::NotDetected);
        assert!(first.filtered < 90.0);

        let mut detected_at = None;
        for _ in 0..50 {
            let reading = sensor.process(AxisSample::new(90, 0));
            if reading.state.is_detected() {
                detected_at = Some(reading.seq);
                break;
            }
        }
        assert!(detected_at.is_some());
        Ok(())
    }

    #[test]
    fn test_prime_starts_in_steady_state() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default())?;

        let reading = sensor.prime(AxisSample::new(70, 0))?;

        assert!((reading.filtered - 70.0).abs() < 0.1);
        assert_eq!(reading.state, RollState::Detected);
        assert_eq!(sensor.samples_processed(), 1);
        Ok(())
    }

    #[test]
    fn test_prime_rejected_in_bypass() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default().with_cutoff(-1.0))?;

        let result = sensor.prime(AxisSample::new(70, 0));

        assert!(matches!(result, Err(SensorError::Filter(FilterError::Bypassed))));
        assert_eq!(sensor.samples_processed(), 0);
        assert_eq!(sensor.state(), RollState::NotDetected);
        Ok(())
    }

    #[test]
    fn test_poll_until_exhausted() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default().with_cutoff(0.0))?;
        let mut source = ReplaySource::new([AxisSample::new(60, 0), AxisSample::new(0, 0)]);

        let first = sensor.poll(&mut source)?;
        assert_eq!(first.map(|r| r.state), Some(RollState::Detected));

        let second = sensor.poll(&mut source)?;
        assert_eq!(second.map(|r| r.state), Some(RollState::NotDetected));

        assert!(sensor.poll(&mut source)?.is_none());
        assert_eq!(sensor.samples_processed(), 2);
        Ok(())
    }

    #[test]
    fn test_reset_clears_state() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default())?;
        for _ in 0..100 {
            sensor.process(AxisSample::new(90, 0));
        }
        assert!(sensor.is_rolling_detected());

        sensor.reset();

        assert!(!sensor.is_rolling_detected());
        assert!(sensor.last_reading().is_none());
        let reading = sensor.process(AxisSample::new(90, 0));
        assert!(reading.filtered < 10.0, "filter should restart from zero");
        Ok(())
    }

    #[test]
    fn test_set_cutoff_frequency() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default())?;
        sensor.set_cutoff_frequency(10.0)?;
        assert!((sensor.config().cutoff_freq_hz - 10.0).abs() < f32::EPSILON);

        assert!(matches!(
            sensor.set_cutoff_frequency(75.0),
            Err(SensorError::Filter(FilterError::CutoffAboveNyquist { .. }))
        ));
        assert!((sensor.config().cutoff_freq_hz - 10.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_reading_serializes_state_snake_case() -> TestResult {
        let mut sensor = sensor(RollSensorConfig::default().with_cutoff(0.0))?;
        let reading = sensor.process(AxisSample::new(60, 0));

        let json = serde_json::to_value(reading)?;
        assert_eq!(json["state"], "detected");
        assert_eq!(json["magnitude"], 60);
        Ok(())
    }
}
