//! Roll Detection State Machine
//!
//! This module turns the filtered axis magnitude into a stable roll/no-roll
//! decision. A hysteresis band between the trigger and release thresholds
//! prevents chatter, and an optional dwell time requires the trigger to be
//! exceeded for several consecutive samples before a roll is reported.

use crate::Frame;
use crate::error::{DetectorError, DetectorResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Output of the roll detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollState {
    /// Magnitude has not exceeded the trigger (or has fallen below release).
    #[default]
    NotDetected,
    /// Magnitude exceeded the trigger and has not yet fallen below release.
    Detected,
}

impl RollState {
    /// True for [`RollState::Detected`].
    pub fn is_detected(self) -> bool {
        matches!(self, RollState::Detected)
    }
}

/// How a rising edge is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Detect on the first sample above the trigger.
    Immediate,
    /// Detect once more than `trigger_time` consecutive samples are above the
    /// trigger.
    Debounced {
        /// Dwell threshold in samples.
        trigger_time: NonZeroU32,
    },
}

impl TriggerPolicy {
    /// `0` selects [`Immediate`](Self::Immediate), anything else
    /// [`Debounced`](Self::Debounced).
    pub fn from_trigger_time(trigger_time: u32) -> Self {
        match NonZeroU32::new(trigger_time) {
            Some(trigger_time) => TriggerPolicy::Debounced { trigger_time },
            None => TriggerPolicy::Immediate,
        }
    }
}

/// Roll detector thresholds, in sensor counts and samples.
///
/// # Example
///
/// ```
/// use rollsense_filters::RollDetectorConfig;
///
/// let config = RollDetectorConfig::new(50, 10).with_trigger_time(3);
/// assert_eq!(config.release_threshold()?, 40);
/// # Ok::<(), rollsense_filters::DetectorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollDetectorConfig {
    /// Magnitude that must be exceeded to detect a roll.
    pub diff_trigger: u32,
    /// Width of the band below `diff_trigger` in which a detected roll is held.
    pub hysteresis: u32,
    /// Consecutive samples above the trigger required before detection; `0`
    /// detects immediately.
    pub trigger_time: u32,
}

impl RollDetectorConfig {
    /// Immediate-policy configuration.
    pub fn new(diff_trigger: u32, hysteresis: u32) -> Self {
        Self {
            diff_trigger,
            hysteresis,
            trigger_time: 0,
        }
    }

    /// Set the dwell time in samples.
    ///
    /// `u32::MAX` can never be exceeded by the saturating dwell counter and
    /// is rejected by [`validate`](Self::validate).
    pub fn with_trigger_time(mut self, trigger_time: u32) -> Self {
        self.trigger_time = trigger_time;
        self
    }

    /// Threshold below which a detected roll is released.
    ///
    /// # Errors
    ///
    /// [`DetectorError::HysteresisExceedsTrigger`] when `hysteresis > diff_trigger`.
    pub fn release_threshold(&self) -> DetectorResult<u32> {
        self.diff_trigger.checked_sub(self.hysteresis).ok_or(
            DetectorError::HysteresisExceedsTrigger {
                diff_trigger: self.diff_trigger,
                hysteresis: self.hysteresis,
            },
        )
    }

    /// Check the configuration without building a detector.
    ///
    /// # Errors
    ///
    /// [`DetectorError::HysteresisExceedsTrigger`] as for
    /// [`release_threshold`](Self::release_threshold), and
    /// [`DetectorError::TriggerTimeUnreachable`] for `trigger_time == u32::MAX`.
    pub fn validate(&self) -> DetectorResult<()> {
        if self.trigger_time == u32::MAX {
            return Err(DetectorError::TriggerTimeUnreachable {
                trigger_time: self.trigger_time,
            });
        }
        self.release_threshold().map(|_| ())
    }

    /// Rising-edge policy selected by `trigger_time`.
    pub fn policy(&self) -> TriggerPolicy {
        TriggerPolicy::from_trigger_time(self.trigger_time)
    }
}

impl Default for RollDetectorConfig {
    fn default() -> Self {
        Self::new(50, 10)
    }
}

/// Two-state roll detector with hysteresis and optional dwell time.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[derive(Copy, Clone, Debug)]
pub struct RollDetector {
    config: RollDetectorConfig,
    policy: TriggerPolicy,
    // f64 holds every u32 threshold exactly.
    trigger_level: f64,
    release_level: f64,
    state: RollState,
    dwell_counter: u32,
}

impl RollDetector {
    /// Create a detector in [`RollState::NotDetected`].
    ///
    /// # Errors
    ///
    /// [`DetectorError::HysteresisExceedsTrigger`] when the release threshold
    /// would be negative, [`DetectorError::TriggerTimeUnreachable`] when the
    /// dwell time can never elapse.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsense_filters::{RollDetector, RollDetectorConfig, RollState};
    ///
    /// let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10))?;
    /// assert_eq!(detector.update(51.0), RollState::Detected);
    /// assert_eq!(detector.update(45.0), RollState::Detected);
    /// assert_eq!(detector.update(39.0), RollState::NotDetected);
    /// # Ok::<(), rollsense_filters::DetectorError>(())
    /// ```
    pub fn new(config: RollDetectorConfig) -> DetectorResult<Self> {
        config.validate()?;
        let release_threshold = config.release_threshold()?;
        Ok(Self {
            config,
            policy: config.policy(),
            trigger_level: f64::from(config.diff_trigger),
            release_level: f64::from(release_threshold),
            state: RollState::NotDetected,
            dwell_counter: 0,
        })
    }

    /// Feed one filtered magnitude and return the (possibly new) state.
    ///
    /// At most one transition happens per call. NaN never triggers and never
    /// releases.
    #[inline]
    pub fn update(&mut self, value: f32) -> RollState {
        match self.state {
            RollState::NotDetected => {
                let above_trigger = f64::from(value) > self.trigger_level;
                match self.policy {
                    TriggerPolicy::Immediate => {
                        if above_trigger {
                            self.state = RollState::Detected;
                        }
                    }
                    TriggerPolicy::Debounced { trigger_time } => {
                        self.dwell_counter = if above_trigger {
                            self.dwell_counter.saturating_add(1)
                        } else {
                            0
                        };

                        if self.dwell_counter > trigger_time.get() {
                            self.dwell_counter = 0;
                            self.state = RollState::Detected;
                        }
                    }
                }
            }
            RollState::Detected => {
                if f64::from(value) < self.release_level {
                    self.state = RollState::NotDetected;
                    self.dwell_counter = 0;
                }
            }
        }

        self.state
    }

    /// Return to [`RollState::NotDetected`] with a cleared dwell counter.
    pub fn reset(&mut self) {
        self.state = RollState::NotDetected;
        self.dwell_counter = 0;
    }

    /// Current state.
    pub fn state(&self) -> RollState {
        self.state
    }

    /// Shorthand for `state().is_detected()`.
    pub fn is_detected(&self) -> bool {
        self.state.is_detected()
    }

    /// Consecutive samples above the trigger seen while not detected.
    pub fn dwell_counter(&self) -> u32 {
        self.dwell_counter
    }

    /// Configuration the detector was built with.
    pub fn config(&self) -> RollDetectorConfig {
        self.config
    }

    /// Rising-edge policy in effect.
    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }
}

/// Roll detector stage: sets `frame.roll_detected` from `frame.filtered`.
///
/// Only the integer part of the filtered magnitude is compared, since the
/// sensor reports whole counts.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
/// - No syscalls or I/O
#[inline]
pub fn roll_detector(frame: &mut Frame, detector: &mut RollDetector) {
    frame.roll_detected = detector.update(frame.filtered.trunc()).is_detected();
}
