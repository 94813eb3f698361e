//! Second-Order Low-Pass Filter (Biquad Implementation)
//!
//! This module provides the Butterworth low-pass filter that removes sensor
//! and vibration noise from the rectified accelerometer axis before roll
//! detection.

use crate::Frame;
use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_1_SQRT_2, PI};

/// Default accelerometer sample frequency (Hz).
pub const DEFAULT_SAMPLE_FREQ_HZ: f32 = 100.0;

/// Default low-pass cutoff frequency (Hz).
pub const DEFAULT_CUTOFF_FREQ_HZ: f32 = 5.0;

/// `cos(π/4)`, the damping term of the second-order Butterworth design.
///
/// Fixes the quality factor at `1 / (2·cos(π/4))`.
pub const BUTTERWORTH_DAMPING: f32 = FRAC_1_SQRT_2;

/// Normalised biquad coefficients (`a0 == 1`).
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - Plain `Copy` data, no heap allocations
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterCoefficients {
    /// Numerator coefficient b0
    pub b0: f32,
    /// Numerator coefficient b1
    pub b1: f32,
    /// Numerator coefficient b2
    pub b2: f32,
    /// Denominator coefficient a1
    pub a1: f32,
    /// Denominator coefficient a2
    pub a2: f32,
}

impl FilterCoefficients {
    /// Design a Butterworth low-pass via the bilinear transform.
    ///
    /// The caller is responsible for `0 < cutoff_freq_hz < sample_freq_hz / 2`;
    /// [`LowPassFilter::set_cutoff_frequency`] checks this before calling.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsense_filters::FilterCoefficients;
    ///
    /// let coeffs = FilterCoefficients::butterworth(100.0, 5.0);
    /// assert!((coeffs.dc_gain() - 1.0).abs() < 1e-4);
    /// ```
    pub fn butterworth(sample_freq_hz: f32, cutoff_freq_hz: f32) -> Self {
        let fr = sample_freq_hz / cutoff_freq_hz;
        let ohm = (PI / fr).tan();
        let ohm_sq = ohm * ohm;
        let c = 1.0 + 2.0 * BUTTERWORTH_DAMPING * ohm + ohm_sq;

        let b0 = ohm_sq / c;
        Self {
            b0,
            b1: 2.0 * b0,
            b2: b0,
            a1: 2.0 * (ohm_sq - 1.0) / c,
            a2: (1.0 - 2.0 * BUTTERWORTH_DAMPING * ohm + ohm_sq) / c,
        }
    }

    /// Identity coefficients (`b0 = 1`, everything else zero).
    pub fn passthrough() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }

    /// Sum of the numerator coefficients, `b0 + b1 + b2`.
    pub fn numerator_gain(&self) -> f32 {
        self.b0 + self.b1 + self.b2
    }

    /// Gain at 0 Hz.
    pub fn dc_gain(&self) -> f32 {
        self.numerator_gain() / (1.0 + self.a1 + self.a2)
    }

    /// Check that both poles lie strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        self.a2.abs() < 1.0 && self.a1.abs() < 1.0 + self.a2
    }
}

/// Delay line of the filter: the two most recent pre-output values.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    /// Buffered value from the previous sample
    pub delay_element_1: f32,
    /// Buffered value from two samples ago
    pub delay_element_2: f32,
}

impl FilterState {
    /// Both delay elements set to `value`.
    pub fn steady(value: f32) -> Self {
        Self {
            delay_element_1: value,
            delay_element_2: value,
        }
    }

    /// True when both delay elements are finite.
    pub fn is_finite(&self) -> bool {
        self.delay_element_1.is_finite() && self.delay_element_2.is_finite()
    }
}

/// Second-order Butterworth low-pass filter.
///
/// A non-positive cutoff frequency puts the filter in bypass mode, where
/// [`apply`](Self::apply) returns its input untouched. Reconfiguring the
/// filter changes the transfer function for the next sample but keeps the
/// delay elements.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
#[derive(Copy, Clone, Debug)]
pub struct LowPassFilter {
    sample_freq_hz: f32,
    cutoff_freq_hz: f32,
    coefficients: FilterCoefficients,
    state: FilterState,
}

impl LowPassFilter {
    /// Create a filter for the given sample and cutoff frequency.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the sample frequency is not finite and
    /// positive, or a positive cutoff is not finite or not below Nyquist.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsense_filters::LowPassFilter;
    ///
    /// let filter = LowPassFilter::new(100.0, 5.0)?;
    /// assert!(!filter.is_bypassed());
    /// # Ok::<(), rollsense_filters::FilterError>(())
    /// ```
    pub fn new(sample_freq_hz: f32, cutoff_freq_hz: f32) -> FilterResult<Self> {
        let mut filter = Self::bypass();
        filter.set_cutoff_frequency(sample_freq_hz, cutoff_freq_hz)?;
        Ok(filter)
    }

    /// Create a bypass filter (no filtering).
    pub fn bypass() -> Self {
        Self {
            sample_freq_hz: DEFAULT_SAMPLE_FREQ_HZ,
            cutoff_freq_hz: 0.0,
            coefficients: FilterCoefficients::passthrough(),
            state: FilterState::default(),
        }
    }

    /// Change filter parameters.
    ///
    /// A cutoff of zero or below selects bypass mode and keeps the previous
    /// coefficients around unused. The delay elements are never touched.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](Self::new). On error the filter is left
    /// unchanged.
    pub fn set_cutoff_frequency(
        &mut self,
        sample_freq_hz: f32,
        cutoff_freq_hz: f32,
    ) -> FilterResult<()> {
        if !sample_freq_hz.is_finite() || sample_freq_hz <= 0.0 {
            return Err(FilterError::InvalidSampleRate(sample_freq_hz));
        }
        if cutoff_freq_hz.is_nan() {
            return Err(FilterError::InvalidCutoff(cutoff_freq_hz));
        }

        if cutoff_freq_hz > 0.0 {
            if !cutoff_freq_hz.is_finite() {
                return Err(FilterError::InvalidCutoff(cutoff_freq_hz));
            }
            let nyquist_hz = sample_freq_hz / 2.0;
            if cutoff_freq_hz >= nyquist_hz {
                return Err(FilterError::CutoffAboveNyquist {
                    cutoff_hz: cutoff_freq_hz,
                    nyquist_hz,
                });
            }
            self.coefficients = FilterCoefficients::butterworth(sample_freq_hz, cutoff_freq_hz);
        }

        self.sample_freq_hz = sample_freq_hz;
        self.cutoff_freq_hz = cutoff_freq_hz;
        Ok(())
    }

    /// Add a new raw value to the filter and return the filtered result.
    ///
    /// A non-finite intermediate value flushes the whole delay line to the
    /// raw sample, so a corrupted state is gone after one call.
    #[inline]
    pub fn apply(&mut self, sample: f32) -> f32 {
        if self.is_bypassed() {
            return sample;
        }

        let c = &self.coefficients;
        let s = &mut self.state;

        let mut delay_element_0 = sample - s.delay_element_1 * c.a1 - s.delay_element_2 * c.a2;
        if !delay_element_0.is_finite() {
            delay_element_0 = sample;
            *s = FilterState::steady(sample);
        }

        let output = delay_element_0 * c.b0 + s.delay_element_1 * c.b1 + s.delay_element_2 * c.b2;

        s.delay_element_2 = s.delay_element_1;
        s.delay_element_1 = delay_element_0;

        output
    }

    /// Reset the delay line to the steady state that outputs `sample`, then
    /// filter `sample` once and return the result.
    ///
    /// # Errors
    ///
    /// [`FilterError::Bypassed`] in bypass mode and
    /// [`FilterError::DegenerateGain`] when `b0 + b1 + b2` is zero or not
    /// finite. The delay line is untouched on error.
    pub fn reset(&mut self, sample: f32) -> FilterResult<f32> {
        if self.is_bypassed() {
            return Err(FilterError::Bypassed);
        }

        let gain = self.coefficients.numerator_gain();
        if !gain.is_normal() {
            return Err(FilterError::DegenerateGain(gain));
        }

        self.state = FilterState::steady(sample / gain);
        Ok(self.apply(sample))
    }

    /// True when the cutoff frequency is zero or negative.
    #[inline]
    pub fn is_bypassed(&self) -> bool {
        self.cutoff_freq_hz <= 0.0
    }

    /// Active coefficients, or `None` in bypass mode.
    pub fn coefficients(&self) -> Option<FilterCoefficients> {
        if self.is_bypassed() {
            None
        } else {
            Some(self.coefficients)
        }
    }

    /// Current delay line.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Overwrite the delay line.
    pub fn restore_state(&mut self, state: FilterState) {
        self.state = state;
    }

    /// Configured sample frequency (Hz).
    pub fn sample_freq_hz(&self) -> f32 {
        self.sample_freq_hz
    }

    /// Configured cutoff frequency (Hz); zero or negative means bypass.
    pub fn cutoff_freq_hz(&self) -> f32 {
        self.cutoff_freq_hz
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::bypass()
    }
}

/// Low-pass filter stage: filters `frame.magnitude` into `frame.filtered`.
///
/// # RT Safety
///
/// - No heap allocations
/// - O(1) time complexity
/// - Bounded execution time
/// - No syscalls or I/O
///
/// # Example
///
/// ```
/// use rollsense_filters::prelude::*;
///
/// let mut filter = LowPassFilter::new(100.0, 5.0)?;
/// let mut frame = Frame::from_magnitude(12.0);
///
/// lowpass_filter(&mut frame, &mut filter);
/// assert!(frame.filtered.is_finite());
/// # Ok::<(), rollsense_filters::FilterError>(())
/// ```
#[inline]
pub fn lowpass_filter(frame: &mut Frame, filter: &mut LowPassFilter) {
    frame.filtered = filter.apply(frame.magnitude);
}
