//! Axis selection and centre-point calibration.
//!
//! The accelerometer reports signed X and Y counts. One axis is monitored;
//! its configured centre point is subtracted and the absolute deviation is
//! what the filter sees.

use serde::{Deserialize, Serialize};

/// Accelerometer axis that is monitored for roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis
    #[default]
    X,
    /// Y axis
    Y,
}

/// One raw accelerometer reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSample {
    /// Raw X axis counts
    pub x: i32,
    /// Raw Y axis counts
    pub y: i32,
}

impl AxisSample {
    /// Create a sample from raw X/Y counts.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Raw counts of the selected axis.
    pub fn select(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Absolute deviation of the selected axis from `center_point`.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsense_sensor::{Axis, AxisSample};
    ///
    /// let sample = AxisSample::new(-20, 7);
    /// assert_eq!(sample.deviation(Axis::X, 4), 24);
    /// assert_eq!(sample.deviation(Axis::Y, 4), 3);
    /// ```
    pub fn deviation(&self, axis: Axis, center_point: i32) -> u32 {
        self.select(axis).saturating_sub(center_point).unsigned_abs()
    }
}
