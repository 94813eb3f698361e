//! Roll Sensing Session
//!
//! Wraps the [`rollsense_filters`] signal path into a session that accepts
//! raw two-axis accelerometer samples. Each sample is reduced to the
//! absolute deviation of the monitored axis from its calibrated centre
//! point, low-pass filtered and fed to the roll detector.
//!
//! # Overview
//!
//! - **Axis front-end**: axis selection and centre-point calibration
//! - **Session**: one filter and one detector per monitored axis
//! - **Sources**: pull samples from a device or a recording
//!
//! # Example
//!
//! ```
//! use rollsense_sensor::prelude::*;
//!
//! let config = RollSensorConfig::default().with_thresholds(40, 8);
//! let mut sensor = RollSensor::new(config)?;
//! let mut source = ReplaySource::new(std::iter::repeat_n(AxisSample::new(75, 3), 100));
//!
//! while let Some(reading) = sensor.poll(&mut source)? {
//!     if reading.state.is_detected() {
//!         break;
//!     }
//! }
//!
//! assert!(sensor.is_rolling_detected());
//! # Ok::<(), SensorError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod axis;
pub mod config;
pub mod error;
pub mod prelude;
pub mod sensor;
pub mod source;

pub use axis::{Axis, AxisSample};
pub use config::{RollSensorConfig, SAMPLE_PERIOD};
pub use error::{SensorError, SensorResult};
pub use sensor::{RollReading, RollSensor};
pub use source::{ReplaySource, SampleSource};

pub use rollsense_filters::{RollDetectorConfig, RollState};
