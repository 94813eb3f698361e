//! Prelude for convenient imports.

pub use crate::axis::{Axis, AxisSample};
pub use crate::config::{RollSensorConfig, SAMPLE_PERIOD};
pub use crate::error::{SensorError, SensorResult};
pub use crate::sensor::{RollReading, RollSensor};
pub use crate::source::{ReplaySource, SampleSource};
pub use rollsense_filters::{RollDetectorConfig, RollState};
