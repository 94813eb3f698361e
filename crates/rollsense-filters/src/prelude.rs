//! Prelude for the filters crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use rollsense_filters::prelude::*;
//!
//! let mut filter = LowPassFilter::new(100.0, 5.0)?;
//! let mut detector = RollDetector::new(RollDetectorConfig::new(50, 10))?;
//! let mut frame = Frame::from_magnitude(60.0);
//!
//! lowpass_filter(&mut frame, &mut filter);
//! roll_detector(&mut frame, &mut detector);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use crate::Frame;
pub use crate::error::{DetectorError, DetectorResult, FilterError, FilterResult};
pub use crate::lowpass::{FilterCoefficients, FilterState, LowPassFilter, lowpass_filter};
pub use crate::roll_detector::{
    RollDetector, RollDetectorConfig, RollState, TriggerPolicy, roll_detector,
};
pub use crate::state::Resettable;
