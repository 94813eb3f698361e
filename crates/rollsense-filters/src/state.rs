//! Stage State Types
//!
//! This module aggregates the per-stage state types and the common reset
//! interface used by the sensing session.

pub use crate::lowpass::{FilterState, LowPassFilter};
pub use crate::roll_detector::RollDetector;

/// Common reset operation for pipeline stages.
///
/// Resetting returns a stage to its power-on state while keeping its
/// configuration.
pub trait Resettable: Copy + Clone + std::fmt::Debug {
    /// Reset the stage state to initial values.
    fn reset_state(&mut self);
}

impl Resettable for LowPassFilter {
    fn reset_state(&mut self) {
        self.restore_state(FilterState::default());
    }
}

impl Resettable for RollDetector {
    fn reset_state(&mut self) {
        self.reset();
    }
}
