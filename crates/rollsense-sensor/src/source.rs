//! Sample sources.
//!
//! The hardware side (bus setup, register reads, periodic scheduling) lives
//! outside this crate. It is modelled as a [`SampleSource`] that yields one
//! raw sample per sampling period.

use crate::axis::AxisSample;
use std::convert::Infallible;

/// Producer of raw accelerometer samples.
pub trait SampleSource {
    /// Error reported by the underlying device or recording.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Next sample, or `None` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Implementation specific.
    fn next_sample(&mut self) -> Result<Option<AxisSample>, Self::Error>;
}

/// Replays samples from memory.
///
/// # Example
///
/// ```
/// use rollsense_sensor::{AxisSample, ReplaySource, SampleSource};
///
/// let mut source = ReplaySource::new([AxisSample::new(1, 2)]);
/// assert_eq!(source.next_sample(), Ok(Some(AxisSample::new(1, 2))));
/// assert_eq!(source.next_sample(), Ok(None));
/// ```
#[derive(Debug, Clone)]
pub struct ReplaySource<I> {
    samples: I,
}

impl<I: Iterator<Item = AxisSample>> ReplaySource<I> {
    /// Replay `samples` in order.
    pub fn new(samples: impl IntoIterator<Item = AxisSample, IntoIter = I>) -> Self {
        Self {
            samples: samples.into_iter(),
        }
    }
}

impl<I: Iterator<Item = AxisSample>> SampleSource for ReplaySource<I> {
    type Error = Infallible;

    fn next_sample(&mut self) -> Result<Option<AxisSample>, Self::Error> {
        Ok(self.samples.next())
    }
}
