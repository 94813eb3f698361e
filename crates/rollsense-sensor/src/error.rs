//! Error types for the roll sensing session.

use rollsense_filters::{DetectorError, FilterError};
use thiserror::Error;

/// Errors that can occur while building or driving a [`RollSensor`](crate::RollSensor).
#[derive(Debug, Error)]
pub enum SensorError {
    /// Low-pass filter rejected its configuration or could not reset.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Roll detector rejected its configuration.
    #[error("Detector error: {0}")]
    Detector(#[from] DetectorError),

    /// The sample source failed to deliver a sample.
    #[error("Sample source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SensorError {
    /// Wrap a sample source error.
    #[must_use]
    pub fn source_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }

    /// True for errors caused by the sensor configuration rather than the
    /// sample source or a reset precondition.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SensorError::Detector(_)
                | SensorError::Filter(
                    FilterError::InvalidSampleRate(_)
                        | FilterError::InvalidCutoff(_)
                        | FilterError::CutoffAboveNyquist { .. }
                )
        )
    }
}

/// A specialized `Result` type for sensor operations.
pub type SensorResult<T> = std::result::Result<T, SensorError>;
