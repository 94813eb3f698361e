//! Error types for rollctl CLI

use rollsense_sensor::SensorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Sensor error: {0}")]
    Config(#[from] SensorError),

    #[error("Unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(e) if e.is_config_error() => 4,
            CliError::Config(SensorError::Source(e)) if is_io_source(e.as_ref()) => 2,
            CliError::UnsupportedFormat(_) | CliError::Json(_) | CliError::Yaml(_) => 4,
            CliError::Io(_) => 2,
            CliError::Csv(e) if e.is_io_error() => 2,
            _ => 1,
        }
    }
}

fn is_io_source(err: &(dyn std::error::Error + Send + Sync + 'static)) -> bool {
    if let Some(e) = err.downcast_ref::<csv::Error>() {
        return e.is_io_error();
    }
    err.is::<std::io::Error>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollsense_filters::{DetectorError, FilterError};

    #[test]
    fn test_exit_codes() {
        let config = CliError::from(SensorError::from(DetectorError::HysteresisExceedsTrigger {
            diff_trigger: 1,
            hysteresis: 2,
        }));
        assert_eq!(config.exit_code(), 4);

        let bypassed = CliError::from(SensorError::from(FilterError::Bypassed));
        assert_eq!(bypassed.exit_code(), 1);

        let io = CliError::from(std::io::Error::other("gone"));
        assert_eq!(io.exit_code(), 2);

        assert_eq!(CliError::UnsupportedFormat("toml".into()).exit_code(), 4);
    }

    #[test]
    fn test_source_exit_codes() {
        let read_failure = csv::Error::from(std::io::Error::other("disk gone"));
        let err = CliError::from(SensorError::source_error(read_failure));
        assert_eq!(err.exit_code(), 2);

        let err = CliError::from(SensorError::source_error(std::io::Error::other("eof")));
        assert_eq!(err.exit_code(), 2);

        let mut reader = csv::Reader::from_reader("x,y\none,2\n".as_bytes());
        let bad_row = reader
            .deserialize::<rollsense_sensor::AxisSample>()
            .find_map(Result::err)
            .map(SensorError::source_error);
        assert_eq!(bad_row.map(|e| CliError::from(e).exit_code()), Some(1));
    }
}
