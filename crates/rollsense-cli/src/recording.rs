//! Recorded sample files and sensor configuration files.

use rollsense_sensor::{AxisSample, RollSensorConfig, SampleSource};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Sample source backed by a CSV recording with an `x,y` header.
pub struct CsvSource<R> {
    records: csv::DeserializeRecordsIntoIter<R, AxisSample>,
}

impl CsvSource<File> {
    /// Open a recording on disk.
    pub fn open(path: &Path) -> Result<Self, CliError> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(path)?;
        Ok(Self {
            records: reader.into_deserialize(),
        })
    }
}

impl<R: Read> CsvSource<R> {
    /// Read a recording from any reader.
    #[cfg(test)]
    pub fn from_reader(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);
        Self {
            records: reader.into_deserialize(),
        }
    }
}

impl<R: Read> SampleSource for CsvSource<R> {
    type Error = csv::Error;

    fn next_sample(&mut self) -> Result<Option<AxisSample>, Self::Error> {
        self.records.next().transpose()
    }
}

/// Load a sensor configuration, picking the format from the file extension.
pub fn load_config(path: &Path) -> Result<RollSensorConfig, CliError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    let config: RollSensorConfig = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        _ => return Err(CliError::UnsupportedFormat(extension)),
    };

    tracing::debug!(path = %path.display(), ?config, "Loaded sensor configuration");
    Ok(config)
}
