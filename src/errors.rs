use std::result::Result as StdResult;

use fintrack_config::ConfigError;
use fintrack_core::{CoreError, InputError};
use thiserror::Error;

/// Unified error type for the configuration, core and storage layers.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(i64),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<CoreError> for TrackerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Input(input) => TrackerError::InvalidInput(input),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                TrackerError::StorageError(message)
            }
            CoreError::Io(err) => TrackerError::StorageError(err.to_string()),
            CoreError::DuplicateId(id) => TrackerError::DuplicateId(id),
            err @ CoreError::IdOverflow(_) => TrackerError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TrackerError::StorageError(io.to_string()),
            ConfigError::Serde(message) => TrackerError::ConfigError(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_core::input::Field;

    #[test]
    fn core_errors_map_onto_tracker_errors() {
        let err = TrackerError::from(CoreError::Input(InputError::MissingField(Field::Category)));
        assert_eq!(err.to_string(), "Invalid input: category is required");

        let err = TrackerError::from(CoreError::Storage("disk full".into()));
        assert!(matches!(err, TrackerError::StorageError(message) if message == "disk full"));

        let err = TrackerError::from(CoreError::IdOverflow(i64::MAX));
        assert!(matches!(err, TrackerError::StorageError(_)));

        let err = TrackerError::from(ConfigError::Serde("bad".into()));
        assert!(matches!(err, TrackerError::ConfigError(_)));
    }
}
