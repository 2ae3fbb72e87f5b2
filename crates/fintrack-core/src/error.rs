use fintrack_domain::{ParseError, TransactionId};
use thiserror::Error;

use crate::input::Field;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate transaction id: {0}")]
    DuplicateId(TransactionId),
    #[error("No transaction id available after {0}")]
    IdOverflow(TransactionId),
}

/// Reasons a draft transaction is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(f64),
    #[error("unknown transaction type `{0}`")]
    UnknownKind(String),
    #[error("unknown time window `{0}`")]
    UnknownWindow(String),
}

impl From<ParseError> for InputError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownKind(value) => InputError::UnknownKind(value),
            ParseError::UnknownWindow(value) => InputError::UnknownWindow(value),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serde(err.to_string())
    }
}
