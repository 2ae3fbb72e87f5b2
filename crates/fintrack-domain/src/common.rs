//! Shared traits and errors for finance primitives.

use thiserror::Error;

/// Identifier assigned to a transaction at creation, in epoch milliseconds.
pub type TransactionId = i64;

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Raised when selector text does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown transaction type `{0}` (expected income or expense)")]
    UnknownKind(String),
    #[error("unknown time window `{0}` (expected all, daily, weekly or monthly)")]
    UnknownWindow(String),
}
