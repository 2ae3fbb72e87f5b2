//! Parse-then-validate step between raw form fields and the store.

use std::fmt;

use fintrack_domain::{TimeWindow, TransactionKind};

use crate::error::InputError;

/// Names the required text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Category => "category",
        };
        f.write_str(label)
    }
}

/// Raw, untrusted values exactly as typed into the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub kind: TransactionKind,
}

/// A draft that passed validation; fields are trimmed and the amount is a
/// finite positive number.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            kind,
        }
    }

    /// Builds a draft from form text, including the type selector value.
    pub fn from_fields(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        kind: &str,
    ) -> Result<Self, InputError> {
        let kind: TransactionKind = kind.parse()?;
        Ok(Self::new(description, amount, category, kind))
    }

    pub fn validate(&self) -> Result<ValidatedDraft, InputError> {
        let description = required(&self.description, Field::Description)?;
        let raw_amount = required(&self.amount, Field::Amount)?;
        let category = required(&self.category, Field::Category)?;
        let amount = parse_amount(raw_amount)?;
        Ok(ValidatedDraft {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            kind: self.kind,
        })
    }
}

fn required(value: &str, field: Field) -> Result<&str, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(InputError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Parses a positive amount. The whole string must be numeric; `NaN`,
/// infinities, zero and negatives are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidAmount(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::InvalidAmount(trimmed.to_string()));
    }
    if value <= 0.0 {
        return Err(InputError::NonPositiveAmount(value));
    }
    Ok(value)
}

/// Parses the time-window selector value.
pub fn parse_window(raw: &str) -> Result<TimeWindow, InputError> {
    Ok(raw.parse()?)
}
