//! Domain models for recorded income and expense events.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        kind: TransactionKind,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category: category.into(),
            kind,
            date,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the sign it contributes to the balance.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{} - ${:.2} ({}) - {}",
            self.description, self.amount, self.category, self.kind
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
/// Direction of a transaction relative to the balance.
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ParseError::UnknownKind(value.to_string())),
        }
    }
}
