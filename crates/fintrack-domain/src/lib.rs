//! fintrack-domain
//!
//! Pure domain models (Transaction, TransactionKind, TimeWindow).
//! No I/O, no storage. Only data types, core enums and their wire format.

pub mod common;
pub mod timestamp;
pub mod transaction;
pub mod window;

pub use common::*;
pub use transaction::*;
pub use window::*;
