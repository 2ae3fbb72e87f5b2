//! fintrack-core
//!
//! Business logic for the finance tracker: the transaction store and the pure
//! derivations (balance, time filtering, category aggregation) computed from it.
//! Depends on fintrack-domain. No terminal I/O; persistence goes through the
//! [`storage`] traits so any backend can be injected.

pub mod aggregate;
pub mod balance;
pub mod error;
pub mod filter;
pub mod format;
pub mod input;
pub mod storage;
pub mod store;
pub mod summary_service;
pub mod time;

pub use aggregate::*;
pub use balance::*;
pub use error::{CoreError, InputError};
pub use filter::*;
pub use format::*;
pub use input::*;
pub use store::*;
pub use summary_service::*;
pub use time::*;
