//! fintrack-config
//!
//! Persistent tracker settings: where data lives, which storage key holds the
//! transactions, the initial time window and the default log directive.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
