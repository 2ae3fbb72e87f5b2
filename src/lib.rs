#![doc(test(attr(deny(warnings))))]

//! fintrack records income and expense transactions, keeps them in a single
//! local key-value store and derives the running balance, time-windowed
//! transaction lists and per-category expense breakdowns from them.
//!
//! The [`Tracker`] facade wires configuration, JSON-file storage and the
//! transaction store together; the member crates can also be used directly.

pub mod errors;
pub mod tracker;
pub mod utils;

pub use errors::TrackerError;
pub use tracker::Tracker;

pub use fintrack_config;
pub use fintrack_core;
pub use fintrack_domain;
pub use fintrack_storage_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default directive and emits a startup log.
pub fn init() {
    init_with_directive(&fintrack_config::Config::default_log_directive());
}

/// Like [`init`], with an explicit fallback directive used when `RUST_LOG` is unset.
pub fn init_with_directive(directive: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("fintrack tracing initialized.");
    });
}
