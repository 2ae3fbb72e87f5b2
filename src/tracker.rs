use std::sync::Arc;

use fintrack_config::{Config, ConfigManager};
use fintrack_core::{
    compute_balance, Clock, DashboardSummary, LoadReport, SummaryService, SystemClock,
    TransactionDraft, TransactionStore,
};
use fintrack_domain::{TimeWindow, Transaction};
use fintrack_storage_json::JsonFileStore;
use tracing::{info, warn};

use crate::errors::Result;

/// Facade that owns the configured transaction store and answers the
/// questions a front end asks on every render.
pub struct Tracker {
    config: Config,
    store: TransactionStore,
}

impl Tracker {
    /// Loads `config.json` from the data directory (`$FINTRACK_HOME` or
    /// `~/.fintrack`) and opens the store it points at.
    pub fn open_default() -> Result<(Self, LoadReport)> {
        let manager = ConfigManager::with_base_dir(Config::default().resolve_data_dir())?;
        let config = manager.load()?;
        Self::open(config)
    }

    pub fn open(config: Config) -> Result<(Self, LoadReport)> {
        Self::open_with_clock(config, Arc::new(SystemClock))
    }

    pub fn open_with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<(Self, LoadReport)> {
        let data_dir = config.resolve_data_dir();
        let storage = JsonFileStore::new(data_dir.clone())?
            .into_transaction_storage(config.storage_key.clone());
        let (store, report) = TransactionStore::open(Box::new(storage), clock);
        for warning in &report.warnings {
            warn!(%warning, "load warning");
        }
        info!(
            data_dir = %data_dir.display(),
            restored = report.restored,
            "tracker opened"
        );
        Ok((Self { config, store }, report))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn add(&mut self, draft: &TransactionDraft) -> Result<&Transaction> {
        Ok(self.store.add(draft)?)
    }

    pub fn clear(&mut self) -> Result<()> {
        Ok(self.store.clear()?)
    }

    pub fn balance(&self) -> f64 {
        compute_balance(self.store.all())
    }

    /// Dashboard for `window`, or the configured default window.
    pub fn dashboard(&self, window: Option<TimeWindow>) -> DashboardSummary {
        SummaryService::for_store(&self.store, window.unwrap_or(self.config.default_window))
    }
}
