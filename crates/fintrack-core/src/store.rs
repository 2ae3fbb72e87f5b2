//! Owner of the transaction collection and its write-through persistence.

use std::{collections::HashSet, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use fintrack_domain::{Transaction, TransactionId};
use tracing::{debug, info, warn};

use crate::{
    input::TransactionDraft,
    storage::{KeyValueTransactionStorage, MemoryStore, TransactionStorage},
    time::Clock,
    CoreError,
};

/// Outcome of restoring the collection from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub restored: usize,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Holds the ordered transaction list (oldest first) and writes the whole
/// collection back to storage after every successful mutation.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    storage: Box<dyn TransactionStorage>,
    clock: Arc<dyn Clock>,
}

impl TransactionStore {
    /// Creates an empty store. Call [`TransactionStore::load`] to restore
    /// previously persisted state.
    pub fn new(storage: Box<dyn TransactionStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            transactions: Vec::new(),
            storage,
            clock,
        }
    }

    /// Creates a store and immediately restores its persisted state.
    pub fn open(storage: Box<dyn TransactionStorage>, clock: Arc<dyn Clock>) -> (Self, LoadReport) {
        let mut store = Self::new(storage, clock);
        let report = store.load();
        (store, report)
    }

    /// A store backed by a fresh [`MemoryStore`].
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Box::new(KeyValueTransactionStorage::new(MemoryStore::new())),
            clock,
        )
    }

    /// Replaces the in-memory collection with the persisted one. Missing,
    /// unreadable or malformed data yields an empty collection; the problem
    /// is logged and listed in the report instead of failing.
    pub fn load(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        self.transactions = match self.storage.load() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "discarding unreadable transaction data");
                report
                    .warnings
                    .push(format!("stored transactions discarded: {err}"));
                Vec::new()
            }
        };
        for id in duplicate_ids(&self.transactions) {
            warn!(id, "stored transactions share an id");
            report
                .warnings
                .push(format!("transaction id {id} appears more than once"));
        }
        report.restored = self.transactions.len();
        debug!(restored = report.restored, "transactions loaded");
        report
    }

    /// Validates `draft`, appends the resulting transaction and persists the
    /// collection. On any error the collection is left as it was.
    pub fn add(&mut self, draft: &TransactionDraft) -> Result<&Transaction, CoreError> {
        let valid = draft.validate().map_err(|err| {
            debug!(error = %err, "transaction draft rejected");
            CoreError::from(err)
        })?;
        let now = truncate_to_millis(self.clock.now());
        let transaction = Transaction::new(
            self.next_id(now.timestamp_millis())?,
            valid.description,
            valid.amount,
            valid.category,
            valid.kind,
            now,
        );

        self.transactions.push(transaction);
        if let Err(err) = self.storage.save(&self.transactions) {
            self.transactions.pop();
            warn!(error = %err, "write-through failed; transaction not recorded");
            return Err(err);
        }

        let added = &self.transactions[self.transactions.len() - 1];
        debug!(id = added.id, kind = %added.kind, category = %added.category, "transaction added");
        Ok(added)
    }

    /// All transactions, oldest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn latest(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Removes every transaction and persists the empty collection.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.commit(Vec::new())?;
        info!("transaction history cleared");
        Ok(())
    }

    /// Swaps in a whole new collection, e.g. from an import. Ids must be unique.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) -> Result<(), CoreError> {
        if let Some(id) = duplicate_ids(&transactions).into_iter().next() {
            return Err(CoreError::DuplicateId(id));
        }
        let count = transactions.len();
        self.commit(transactions)?;
        info!(count, "transaction history replaced");
        Ok(())
    }

    fn commit(&mut self, transactions: Vec<Transaction>) -> Result<(), CoreError> {
        self.storage.save(&transactions)?;
        self.transactions = transactions;
        Ok(())
    }

    /// Creation time in milliseconds, bumped past the newest id when the
    /// clock has not advanced.
    fn next_id(&self, candidate: TransactionId) -> Result<TransactionId, CoreError> {
        match self.transactions.iter().map(|txn| txn.id).max() {
            Some(last) if candidate <= last => {
                last.checked_add(1).ok_or(CoreError::IdOverflow(last))
            }
            _ => Ok(candidate),
        }
    }
}

/// Dates are persisted with millisecond precision; dropping the rest up front
/// keeps a reloaded collection equal to the live one.
fn truncate_to_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    let sub_millis = at.timestamp_subsec_nanos() % 1_000_000;
    at - Duration::nanoseconds(i64::from(sub_millis))
}

fn duplicate_ids(transactions: &[Transaction]) -> Vec<TransactionId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for txn in transactions {
        if !seen.insert(txn.id) && !duplicates.contains(&txn.id) {
            duplicates.push(txn.id);
        }
    }
    duplicates
}
