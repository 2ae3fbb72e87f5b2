//! Persistence seams for the transaction store.
//!
//! [`KeyValueStore`] mirrors a browser-style string key-value store;
//! [`TransactionStorage`] is what the store talks to. The provided
//! [`KeyValueTransactionStorage`] adapts the former into the latter by keeping
//! the whole collection as one JSON array under a single key.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use fintrack_domain::Transaction;

use crate::CoreError;

/// Key under which the collection is stored unless configured otherwise.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// String key-value persistence (one entry per key, whole-value writes).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        (**self).remove(key)
    }
}

/// Abstraction over backends able to persist the full transaction collection.
pub trait TransactionStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Transaction>>, CoreError>;
    /// Replaces the stored collection with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<(), CoreError>;
}

/// Stores the collection as a JSON array under one key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct KeyValueTransactionStorage<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueTransactionStorage<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, TRANSACTIONS_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }
}

impl<S: KeyValueStore> TransactionStorage for KeyValueTransactionStorage<S> {
    fn load(&self) -> Result<Option<Vec<Transaction>>, CoreError> {
        match self.backend.get(&self.key)? {
            Some(raw) => decode_transactions(&raw),
            None => Ok(None),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), CoreError> {
        let encoded = encode_transactions(transactions)?;
        self.backend.set(&self.key, &encoded)
    }
}

/// Serializes the collection into its persisted JSON array form.
pub fn encode_transactions(transactions: &[Transaction]) -> Result<String, CoreError> {
    Ok(serde_json::to_string(transactions)?)
}

/// Parses a persisted JSON array. A literal `null` decodes as absent.
pub fn decode_transactions(raw: &str) -> Result<Option<Vec<Transaction>>, CoreError> {
    Ok(serde_json::from_str(raw)?)
}

/// Process-local [`KeyValueStore`], used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every write fails with [`CoreError::Storage`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store lock poisoned".into()))
    }

    fn ensure_writable(&self) -> Result<(), CoreError> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(CoreError::Storage("memory store is read-only".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        self.ensure_writable()?;
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.ensure_writable()?;
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fintrack_domain::TransactionKind;

    fn sample(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|index| {
                let kind = if index % 2 == 0 {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                Transaction::new(
                    1_000 + index as i64,
                    format!("entry {index}"),
                    index as f64 + 0.25,
                    format!("cat-{}", index % 3),
                    kind,
                    Utc.timestamp_millis_opt(1_700_000_000_000 + index as i64 * 60_000)
                        .unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn encode_then_decode_preserves_collection() {
        for count in [0, 1, 7] {
            let mut original = sample(count);
            if let Some(first) = original.first_mut() {
                first.amount = 228.104_787_659_876_82;
            }
            let encoded = encode_transactions(&original).expect("encode");
            let decoded = decode_transactions(&encoded).expect("decode");
            assert_eq!(decoded, Some(original), "round trip of {count} entries");
        }
    }

    #[test]
    fn decode_treats_null_as_absent_and_rejects_garbage() {
        assert_eq!(decode_transactions("null").expect("null decodes"), None);
        assert!(matches!(
            decode_transactions("{not json"),
            Err(CoreError::Serde(_))
        ));
        assert!(decode_transactions(r#"[{"id":1}]"#).is_err());
    }

    #[test]
    fn keyed_storage_writes_under_configured_key() {
        let backend = Arc::new(MemoryStore::new());
        let storage = KeyValueTransactionStorage::with_key(backend.clone(), "ledger");
        assert_eq!(storage.load().expect("load"), None);

        let txns = sample(2);
        storage.save(&txns).expect("save");
        assert!(backend.get("ledger").expect("get").is_some());
        assert!(backend.get(TRANSACTIONS_KEY).expect("get").is_none());
        assert_eq!(storage.load().expect("load"), Some(txns));
    }

    #[test]
    fn read_only_memory_store_rejects_writes() {
        let store = MemoryStore::new();
        store.set("k", "v").expect("writable by default");
        store.set_read_only(true);
        assert!(matches!(store.set("k", "w"), Err(CoreError::Storage(_))));
        assert_eq!(store.get("k").expect("get"), Some("v".to_string()));
    }
}
