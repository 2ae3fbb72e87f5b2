use std::{fs, sync::Arc};

use chrono::{TimeZone, Utc};
use fintrack_core::{
    storage::{KeyValueStore, TransactionStorage, TRANSACTIONS_KEY},
    FixedClock, TransactionDraft, TransactionStore,
};
use fintrack_domain::TransactionKind;
use fintrack_storage_json::JsonFileStore;
use tempfile::tempdir;

#[test]
fn json_store_reads_back_written_values() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data")).expect("create store");

    assert_eq!(store.get("transactions").expect("get"), None);
    store.set("transactions", "[]").expect("set");
    assert_eq!(store.get("transactions").expect("get"), Some("[]".to_string()));

    let path = store.key_path("transactions");
    assert_eq!(path, dir.path().join("data").join("transactions.json"));
    assert!(path.exists());

    store.remove("transactions").expect("remove");
    assert!(!path.exists());
    store.remove("transactions").expect("removing twice is fine");
}

#[test]
fn failed_write_preserves_previous_file() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    store.set("transactions", "[1]").expect("initial write");

    // A directory at the temp location makes File::create fail.
    let mut tmp = store.key_path("transactions");
    tmp.set_extension("json.tmp");
    fs::create_dir_all(&tmp).expect("block temp path");

    assert!(store.set("transactions", "[2]").is_err());
    assert_eq!(store.get("transactions").expect("get"), Some("[1]".to_string()));
}

#[test]
fn transaction_store_survives_restart_on_disk() {
    let dir = tempdir().expect("tempdir");
    let now = Utc.with_ymd_and_hms(2024, 4, 2, 8, 15, 0).unwrap();

    let storage = JsonFileStore::new(dir.path().to_path_buf())
        .expect("create store")
        .into_transaction_storage(TRANSACTIONS_KEY);
    let (mut store, report) = TransactionStore::open(Box::new(storage), Arc::new(FixedClock(now)));
    assert_eq!(report.restored, 0);

    store
        .add(&TransactionDraft::new("Paycheck", "1200", "work", TransactionKind::Income))
        .expect("add income");
    store
        .add(&TransactionDraft::new("Groceries", "64.5", "food", TransactionKind::Expense))
        .expect("add expense");

    let raw = fs::read_to_string(dir.path().join("transactions.json")).expect("read file");
    assert!(raw.starts_with('['));
    assert!(raw.contains(r#""type":"expense""#));
    assert!(raw.contains(r#""date":"2024-04-02T08:15:00.000Z""#));

    let reopened = JsonFileStore::new(dir.path().to_path_buf())
        .expect("reopen store")
        .into_transaction_storage(TRANSACTIONS_KEY);
    assert_eq!(
        reopened.load().expect("load").as_deref(),
        Some(store.all())
    );
}

#[test]
fn corrupt_file_loads_as_empty_store() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("transactions.json"), "[{\"id\":").expect("write garbage");

    let storage = JsonFileStore::new(dir.path().to_path_buf())
        .expect("create store")
        .into_transaction_storage(TRANSACTIONS_KEY);
    let now = Utc.with_ymd_and_hms(2024, 4, 2, 8, 15, 0).unwrap();
    let (store, report) = TransactionStore::open(Box::new(storage), Arc::new(FixedClock(now)));

    assert!(store.is_empty());
    assert!(!report.is_clean());
}
