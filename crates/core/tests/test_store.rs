//! Integration tests for PersistedStore implementations
//!
//! Every test runs against MemoryStore and a FileStore in a temp dir.

use unitgate_core::store::{
    FileStore, MemoryStore, PersistedStore, EXPIRES_KEY, PLAN_KEY, TOKEN_KEY,
};

/// Create all store implementations to test against
fn create_stores(dir: &tempfile::TempDir) -> Vec<(&'static str, Box<dyn PersistedStore>)> {
    vec![
        ("memory", Box::new(MemoryStore::new())),
        (
            "file",
            Box::new(FileStore::new(dir.path().join("nested").join("entitlement.json"))),
        ),
    ]
}

#[test]
fn test_get_missing_is_none() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, store) in create_stores(&tmp) {
        assert!(store.get(TOKEN_KEY).is_none(), "{name}");
    }
}

#[test]
fn test_set_then_get() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, store) in create_stores(&tmp) {
        store.set(PLAN_KEY, "pro").unwrap();
        assert_eq!(store.get(PLAN_KEY).as_deref(), Some("pro"), "{name}");
    }
}

#[test]
fn test_last_write_wins() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, store) in create_stores(&tmp) {
        store.set(TOKEN_KEY, "first").unwrap();
        store.set(TOKEN_KEY, "second").unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("second"), "{name}");
    }
}

#[test]
fn test_set_all_writes_every_entry() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, store) in create_stores(&tmp) {
        store
            .set_all(&[(TOKEN_KEY, "abc"), (PLAN_KEY, "pro"), (EXPIRES_KEY, "1999999999")])
            .unwrap();
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"), "{name}");
        assert_eq!(store.get(PLAN_KEY).as_deref(), Some("pro"), "{name}");
        assert_eq!(store.get(EXPIRES_KEY).as_deref(), Some("1999999999"), "{name}");
    }
}

#[test]
fn test_set_keeps_unrelated_entries() {
    let tmp = tempfile::tempdir().unwrap();
    for (name, store) in create_stores(&tmp) {
        store.set("other", "x").unwrap();
        store.set(PLAN_KEY, "free").unwrap();
        assert_eq!(store.get("other").as_deref(), Some("x"), "{name}");
    }
}

#[test]
fn test_file_store_survives_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("entitlement.json");
    FileStore::new(&path).set(TOKEN_KEY, "persisted").unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get(TOKEN_KEY).as_deref(), Some("persisted"));
}

#[test]
fn test_file_store_corrupt_file_reads_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("entitlement.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::new(&path);
    assert!(store.get(TOKEN_KEY).is_none());

    store.set(TOKEN_KEY, "fresh").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("fresh"));
}

#[test]
fn test_memory_store_with_entries() {
    let store = MemoryStore::with_entries([(PLAN_KEY, "pro")]);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(PLAN_KEY).as_deref(), Some("pro"));
}
