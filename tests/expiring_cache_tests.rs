//! Integration Tests for the expiring cache over each store backend

use explorer_utils::cache::{ExpiringCache, ManualClock};
use explorer_utils::{FileStore, KeyValueStore, MemoryStore, UtilError};
use tempfile::TempDir;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn test_file_store_entries_expire_after_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("local_storage.json");
    let clock = ManualClock::new(NOW);

    {
        let store = FileStore::open(&path).unwrap();
        let mut cache = ExpiringCache::with_clock(store, clock.clone());
        cache.write("gas_estimate", "100", 1_000).unwrap();
        cache.write("network", "mainnet", 60_000).unwrap();
    }

    clock.advance(5_000);

    let store = FileStore::open(&path).unwrap();
    let mut cache = ExpiringCache::with_clock(store, clock);

    assert_eq!(cache.read("gas_estimate").unwrap(), None);
    assert_eq!(cache.read("network").unwrap().as_deref(), Some("mainnet"));

    // The expired read was persisted as a removal
    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("gas_estimate").unwrap(), None);
    assert_eq!(reopened.len(), 1);
}

#[test]
fn test_envelope_written_by_other_client_is_read() {
    let mut store = MemoryStore::new();
    store
        .set(
            "k",
            format!(r#"{{"value":"from-browser","expiry":{}}}"#, NOW + 10),
        )
        .unwrap();

    let mut cache = ExpiringCache::with_clock(store, ManualClock::new(NOW));
    assert_eq!(cache.read("k").unwrap().as_deref(), Some("from-browser"));
}

#[test]
fn test_envelope_missing_expiry_is_malformed() {
    let mut store = MemoryStore::new();
    store.set("k", r#"{"value":"v"}"#.to_string()).unwrap();

    let mut cache = ExpiringCache::with_clock(store, ManualClock::new(NOW));
    assert!(matches!(
        cache.read("k"),
        Err(UtilError::MalformedEntry { .. })
    ));
}
