#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// PersistedSize
// =============================================================

#[test]
fn persisted_size_default_is_zeroed() {
    let size = PersistedSize::default();
    assert_eq!(size.width, 0.0);
    assert_eq!(size.height, 0.0);
}

#[test]
fn persisted_size_serde_roundtrip() {
    let size = PersistedSize { width: 320.0, height: 240.0 };
    let json = serde_json::to_string(&size).unwrap();
    let back: PersistedSize = serde_json::from_str(&json).unwrap();
    assert_eq!(back, size);
}

#[test]
fn persisted_size_serde_field_names() {
    let json = serde_json::to_string(&PersistedSize { width: 1.0, height: 2.0 }).unwrap();
    assert!(json.contains("\"width\""));
    assert!(json.contains("\"height\""));
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_miss_is_none() {
    let store = MemoryStore::new();
    assert!(store.get("webcamSize").is_none());
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set("webcamSize", PersistedSize { width: 300.0, height: 200.0 });
    let size = store.get("webcamSize").unwrap();
    assert_eq!(size.width, 300.0);
    assert_eq!(size.height, 200.0);
}

#[test]
fn memory_store_last_writer_wins() {
    let mut store = MemoryStore::new();
    store.set("webcamSize", PersistedSize { width: 100.0, height: 100.0 });
    store.set("webcamSize", PersistedSize { width: 250.0, height: 100.0 });
    assert_eq!(store.get("webcamSize").unwrap().width, 250.0);
}

#[test]
fn memory_store_keys_are_independent() {
    let mut store = MemoryStore::new();
    store.set("a", PersistedSize { width: 1.0, height: 1.0 });
    assert!(store.get("b").is_none());
}
