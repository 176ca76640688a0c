//! Tests for cache module

use super::*;
use serde_json::json;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// ============================================================================
// ConfigHash Tests
// ============================================================================

#[test]
fn test_config_hash_is_stable() {
    let a = ConfigHash::new("users?active=1", 10);
    let b = ConfigHash::new("users?active=1", 10);
    assert_eq!(a, b);
    assert_eq!(a.as_str().len(), 64);
}

#[test]
fn test_config_hash_depends_on_page_size_and_identity() {
    let base = ConfigHash::new("users", 10);
    assert_ne!(base, ConfigHash::new("users", 20));
    assert_ne!(base, ConfigHash::new("orders", 10));
}

#[test]
fn test_config_hash_identity_boundaries() {
    // Identity bytes are length-prefixed before the page size
    assert_ne!(ConfigHash::new("a", 1), ConfigHash::new("a\u{1}", 0));
}

// ============================================================================
// Key Layout Tests
// ============================================================================

#[test]
fn test_page_key_round_trip() {
    let hash = ConfigHash::new("users", 10);
    let key = hash.page_key(42);

    assert!(key.starts_with(CACHE_KEY_PREFIX));
    assert!(key.ends_with(hash.as_str()));
    assert_eq!(parse_page_key(&key), Some(42));
}

#[test]
fn test_parse_page_key_rejects_foreign_keys() {
    assert_eq!(parse_page_key("Paginator_abc_def"), None);
    assert_eq!(parse_page_key("session_12"), None);
    assert_eq!(parse_page_key(""), None);
    assert_eq!(parse_page_key("Paginator_3_"), None);
}

#[test]
fn test_tags_hold_the_hash() {
    let hash = ConfigHash::new("users", 10);
    assert_eq!(hash.tags(), vec![hash.to_string()]);
}

// ============================================================================
// MemoryCacheStore Tests
// ============================================================================

#[test]
fn test_memory_store_save_load_remove() {
    let store = MemoryCacheStore::new();
    assert!(store.is_empty());
    assert_eq!(store.load("k").unwrap(), None);

    store.save("k", json!([1, 2, 3]), &tags(&["t"])).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.load("k").unwrap(), Some(json!([1, 2, 3])));

    assert!(store.remove("k").unwrap());
    assert!(!store.remove("k").unwrap());
    assert!(store.is_empty());
}

#[test]
fn test_memory_store_save_replaces_value_and_tags() {
    let store = MemoryCacheStore::new();
    store.save("k", json!(1), &tags(&["old"])).unwrap();
    store.save("k", json!(2), &tags(&["new"])).unwrap();

    assert_eq!(store.load("k").unwrap(), Some(json!(2)));
    assert!(store.ids_matching_tags(&tags(&["old"])).unwrap().is_empty());
    assert_eq!(store.ids_matching_tags(&tags(&["new"])).unwrap(), vec!["k"]);
}

#[test]
fn test_memory_store_ids_matching_all_tags() {
    let store = MemoryCacheStore::new();
    store.save("a", json!(null), &tags(&["x", "y"])).unwrap();
    store.save("b", json!(null), &tags(&["x"])).unwrap();
    store.save("c", json!(null), &tags(&["z"])).unwrap();

    let mut ids = store.ids_matching_tags(&tags(&["x"])).unwrap();
    ids.sort();
    assert_eq!(ids, vec!["a", "b"]);

    assert_eq!(store.ids_matching_tags(&tags(&["x", "y"])).unwrap(), vec!["a"]);
    assert!(store.ids_matching_tags(&tags(&["w"])).unwrap().is_empty());
}

#[test]
fn test_memory_store_capacity_evicts_least_recent() {
    let store = MemoryCacheStore::with_capacity(2);
    assert_eq!(store.capacity(), 2);

    store.save("a", json!(1), &[]).unwrap();
    store.save("b", json!(2), &[]).unwrap();
    // Touch "a" so "b" becomes the eviction candidate
    store.load("a").unwrap();
    store.save("c", json!(3), &[]).unwrap();

    assert!(store.contains("a"));
    assert!(!store.contains("b"));
    assert!(store.contains("c"));
}

#[test]
fn test_memory_store_zero_capacity_is_unbounded() {
    let store = MemoryCacheStore::with_capacity(0);
    for i in 0..100 {
        store.save(&format!("k{i}"), json!(i), &[]).unwrap();
    }
    assert_eq!(store.len(), 100);
}

#[test]
fn test_memory_store_stats() {
    let store = MemoryCacheStore::new();
    assert_eq!(store.stats().hit_rate(), 0.0);

    store.save("k", json!(1), &[]).unwrap();
    store.load("k").unwrap();
    store.load("k").unwrap();
    store.load("missing").unwrap();
    store.remove("k").unwrap();

    let stats = store.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.saves, 1);
    assert_eq!(stats.removals, 1);
    assert!((stats.hit_rate() - 2.0 / 3.0).abs() < f64::EPSILON);

    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.stats().saves, 1);
}
