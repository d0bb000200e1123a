// tests/spec_cache.rs
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use vfd_compare::compare::SpecDocument;
use vfd_compare::config::options::LiveOptions;
use vfd_compare::live::cache::{cache_key, CacheEntry, CacheStats, FileStore, SpecCache, SpecStore};

fn doc(name: &str) -> SpecDocument {
    SpecDocument::new(name, "ABB").with_category("Digital Inputs", [("Programmable digital inputs", "6")])
}

#[test]
fn keys_lowercase_the_brand_only() {
    assert_eq!(cache_key("ABB", "ACS880"), "abb_ACS880");
    assert_eq!(cache_key("Danfoss", "FC302"), "danfoss_FC302");
}

#[test]
fn entries_expire_after_ttl() {
    let cache = SpecCache::in_memory(Duration::from_secs(60));
    cache.store_at("abb_ACS880", &doc("ACS880"), 1_000);

    assert_eq!(cache.lookup_at("abb_ACS880", 1_000), Some(doc("ACS880")));
    assert!(cache.lookup_at("abb_ACS880", 60_999).is_some());
    // age == ttl is already stale
    assert_eq!(cache.lookup_at("abb_ACS880", 61_000), None);
    assert_eq!(cache.lookup_at("abb_ACS580", 1_000), None);
}

#[test]
fn newer_write_replaces_stale_entry() {
    let cache = SpecCache::in_memory(Duration::from_secs(60));
    cache.store_at("k", &doc("old"), 0);
    cache.store_at("k", &doc("new"), 100_000);
    assert_eq!(cache.lookup_at("k", 100_500).map(|d| d.name), Some("new".to_string()));
    assert_eq!(cache.stats(), CacheStats { entries: 1, last_update: Some(100_000) });
}

#[test]
fn disabled_cache_never_stores_or_hits() {
    let cache = SpecCache::disabled();
    assert!(!cache.is_enabled());
    cache.store("k", &doc("x"));
    assert_eq!(cache.lookup("k"), None);
    assert_eq!(cache.stats().entries, 0);
}

#[test]
fn clear_empties_and_resets_stats() {
    let cache = SpecCache::in_memory(Duration::from_secs(3600));
    assert_eq!(cache.stats(), CacheStats { entries: 0, last_update: None });
    cache.store_at("a", &doc("a"), 5);
    cache.store_at("b", &doc("b"), 9);
    assert_eq!(cache.stats(), CacheStats { entries: 2, last_update: Some(9) });

    cache.clear();
    assert_eq!(cache.stats(), CacheStats { entries: 0, last_update: None });
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("cache.json");

    {
        let cache = SpecCache::new(Arc::new(FileStore::open(&path)), Duration::from_secs(3600));
        cache.store("abb_ACS880", &doc("ACS880"));
    }
    assert!(path.exists());

    let store = FileStore::open(&path);
    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.len(), 1);
    let entry = store.get("abb_ACS880").unwrap();
    assert_eq!(entry.data, doc("ACS880"));

    store.clear();
    assert!(!path.exists());
    assert_eq!(store.len(), 0);
}

#[test]
fn file_store_keeps_concurrent_writes() {
    let dir = tempfile::tempdir().unwrap();
    for round in 0..50 {
        let path = dir.path().join(format!("cache_{round}.json"));
        let store = FileStore::open(&path);
        std::thread::scope(|s| {
            s.spawn(|| store.set("danfoss_FC302", CacheEntry { data: doc("FC302"), timestamp: 1 }));
            s.spawn(|| store.set("abb_ACS880", CacheEntry { data: doc("ACS880"), timestamp: 2 }));
        });
        assert_eq!(store.len(), 2);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.len(), 2, "round {round}");
        assert_eq!(reopened.latest_timestamp(), Some(2));
    }
}

#[test]
fn corrupt_cache_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert_eq!(FileStore::open(&path).len(), 0);
}

#[test]
fn from_options_honours_enable_flag_and_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = LiveOptions {
        cache_path: Some(dir.path().join("c.json")),
        ..LiveOptions::default()
    };
    let cache = SpecCache::from_options(&opts);
    assert!(cache.is_enabled());
    assert_eq!(cache.ttl(), Duration::from_secs(3600));
    cache.store("k", &doc("x"));
    assert!(dir.path().join("c.json").exists());

    opts.cache_enabled = false;
    assert!(SpecCache::from_options(&opts).lookup("k").is_none());

    opts.cache_path = None;
    opts.cache_enabled = true;
    assert_eq!(SpecCache::from_options(&opts).stats().entries, 0);
}
