// src/live/cache.rs
//
// Time-bounded cache of fetched spec documents, keyed by
// "<brand lowercase>_<product id>". Entries older than the TTL are treated
// as absent and overwritten on the next successful fetch.

use std::collections::HashMap;
use std::fs;
use std::path::{ Path, PathBuf };
use std::sync::{ Arc, Mutex, PoisonError };
use std::time::{ Duration, SystemTime, UNIX_EPOCH };

use serde::{ Deserialize, Serialize };

use crate::compare::SpecDocument;
use crate::config::options::LiveOptions;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: SpecDocument,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Backing store. Shared by both fetch threads of a comparison.
pub trait SpecStore: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEntry>;
    fn set(&self, key: &str, entry: CacheEntry);
    fn clear(&self);
    fn len(&self) -> usize;
    fn latest_timestamp(&self) -> Option<u64>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    fn with_entries(entries: HashMap<String, CacheEntry>) -> Self {
        Self { entries: Mutex::new(entries) }
    }

    fn snapshot(&self) -> HashMap<String, CacheEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SpecStore for MemoryStore {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }
    fn set(&self, key: &str, entry: CacheEntry) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).insert(s!(key), entry);
    }
    fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
    fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
    fn latest_timestamp(&self) -> Option<u64> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(|e| e.timestamp)
            .max()
    }
}

/// Memory store mirrored to a JSON file so fetched specs survive restarts.
/// Disk errors are logged, never surfaced: the in-memory copy stays valid.
pub struct FileStore {
    path: PathBuf,
    mem: MemoryStore,
    // held across update + snapshot + write
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                loge!("Cache: ignoring unreadable {}: {e}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        logd!("Cache: opened {} ({} entries)", path.display(), entries.len());
        Self { path, mem: MemoryStore::with_entries(entries), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) {
        let write = || -> Result<(), Box<dyn std::error::Error>> {
            if let Some(dir) = self.path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs::create_dir_all(dir)?;
                }
            }
            fs::write(&self.path, serde_json::to_string(&self.mem.snapshot())?)?;
            Ok(())
        };
        if let Err(e) = write() {
            loge!("Cache: failed to save {}: {e}", self.path.display());
        }
    }
}

impl SpecStore for FileStore {
    fn get(&self, key: &str) -> Option<CacheEntry> {
        self.mem.get(key)
    }
    fn set(&self, key: &str, entry: CacheEntry) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.mem.set(key, entry);
        self.save();
    }
    fn clear(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.mem.clear();
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                loge!("Cache: failed to remove {}: {e}", self.path.display());
            }
        }
    }
    fn len(&self) -> usize {
        self.mem.len()
    }
    fn latest_timestamp(&self) -> Option<u64> {
        self.mem.latest_timestamp()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    /// Timestamp (ms) of the newest entry, if any.
    pub last_update: Option<u64>,
}

#[derive(Clone)]
pub struct SpecCache {
    store: Arc<dyn SpecStore>,
    ttl: Duration,
    enabled: bool,
}

impl SpecCache {
    pub fn new(store: Arc<dyn SpecStore>, ttl: Duration) -> Self {
        Self { store, ttl, enabled: true }
    }

    pub fn in_memory(ttl: Duration) -> Self {
        Self::new(Arc::new(MemoryStore::default()), ttl)
    }

    /// File-backed when `cache_path` is set, memory-only otherwise.
    pub fn from_options(opts: &LiveOptions) -> Self {
        let mut cache = match &opts.cache_path {
            Some(path) => Self::new(Arc::new(FileStore::open(path.clone())), opts.cache_ttl),
            None => Self::in_memory(opts.cache_ttl),
        };
        cache.enabled = opts.cache_enabled;
        cache
    }

    /// A disabled cache never hits and never stores.
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::in_memory(Duration::ZERO) }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn lookup(&self, key: &str) -> Option<SpecDocument> {
        self.lookup_at(key, now_ms())
    }

    /// Hit only when the entry is younger than the TTL at `now` (ms).
    pub fn lookup_at(&self, key: &str, now: u64) -> Option<SpecDocument> {
        if !self.enabled {
            return None;
        }
        let entry = self.store.get(key)?;
        let age = now.saturating_sub(entry.timestamp);
        if u128::from(age) < self.ttl.as_millis() {
            logd!("Cache: hit {key} (age {age} ms)");
            Some(entry.data)
        } else {
            logd!("Cache: stale {key} (age {age} ms)");
            None
        }
    }

    pub fn store(&self, key: &str, doc: &SpecDocument) {
        self.store_at(key, doc, now_ms());
    }

    pub fn store_at(&self, key: &str, doc: &SpecDocument, now: u64) {
        if self.enabled {
            self.store.set(key, CacheEntry { data: doc.clone(), timestamp: now });
        }
    }

    pub fn clear(&self) {
        self.store.clear();
        logf!("Cache: cleared");
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats { entries: self.store.len(), last_update: self.store.latest_timestamp() }
    }
}

pub fn cache_key(brand: &str, product_id: &str) -> String {
    join!(&brand.to_lowercase(), "_", product_id)
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
