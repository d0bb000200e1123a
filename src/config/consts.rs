// src/config/consts.rs

// Local cache + logs
pub const STORE_DIR: &str = ".store";
pub const CACHE_FILE: &str = "spec_cache.json";
pub const LOG_FILE: &str = ".store/debug.log";

// Live fetch
pub const CACHE_TTL_SECS: u64 = 3600; // 1 hour
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("vfd_compare/", env!("CARGO_PKG_VERSION"));
pub const ALLORIGINS_PROXY: &str = "https://api.allorigins.win/get?url=";
pub const CORSPROXY_IO: &str = "https://corsproxy.io/?";

// Presentation
pub const SUMMARY_LIMIT: usize = 10; // advantages shown per side
pub const SIMILAR_LABEL: &str = "Similar";
pub const NO_ADVANTAGES: &str = "No significant advantages identified";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "comparison";
