// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub compare: CompareOptions,
    pub live: LiveOptions,
    pub export: ExportOptions,
}

/// What to compare. Empty strings mean "not chosen yet".
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompareOptions {
    pub series: String,
    pub power: String,
    pub brand: String,
    pub product: String,
    pub use_live_data: bool,
}

impl CompareOptions {
    pub fn is_complete(&self) -> bool {
        !self.series.is_empty() && !self.brand.is_empty() && !self.product.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProxyKind {
    AllOrigins,
    CorsProxyIo,
    Direct,
}

impl ProxyKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "allorigins" => Some(ProxyKind::AllOrigins),
            "corsproxy" | "corsproxy.io" => Some(ProxyKind::CorsProxyIo),
            "direct" | "none" => Some(ProxyKind::Direct),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveOptions {
    pub cache_enabled: bool,
    pub cache_ttl: Duration,
    pub proxy: ProxyKind,
    pub timeout: Duration,
    /// On-disk cache snapshot; `None` keeps the cache in memory only.
    pub cache_path: Option<PathBuf>,
}

impl Default for LiveOptions {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
            proxy: ProxyKind::AllOrigins,
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            cache_path: Some(PathBuf::from(STORE_DIR).join(CACHE_FILE)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Text,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv", ExportFormat::Text => "txt" }
    }
    /// Field separator; `None` for the plain-text layout.
    pub fn delim(&self) -> Option<char> {
        match self { ExportFormat::Csv => Some(','), ExportFormat::Tsv => Some('\t'), ExportFormat::Text => None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`. A user-typed extension survives format changes;
    /// otherwise the format decides.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = match &self.out_path.user_ext {
            Some(e) => e.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        path.push(join!(stem.as_ref(), ".", &ext));
        path
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.user_ext = p.extension().map(|e| e.to_os_string());
    }

    /// Use a suggested stem (e.g. `FC302_vs_ACS880`) unless the user typed one.
    pub fn suggest_stem(&mut self, stem: &str) {
        if self.out_path.file_stem == OsString::from(DEFAULT_FILE) {
            self.out_path.file_stem = OsString::from(stem);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    user_ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            user_ext: None,
        }
    }
}
