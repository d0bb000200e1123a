// src/live/mod.rs
//! Live spec retrieval from manufacturer sites.
//!
//! Order per request: fresh cache entry, then the brand's JSON search API
//! (first product of `{"products": [...]}`), then the product page scraped
//! for spec tables. Every failure is an `Err`; falling back to bundled data
//! is the caller's decision.

pub mod cache;
pub mod endpoints;
pub mod scrape;
pub mod transport;

use serde::Deserialize;
use thiserror::Error;

use crate::compare::SpecDocument;
use crate::config::options::{ LiveOptions, ProxyKind };
use cache::{ SpecCache, cache_key, now_ms };
use endpoints::{ Endpoint, endpoint_for, relay_url };
use transport::{ HttpTransport, Transport };

pub const LIVE_SOURCE: &str = "live";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no live endpoint for brand '{brand}'")]
    UnknownBrand { brand: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("search returned no products for {url}")]
    NoProducts { url: String },
    #[error("no specifications found at {url}")]
    NoSpecifications { url: String },
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<SpecDocument>,
}

#[derive(Deserialize)]
struct RelayEnvelope {
    contents: Option<String>,
}

/// AllOrigins wraps the payload as `{"contents": "..."}`. Anything that
/// does not look like that envelope is passed through untouched.
pub fn unwrap_proxy_body(proxy: ProxyKind, body: String) -> String {
    if proxy != ProxyKind::AllOrigins {
        return body;
    }
    match serde_json::from_str::<RelayEnvelope>(&body) {
        Ok(RelayEnvelope { contents: Some(inner) }) => inner,
        _ => body,
    }
}

pub struct LiveFetcher {
    transport: Box<dyn Transport>,
    cache: SpecCache,
    proxy: ProxyKind,
    baseline_brand: String,
}

impl LiveFetcher {
    pub fn new(
        transport: Box<dyn Transport>,
        cache: SpecCache,
        proxy: ProxyKind,
        baseline_brand: &str,
    ) -> Self {
        Self { transport, cache, proxy, baseline_brand: s!(baseline_brand) }
    }

    /// HTTP transport + cache as configured.
    pub fn from_options(opts: &LiveOptions, baseline_brand: &str) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(opts.timeout)?;
        Ok(Self::new(Box::new(transport), SpecCache::from_options(opts), opts.proxy, baseline_brand))
    }

    pub fn cache(&self) -> &SpecCache {
        &self.cache
    }

    /// Baseline series by id. Power is not part of the query or cache key.
    pub fn fetch_baseline_spec(&self, series: &str) -> Result<SpecDocument, FetchError> {
        let brand = self.baseline_brand.clone();
        self.fetch(&brand, series, true)
    }

    pub fn fetch_competitor_spec(&self, brand: &str, product_id: &str) -> Result<SpecDocument, FetchError> {
        self.fetch(brand, product_id, false)
    }

    fn fetch(&self, brand: &str, id: &str, baseline: bool) -> Result<SpecDocument, FetchError> {
        let key = cache_key(brand, id);
        if let Some(doc) = self.cache.lookup(&key) {
            logf!("Live: {brand} {id} served from cache");
            return Ok(doc);
        }

        let endpoint = endpoint_for(brand)
            .ok_or_else(|| FetchError::UnknownBrand { brand: s!(brand) })?;

        let found = match self.search(endpoint, id, baseline) {
            Ok(doc) => doc,
            Err(e) => {
                logd!("Live: search for {brand} {id} failed ({e}), scraping product page");
                self.scrape(endpoint, id)?
            }
        };

        let doc = self.finish(found, brand, id);
        self.cache.store(&key, &doc);
        logf!("Live: fetched {brand} {id} ({} attributes)", doc.attribute_count());
        Ok(doc)
    }

    fn get(&self, url: &str) -> Result<String, FetchError> {
        let body = self.transport.get(&relay_url(self.proxy, url))?;
        Ok(unwrap_proxy_body(self.proxy, body))
    }

    fn search(&self, endpoint: &Endpoint, id: &str, baseline: bool) -> Result<SpecDocument, FetchError> {
        let url = endpoint
            .search_url(id, baseline)
            .ok_or_else(|| FetchError::NoProducts { url: s!(endpoint.base_url) })?;
        let resp: SearchResponse = serde_json::from_str(&self.get(&url)?)?;
        resp.products
            .into_iter()
            .next()
            .filter(|doc| !doc.is_empty())
            .ok_or(FetchError::NoProducts { url })
    }

    fn scrape(&self, endpoint: &Endpoint, id: &str) -> Result<SpecDocument, FetchError> {
        let url = endpoint.product_url(id);
        let page = self.get(&url)?;

        let categories = scrape::extract_specifications(&page, &endpoint.profile);
        if categories.is_empty() {
            return Err(FetchError::NoSpecifications { url });
        }
        let mut doc = SpecDocument::new(scrape::extract_product_name(&page), s!());
        doc.categories = categories;
        Ok(doc)
    }

    fn finish(&self, mut doc: SpecDocument, brand: &str, id: &str) -> SpecDocument {
        if doc.brand.is_empty() {
            doc.brand = s!(brand);
        }
        if doc.series.is_none() {
            doc.series = Some(s!(id));
        }
        doc.data_source = Some(s!(LIVE_SOURCE));
        doc.fetched_at = Some(now_ms() / 1000);
        doc
    }
}
