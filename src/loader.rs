// src/loader.rs
//! Resolves the two documents of a comparison.
//!
//! Bundled catalog entries are the ground truth: both must exist before any
//! live fetch is attempted. With live data enabled, both sides are fetched
//! concurrently and each falls back to its bundled document on its own.

use std::thread;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::compare::{ ComparisonResult, Comparator, SpecDocument };
use crate::config::options::CompareOptions;
use crate::live::LiveFetcher;
use crate::progress::Progress;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("unknown baseline series '{0}'")]
    UnknownBaseline(String),
    #[error("unknown {brand} product '{product}'")]
    UnknownCompetitor { brand: String, product: String },
}

/// Where a loaded document came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Live,
    /// Bundled catalog (shown as "Cached", like the offline database it is).
    Static,
}

impl Origin {
    pub fn badge(&self) -> &'static str {
        match self {
            Origin::Live => "Live",
            Origin::Static => "Cached",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Loaded {
    pub document: SpecDocument,
    pub origin: Origin,
}

#[derive(Clone, Debug)]
pub struct LoadedPair {
    pub baseline: Loaded,
    pub competitor: Loaded,
    /// Catalog spelling of the competitor brand; doubles as its label.
    pub brand: String,
}

impl LoadedPair {
    pub fn compare(&self, comparator: &Comparator) -> ComparisonResult {
        comparator.compare(&self.baseline.document, &self.competitor.document, &self.brand)
    }
}

pub struct Loader<'a> {
    catalog: &'a Catalog,
    live: Option<&'a LiveFetcher>,
}

impl<'a> Loader<'a> {
    pub fn new(catalog: &'a Catalog, live: Option<&'a LiveFetcher>) -> Self {
        Self { catalog, live }
    }

    pub fn load(
        &self,
        opts: &CompareOptions,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<LoadedPair, LoadError> {
        let base_static = self
            .catalog
            .get_baseline_spec(&opts.series)
            .ok_or_else(|| LoadError::UnknownBaseline(opts.series.clone()))?;
        let brand = self
            .catalog
            .resolve_brand(&opts.brand)
            .ok_or_else(|| LoadError::UnknownCompetitor {
                brand: opts.brand.clone(),
                product: opts.product.clone(),
            })?;
        let comp_static = self
            .catalog
            .get_competitor_spec(brand, &opts.product)
            .ok_or_else(|| LoadError::UnknownCompetitor {
                brand: s!(brand),
                product: opts.product.clone(),
            })?;

        if let Some(p) = progress.as_deref_mut() {
            p.begin(2);
        }

        let live = match self.live {
            Some(fetcher) if opts.use_live_data => fetcher,
            _ => {
                let pair = LoadedPair {
                    baseline: Loaded { document: base_static.clone(), origin: Origin::Static },
                    competitor: Loaded { document: comp_static.clone(), origin: Origin::Static },
                    brand: s!(brand),
                };
                report(&mut progress, &pair);
                return Ok(pair);
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.log("Fetching live data from manufacturer websites...");
        }
        logf!("Loader: live fetch {} / {} {}", opts.series, brand, opts.product);

        let (base_live, comp_live) = thread::scope(|scope| {
            let b = scope.spawn(|| live.fetch_baseline_spec(&opts.series));
            let c = scope.spawn(|| live.fetch_competitor_spec(brand, &opts.product));
            (b.join(), c.join())
        });

        let baseline = settle(base_live, base_static, &opts.series);
        let competitor = settle(comp_live, comp_static, &opts.product);

        if let Some(p) = progress.as_deref_mut() {
            if baseline.origin == Origin::Static || competitor.origin == Origin::Static {
                p.log("Live data unavailable, using cached data as fallback.");
            } else {
                p.log("Live data loaded successfully!");
            }
        }

        let pair = LoadedPair { baseline, competitor, brand: s!(brand) };
        report(&mut progress, &pair);
        Ok(pair)
    }
}

type Joined = thread::Result<Result<SpecDocument, crate::live::FetchError>>;

fn settle(fetched: Joined, fallback: &SpecDocument, id: &str) -> Loaded {
    match fetched {
        Ok(Ok(document)) => Loaded { document, origin: Origin::Live },
        Ok(Err(e)) => {
            loge!("Loader: live fetch for {id} failed: {e}");
            Loaded { document: fallback.clone(), origin: Origin::Static }
        }
        Err(_) => {
            loge!("Loader: live fetch thread for {id} panicked");
            Loaded { document: fallback.clone(), origin: Origin::Static }
        }
    }
}

fn report(progress: &mut Option<&mut dyn Progress>, pair: &LoadedPair) {
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&pair.baseline.document.name);
        p.item_done(&pair.competitor.document.name);
        p.finish();
    }
}
