// src/cli.rs
use std::env;
use std::error::Error;

use crate::catalog::Catalog;
use crate::compare::Comparator;
use crate::config::options::{ AppOptions, ExportFormat, ProxyKind };
use crate::file::{ export_comparison, export_string };
use crate::live::LiveFetcher;
use crate::live::cache::SpecCache;
use crate::loader::Loader;
use crate::progress::Progress;
use crate::report::Report;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Compare,
    List,
    CacheStats,
    ClearCache,
    Help,
}

#[derive(Debug)]
pub struct CliArgs {
    pub action: Action,
    pub options: AppOptions,
    /// `--out` given; stdout otherwise.
    pub to_file: bool,
    format: Option<ExportFormat>,
}

impl CliArgs {
    /// Explicit `--format`, else the `--out` extension, else plain text.
    pub fn format(&self) -> ExportFormat {
        if let Some(f) = self.format {
            return f;
        }
        if self.to_file {
            let path = self.options.export.out_path();
            return path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(ExportFormat::parse)
                .unwrap_or(ExportFormat::Csv);
        }
        ExportFormat::Text
    }
}

/// Status lines on stderr so stdout stays pipeable.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    crate::log::init();
    let catalog = Catalog::load_bundled()?;
    let args = parse_args(env::args().skip(1), &catalog)?;
    execute(&args, &catalog)
}

pub fn execute(args: &CliArgs, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    match args.action {
        Action::Help => {
            println!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Action::List => {
            print!("{}", list_catalog(catalog));
            Ok(())
        }
        Action::CacheStats => {
            let stats = SpecCache::from_options(&args.options.live).stats();
            match stats.last_update {
                Some(ts) => println!("Cached entries: {} (last update: {} ms since epoch)", stats.entries, ts),
                None => println!("Cached entries: {} (never updated)", stats.entries),
            }
            Ok(())
        }
        Action::ClearCache => {
            SpecCache::from_options(&args.options.live).clear();
            println!("Cache cleared. Live data will be fetched on next comparison.");
            Ok(())
        }
        Action::Compare => compare(args, catalog),
    }
}

fn compare(args: &CliArgs, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    let opts = &args.options;

    let fetcher = if opts.compare.use_live_data {
        match LiveFetcher::from_options(&opts.live, catalog.baseline_manufacturer()) {
            Ok(f) => Some(f),
            Err(e) => {
                loge!("CLI: live fetch unavailable: {e}");
                eprintln!("Live data unavailable ({e}); using cached data.");
                None
            }
        }
    } else {
        None
    };

    let mut progress = CliProgress;
    let pair = Loader::new(catalog, fetcher.as_ref()).load(&opts.compare, Some(&mut progress))?;
    let result = pair.compare(&Comparator::default());
    let report = Report::from_pair(catalog.baseline_manufacturer(), &pair, &result);

    let mut export = opts.export.clone();
    export.format = args.format();

    if args.to_file {
        let path = export_comparison(&export, &report, false)?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", export_string(&export, &report, false));
    }
    Ok(())
}

/// Series with power options, then each brand's line-up.
pub fn list_catalog(catalog: &Catalog) -> String {
    let mut out = join!(catalog.baseline_manufacturer(), " series:\n");
    for (id, doc) in catalog.baseline_series() {
        let powers: Vec<&str> = catalog.power_options(id).iter().map(|p| p.label.as_str()).collect();
        out.push_str(&format!("  {:<8} {}  [{}]\n", id, doc.name, powers.join(", ")));
    }
    for brand in catalog.competitor_brands() {
        out.push_str(&join!("\n", brand, " products:\n"));
        for (id, doc) in catalog.competitor_products(brand) {
            out.push_str(&format!("  {:<8} {}\n", id, doc.name));
        }
    }
    out
}

pub fn parse_args<I>(args: I, catalog: &Catalog) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    options.export.include_headers = false;
    let mut action = Action::Compare;
    let mut to_file = false;
    let mut format = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-s" | "--series" => options.compare.series = args.next().ok_or("Missing value for --series")?,
            "-b" | "--brand" => options.compare.brand = args.next().ok_or("Missing value for --brand")?,
            "-p" | "--product" => options.compare.product = args.next().ok_or("Missing value for --product")?,
            "--live" => options.compare.use_live_data = true,
            "--no-cache" => options.live.cache_enabled = false,
            "--proxy" => {
                let v = args.next().ok_or("Missing value for --proxy")?;
                options.live.proxy = ProxyKind::parse(&v).ok_or_else(|| format!("Unknown proxy: {}", v))?;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                format = Some(ExportFormat::parse(&v).ok_or_else(|| format!("Unknown format: {}", v))?);
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                options.export.set_path(&v);
                to_file = true;
            }
            "--include-headers" => options.export.include_headers = true,
            "--list" => action = Action::List,
            "--cache-stats" => action = Action::CacheStats,
            "--clear-cache" => action = Action::ClearCache,
            "-h" | "--help" => action = Action::Help,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if action == Action::Compare {
        resolve_selection(&mut options, catalog)?;
    }
    if let Some(f) = format {
        options.export.format = f;
    }

    Ok(CliArgs { action, options, to_file, format })
}

fn resolve_selection(options: &mut AppOptions, catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    let sel = &mut options.compare;
    if sel.series.is_empty() {
        return Err("Missing --series (see --list)".into());
    }
    sel.series = sel.series.to_ascii_uppercase();
    if catalog.get_baseline_spec(&sel.series).is_none() {
        return Err(format!("Unknown series: {}", sel.series).into());
    }
    if let Some(first) = catalog.power_options(&sel.series).first() {
        sel.power = first.value.clone();
    }

    if sel.brand.is_empty() {
        sel.brand = catalog.competitor_brands().next().map(String::from).ok_or("Catalog has no competitors")?;
    }
    let brand = catalog.resolve_brand(&sel.brand).ok_or_else(|| format!("Unknown brand: {}", sel.brand))?;
    sel.brand = s!(brand);

    if sel.product.is_empty() {
        return Err("Missing --product (see --list)".into());
    }
    sel.product = sel.product.to_ascii_uppercase();
    if catalog.get_competitor_spec(&sel.brand, &sel.product).is_none() {
        return Err(format!("Unknown {} product: {}", sel.brand, sel.product).into());
    }
    Ok(())
}
