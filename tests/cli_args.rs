// tests/cli_args.rs
use std::path::Path;

use pretty_assertions::assert_eq;
use vfd_compare::catalog::Catalog;
use vfd_compare::cli::{list_catalog, parse_args, Action};
use vfd_compare::config::options::{ExportFormat, ProxyKind};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn compare_selection_is_normalised() {
    let c = Catalog::load_bundled().unwrap();
    let a = parse_args(args(&["-s", "fc302", "-b", "abb", "-p", "acs880"]), &c).unwrap();

    assert_eq!(a.action, Action::Compare);
    assert_eq!(a.options.compare.series, "FC302");
    assert_eq!(a.options.compare.power, "0.25-75-hvac");
    assert_eq!(a.options.compare.brand, "ABB");
    assert_eq!(a.options.compare.product, "ACS880");
    assert!(!a.options.compare.use_live_data);
    assert!(!a.to_file);
    assert_eq!(a.format(), ExportFormat::Text);
}

#[test]
fn brand_defaults_to_first_competitor() {
    let c = Catalog::load_bundled().unwrap();
    let a = parse_args(args(&["--series", "FC51", "--product", "ACS150"]), &c).unwrap();
    assert_eq!(a.options.compare.brand, "ABB");
}

#[test]
fn live_and_cache_flags() {
    let c = Catalog::load_bundled().unwrap();
    let a = parse_args(
        args(&["-s", "FC302", "-p", "ACS880", "--live", "--no-cache", "--proxy", "direct"]),
        &c,
    )
    .unwrap();
    assert!(a.options.compare.use_live_data);
    assert!(!a.options.live.cache_enabled);
    assert_eq!(a.options.live.proxy, ProxyKind::Direct);
}

#[test]
fn output_format_inference() {
    let c = Catalog::load_bundled().unwrap();
    let base = ["-s", "FC302", "-p", "ACS880"];

    let with = |extra: &[&str]| {
        let mut v: Vec<&str> = base.to_vec();
        v.extend_from_slice(extra);
        parse_args(args(&v), &c).unwrap()
    };

    let a = with(&["-o", "out/cmp.tsv"]);
    assert!(a.to_file);
    assert_eq!(a.format(), ExportFormat::Tsv);
    assert!(!a.options.export.include_headers);

    let a = with(&["-o", "out/cmp", "--include-headers"]);
    assert_eq!(a.format(), ExportFormat::Csv);
    assert!(a.options.export.include_headers);

    let a = with(&["-o", "out/cmp.data"]);
    assert_eq!(a.format(), ExportFormat::Csv);
    assert!(a.options.export.out_path().ends_with(Path::new("cmp.data")));

    let a = with(&["--format", "csv"]);
    assert!(!a.to_file);
    assert_eq!(a.format(), ExportFormat::Csv);

    let a = with(&["-o", "x.csv", "--format", "txt"]);
    assert_eq!(a.format(), ExportFormat::Text);
}

#[test]
fn non_compare_actions_skip_selection() {
    let c = Catalog::load_bundled().unwrap();
    assert_eq!(parse_args(args(&["--list"]), &c).unwrap().action, Action::List);
    assert_eq!(parse_args(args(&["--cache-stats"]), &c).unwrap().action, Action::CacheStats);
    assert_eq!(parse_args(args(&["--clear-cache"]), &c).unwrap().action, Action::ClearCache);
    assert_eq!(parse_args(args(&["-h"]), &c).unwrap().action, Action::Help);
}

#[test]
fn bad_input_is_reported() {
    let c = Catalog::load_bundled().unwrap();
    let err = |v: &[&str]| parse_args(args(v), &c).unwrap_err().to_string();

    assert_eq!(err(&[]), "Missing --series (see --list)");
    assert_eq!(err(&["-s", "FC999", "-p", "ACS880"]), "Unknown series: FC999");
    assert_eq!(err(&["-s", "FC302"]), "Missing --product (see --list)");
    assert_eq!(err(&["-s", "FC302", "-b", "Acme", "-p", "X"]), "Unknown brand: Acme");
    assert_eq!(err(&["-s", "FC302", "-p", "ACS999"]), "Unknown ABB product: ACS999");
    assert_eq!(err(&["--bogus"]), "Unknown arg: --bogus");
    assert_eq!(err(&["--proxy", "tor"]), "Unknown proxy: tor");
    assert_eq!(err(&["--format", "pdf"]), "Unknown format: pdf");
    assert_eq!(err(&["-s"]), "Missing value for --series");
}

#[test]
fn listing_shows_series_and_lineup() {
    let c = Catalog::load_bundled().unwrap();
    let text = list_catalog(&c);
    assert!(text.starts_with("Danfoss series:\n"));
    assert!(text.contains("FC302"));
    assert!(text.contains("[0.25 - 75 kW, 90 - 1200 kW]"));
    assert!(text.contains("\nABB products:\n"));
    let acs150 = text.find("ACS150").unwrap();
    let acq580 = text.find("ACQ580").unwrap();
    assert!(acs150 < acq580);
}
