// tests/export_options.rs
//
// Tests for ExportOptions path/extension logic.
//
use std::path::{Path, PathBuf};
use vfd_compare::config::options::{ExportFormat, ExportOptions};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

#[test]
fn default_path_ext_follows_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(norm(&opts.out_path()), norm(Path::new("out/comparison.csv")));

    // No user extension → extension reflects the new format
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("comparison.tsv"));
    opts.format = ExportFormat::Text;
    assert!(opts.out_path().to_string_lossy().ends_with("comparison.txt"));
}

#[test]
fn format_change_keeps_user_extension() {
    let mut export = ExportOptions::default();
    export.set_path("out/drives/custom.data");
    export.format = ExportFormat::Tsv;
    assert_eq!(norm(&export.out_path()), norm(Path::new("out/drives/custom.data")));
}

#[test]
fn suggested_stem_only_replaces_default() {
    let mut export = ExportOptions::default();
    export.suggest_stem("FC_302_vs_ACS880");
    assert!(export.out_path().to_string_lossy().ends_with("FC_302_vs_ACS880.csv"));

    // Once a real stem is in place, later suggestions are ignored
    export.suggest_stem("FC_51_vs_ACS150");
    assert!(export.out_path().to_string_lossy().ends_with("FC_302_vs_ACS880.csv"));

    let mut typed = ExportOptions::default();
    typed.set_path("reports/mine");
    typed.suggest_stem("FC_302_vs_ACS880");
    assert_eq!(norm(&typed.out_path()), norm(Path::new("reports/mine.csv")));
}

#[test]
fn format_names_parse_case_insensitively() {
    assert_eq!(ExportFormat::parse("CSV"), Some(ExportFormat::Csv));
    assert_eq!(ExportFormat::parse("tsv"), Some(ExportFormat::Tsv));
    assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Text));
    assert_eq!(ExportFormat::parse("Text"), Some(ExportFormat::Text));
    assert_eq!(ExportFormat::parse("pdf"), None);
}
