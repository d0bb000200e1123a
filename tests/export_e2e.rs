// tests/export_e2e.rs
use std::fs;

use pretty_assertions::assert_eq;
use vfd_compare::compare::{compare, SpecDocument};
use vfd_compare::config::options::{ExportFormat, ExportOptions};
use vfd_compare::csv::rows_to_string;
use vfd_compare::file::{export_comparison, export_string, headers_apply};
use vfd_compare::report::Report;

fn docs() -> (SpecDocument, SpecDocument) {
    let base = SpecDocument::new("FC 302", "Danfoss")
        .with_category("Digital Inputs", [("Programmable digital inputs", "6"), ("Logic", "PNP, NPN")]);
    let comp = SpecDocument::new("ACS880", "ABB")
        .with_category("Digital Inputs", [("Programmable digital inputs", "8"), ("Logic", "PNP, NPN")]);
    (base, comp)
}

#[test]
fn csv_with_and_without_headers() {
    let (b, c) = docs();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    let mut opts = ExportOptions::default();
    assert_eq!(
        export_string(&opts, &report, false),
        "Category,Specification,FC 302,ACS880,Advantage\n\
         Digital Inputs,Programmable digital inputs,6,8,ABB\n\
         Digital Inputs,Logic,\"PNP, NPN\",\"PNP, NPN\",Similar\n"
    );

    opts.include_headers = false;
    assert_eq!(
        export_string(&opts, &report, true),
        "Digital Inputs,Programmable digital inputs,6,8,ABB\n"
    );
}

#[test]
fn tsv_does_not_quote_commas() {
    let (b, c) = docs();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    let opts = ExportOptions { format: ExportFormat::Tsv, include_headers: false, ..ExportOptions::default() };
    let out = export_string(&opts, &report, false);
    assert_eq!(out.lines().nth(1), Some("Digital Inputs\tLogic\tPNP, NPN\tPNP, NPN\tSimilar"));
}

#[test]
fn writes_file_and_creates_directories() {
    let dir = tempfile::tempdir().unwrap();
    let (b, c) = docs();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    let mut opts = ExportOptions { format: ExportFormat::Text, ..ExportOptions::default() };
    let target = dir.path().join("nested").join("deeper").join("report");
    opts.set_path(target.to_str().unwrap());

    let written = export_comparison(&opts, &report, false).unwrap();
    assert!(written.to_string_lossy().ends_with("report.txt"));
    let body = fs::read_to_string(&written).unwrap();
    assert_eq!(body, report.render_text());
}

#[test]
fn refuses_file_in_place_of_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let (b, c) = docs();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("out.csv").to_str().unwrap());
    assert!(export_comparison(&opts, &report, false).is_err());
}

#[test]
fn csv_quoting_rules() {
    let rows = vec![vec!["say \"hi\"".to_string(), "two\nlines".to_string(), "plain".to_string()]];
    assert_eq!(rows_to_string(&rows, None, ','), "\"say \"\"hi\"\"\",\"two\nlines\",plain\n");

    let headers = vec!["a".to_string(), "b".to_string()];
    assert_eq!(rows_to_string(&[], Some(&headers), '\t'), "a\tb\n");
}

#[test]
fn header_toggle_only_for_delimited_formats() {
    assert!(headers_apply(ExportFormat::Csv));
    assert!(headers_apply(ExportFormat::Tsv));
    assert!(!headers_apply(ExportFormat::Text));
}
