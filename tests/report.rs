// tests/report.rs
use pretty_assertions::assert_eq;
use vfd_compare::compare::{compare, SpecDocument, Verdict};
use vfd_compare::config::consts::{NO_ADVANTAGES, SUMMARY_LIMIT};
use vfd_compare::report::{summary, Report};

fn pair() -> (SpecDocument, SpecDocument) {
    let mut base = SpecDocument::new("FC 302", "Danfoss")
        .with_category("Digital Inputs", [("Programmable digital inputs", "6"), ("Logic", "PNP or NPN")])
        .with_category("Ratings", [("Overload capacity", "160%"), ("Protection rating", "IP20")]);
    base.series = Some("FC 302".into());
    let mut comp = SpecDocument::new("ABB ACS880", "ABB")
        .with_category("Digital Inputs", [("Programmable digital inputs", "8"), ("Logic", "PNP or NPN")])
        .with_category("Ratings", [("Overload capacity", "150%"), ("Protection rating", "IP21")]);
    comp.series = Some("ACS880".into());
    (base, comp)
}

#[test]
fn badges_and_headers() {
    let (b, c) = pair();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    assert_eq!(report.headers(), vec!["Category", "Specification", "FC 302", "ABB ACS880", "Advantage"]);
    assert_eq!(report.badge(Verdict::Baseline), "Danfoss");
    assert_eq!(report.badge(Verdict::Competitor), "ABB");
    assert_eq!(report.badge(Verdict::Equal), "Similar");
}

#[test]
fn table_rows_repeat_category_and_filter_equal() {
    let (b, c) = pair();
    let r = compare(&b, &c, "ABB");
    let report = Report::new("Danfoss", &b, &c, &r);

    let all = report.table_rows(false);
    assert_eq!(all.len(), 4);
    assert_eq!(all[1], vec!["Digital Inputs", "Logic", "PNP or NPN", "PNP or NPN", "Similar"]);

    let diffs = report.table_rows(true);
    assert_eq!(diffs.len(), 2);
    assert_eq!(diffs[0][0], "Digital Inputs");
    assert_eq!(diffs[0][4], "ABB");
    assert_eq!(diffs[1], vec!["Ratings", "Overload capacity", "160%", "150%", "Danfoss"]);
    // IP20 vs IP21: no direction, no "yes" → Similar, filtered out
    assert!(all.iter().any(|r| r[1] == "Protection rating" && r[4] == "Similar"));
}

#[test]
fn summary_caps_and_placeholder() {
    assert_eq!(summary(&[]), vec![NO_ADVANTAGES]);

    let many: Vec<String> = (0..15).map(|i| format!("Spec {i}: {i}")).collect();
    let top = summary(&many);
    assert_eq!(top.len(), SUMMARY_LIMIT);
    assert_eq!(top[0], "Spec 0: 0");
    assert_eq!(top[9], "Spec 9: 9");
}

#[test]
fn export_stem_uses_series_ids() {
    let (b, c) = pair();
    let r = compare(&b, &c, "ABB");
    assert_eq!(Report::new("Danfoss", &b, &c, &r).export_stem(), "FC_302_vs_ACS880");

    // Without series ids the model names are used
    let (b, c) = (SpecDocument::new("VLT Micro", "X"), SpecDocument::new("G120 (C)", "Y"));
    let r = compare(&b, &c, "Y");
    assert_eq!(Report::new("X", &b, &c, &r).export_stem(), "VLT_Micro_vs_G120_C");
}

#[test]
fn text_rendering_prints_category_once() {
    let (b, c) = pair();
    let r = compare(&b, &c, "ABB");
    let text = Report::new("Danfoss", &b, &c, &r).render_text();

    assert!(text.starts_with("Danfoss FC 302 vs ABB ABB ACS880\n"));
    assert_eq!(text.matches("Digital Inputs").count(), 1);
    assert_eq!(text.matches("Ratings").count(), 1);
    assert!(text.contains("Danfoss advantages:\n  - Overload capacity: 160%\n"));
    assert!(text.contains("ABB advantages:\n  - Programmable digital inputs: 8\n"));
    assert!(!text.contains("Data:"));
}
