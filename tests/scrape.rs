// tests/scrape.rs
//
// Spec extraction from fixture product pages.
//
use pretty_assertions::assert_eq;
use vfd_compare::live::endpoints::endpoint_for;
use vfd_compare::live::scrape::{
    extract_product_name, extract_specifications, extract_specs_alternative, DEFAULT_CATEGORY,
    FALLBACK_CATEGORY, UNKNOWN_PRODUCT,
};

const ABB_PAGE: &str = r#"<html><body>
<div class="product-header"><H1>ABB ACS880 &amp; friends</H1></div>
<TABLE class="abb Technical-Data">
  <tr><td>Stray row</td><td>x</td></tr>
  <tr class="category-header"><th colspan="2">Digital Inputs</th></tr>
  <tr><td>Programmable digital inputs</td><td> 6 </td></tr>
  <tr><th>Analogue Input</th></tr>
  <tr><td>Analogue inputs</td><td>middle</td><td>3&nbsp;(isolated)</td></tr>
  <tr><td class="category-label">Nothing Below</td><td></td></tr>
</TABLE>
<table class="other"><tr><td>Ignored</td><td>1</td></tr></table>
</body></html>"#;

const YASKAWA_PAGE: &str = r#"<html><body>
<h1 class="main-product-name">Yaskawa GA800</h1>
<dl>
  <dt>Input voltage</dt><dd>400 V</dd>
  <dt>Overload capacity</dt><dd>150% <b>for</b> 60 s</dd>
</dl>
<span data-spec-name="IP Rating" data-spec-value="IP20"></span>
<div data-spec-name="Weight">12 kg</div>
</body></html>"#;

#[test]
fn table_rows_grouped_under_header_rows() {
    let profile = endpoint_for("ABB").unwrap().profile;
    let specs = extract_specifications(ABB_PAGE, &profile);

    let cats: Vec<&str> = specs.keys().map(String::as_str).collect();
    assert_eq!(cats, vec![DEFAULT_CATEGORY, "Digital Inputs", "Analogue Input"]);

    assert_eq!(specs[DEFAULT_CATEGORY]["Stray row"], "x");
    assert_eq!(specs["Digital Inputs"]["Programmable digital inputs"], "6");
    // label = first cell, value = last cell, entities decoded
    assert_eq!(specs["Analogue Input"]["Analogue inputs"], "3 (isolated)");
}

#[test]
fn unmarked_tables_are_ignored() {
    let profile = endpoint_for("ABB").unwrap().profile;
    let specs = extract_specifications(ABB_PAGE, &profile);
    assert!(specs.values().all(|c| !c.contains_key("Ignored")));
}

#[test]
fn falls_back_to_definition_lists_and_data_attributes() {
    let profile = endpoint_for("Yaskawa").unwrap().profile;
    let specs = extract_specifications(YASKAWA_PAGE, &profile);

    assert_eq!(specs.len(), 1);
    let tech = &specs[FALLBACK_CATEGORY];
    assert_eq!(tech["Input voltage"], "400 V");
    assert_eq!(tech["Overload capacity"], "150% for 60 s");
    assert_eq!(tech["IP Rating"], "IP20");
    assert_eq!(tech["Weight"], "12 kg");
}

#[test]
fn alternative_is_empty_without_markup() {
    assert!(extract_specs_alternative("<p>nothing here</p>").is_empty());
}

#[test]
fn product_name_lookup_order() {
    assert_eq!(extract_product_name(ABB_PAGE), "ABB ACS880 & friends");
    assert_eq!(extract_product_name(YASKAWA_PAGE), "Yaskawa GA800");
    assert_eq!(
        extract_product_name(r#"<h1>Site</h1><h1 class="x product-title">FC 302</h1>"#),
        "FC 302"
    );
    assert_eq!(extract_product_name("<h1>  </h1><h1>Plain</h1>"), "Plain");
    assert_eq!(extract_product_name("<p>no heading</p>"), UNKNOWN_PRODUCT);
}
