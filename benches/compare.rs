// benches/compare.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use vfd_compare::{
    catalog::Catalog,
    compare::Comparator,
    live::{endpoints::endpoint_for, scrape},
    report::Report,
};

fn sample_page(rows: usize) -> String {
    let mut page = String::from(r#"<h1 class="product-title">ACS880</h1><table class="technical-data">"#);
    for i in 0..rows {
        if i % 8 == 0 {
            page.push_str(&format!(r#"<tr class="category-header"><th>Group {i}</th></tr>"#));
        }
        page.push_str(&format!("<tr><td>Spec {i}</td><td>{i} kW</td></tr>"));
    }
    page.push_str("</table>");
    page
}

fn bench_compare(c: &mut Criterion) {
    let catalog = Catalog::load_bundled().expect("bundled catalog");
    let comparator = Comparator::default();

    c.bench_function("compare_full_catalog", |b| {
        b.iter(|| {
            let mut rows = 0;
            for brand in catalog.competitor_brands() {
                for (_, base) in catalog.baseline_series() {
                    for (_, rival) in catalog.competitor_products(brand) {
                        rows += comparator.compare(black_box(base), black_box(rival), brand).len();
                    }
                }
            }
            black_box(rows)
        })
    });

    let base = catalog.get_baseline_spec("FC302").expect("FC302");
    let rival = catalog.get_competitor_spec("ABB", "ACS880").expect("ACS880");
    let result = comparator.compare(base, rival, "ABB");
    c.bench_function("render_text", |b| {
        b.iter(|| {
            let report = Report::new("Danfoss", base, rival, black_box(&result));
            black_box(report.render_text().len())
        })
    });
}

fn bench_scrape(c: &mut Criterion) {
    let page = sample_page(200);
    let profile = endpoint_for("ABB").expect("ABB endpoint").profile;

    c.bench_function("extract_specifications", |b| {
        b.iter(|| {
            let specs = scrape::extract_specifications(black_box(&page), &profile);
            black_box(specs.len())
        })
    });
}

criterion_group!(benches, bench_compare, bench_scrape);
criterion_main!(benches);
