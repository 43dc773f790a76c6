//! Benchmarks for the catalog conversion pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use siku_md::catalog::to_arabic;
use siku_md::markdown::reduce;
use siku_md::markup::tokenize;
use siku_md::{Converter, convert_html};

const FIXTURE: &str = include_str!("../tests/fixtures/catalog.html");

const NUMERALS: [&str; 6] = ["一", "二一", "十二", "二十一", "一百〇五", "一千二百三十四"];

/// Build a catalog page with `sections` × `entries` entries.
fn synthetic_catalog(sections: usize, entries: usize) -> String {
    let names = ["經部", "史部", "子部", "集部"];
    let mut html = String::from("<html><head><title>四庫全書存目叢書</title></head><body>");
    for s in 0..sections {
        html.push_str(&format!("<h2>{}</h2>", names[s % names.len()]));
        for e in 0..entries {
            html.push_str(&format!(
                "<ul><li><a href=\"#e{e}\">書{e}</a>十卷<font size=\"-2\">明刻本</font></li></ul>"
            ));
            html.push_str("<div>第十至第十二册</div><div>第二一册</div>");
        }
    }
    html.push_str("</body></html>");
    html
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_fixture(c: &mut Criterion) {
    c.bench_function("convert_fixture", |b| {
        b.iter(|| convert_html(FIXTURE));
    });
}

fn bench_large_catalog(c: &mut Criterion) {
    let html = synthetic_catalog(4, 500);
    let converter = Converter::new();

    c.bench_function("tokenize_large", |b| {
        b.iter(|| tokenize(&html));
    });

    c.bench_function("reduce_large", |b| {
        b.iter(|| reduce(tokenize(&html)));
    });

    c.bench_function("convert_large", |b| {
        b.iter(|| converter.convert(&html));
    });
}

fn bench_numerals(c: &mut Criterion) {
    c.bench_function("to_arabic", |b| {
        b.iter(|| {
            for n in NUMERALS {
                std::hint::black_box(to_arabic(n));
            }
        });
    });
}

criterion_group!(benches, bench_fixture, bench_large_catalog, bench_numerals);
criterion_main!(benches);
