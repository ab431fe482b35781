//! Benchmarks for the per-request routing helpers
//!
//! URL classification, response conversion and matcher evaluation run on
//! every invocation, so they are measured here against typical inputs.

use bytes::Bytes;
use criterion::{criterion_group, criterion_main, Criterion};
use serverless_routing::middleware::{get_middleware_match, MiddlewareManifest};
use serverless_routing::response::BinaryContentTypes;
use serverless_routing::routing::Query;
use serverless_routing::{convert_query, convert_res, get_url_parts, is_external};
use std::hint::black_box;

const API_MATCHER: &str = r#"{"middleware":{"/":{"matchers":[
    {"regexp":"^(?:\\/(_next\\/data\\/[^/]{1,}))?\\/api(?:\\/((?:[^\\/#\\?]+?)(?:\\/(?:[^\\/#\\?]+?))*))?(.json)?[\\/#\\?]?$"}
]}}}"#;

fn bench_url_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("url_helpers");

    group.bench_function("is_external", |b| {
        b.iter(|| {
            black_box(is_external(
                black_box(Some("https://docs.example/guide?section=2")),
                black_box(Some("app.example")),
            ))
        });
    });

    group.bench_function("get_url_parts_external", |b| {
        b.iter(|| black_box(get_url_parts(black_box("https://docs.example/guide?a=1"), true)));
    });

    group.finish();
}

fn bench_response_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_conversion");
    let classifier = BinaryContentTypes::default();

    for (name, content_type, size) in [
        ("text_4kb", "text/html; charset=utf-8", 4 * 1024),
        ("binary_64kb", "image/png", 64 * 1024),
    ] {
        let response = http::Response::builder()
            .header("content-type", content_type)
            .body(Bytes::from(vec![b'x'; size]))
            .expect("static response parts are valid");

        group.bench_function(name, |b| {
            b.iter(|| black_box(convert_res(black_box(&response), &classifier)));
        });
    }

    group.bench_function("convert_query", |b| {
        let query: Query = serde_json::from_str(r#"{"tag":["a","b","c"],"page":"2","q":"term"}"#)
            .expect("query fixture is valid JSON");
        b.iter(|| black_box(convert_query(black_box(&query))));
    });

    group.finish();
}

fn bench_middleware_match(c: &mut Criterion) {
    let manifest: MiddlewareManifest =
        serde_json::from_str(API_MATCHER).expect("manifest fixture is valid JSON");
    let matches = get_middleware_match(&manifest).expect("fixture matcher compiles");

    c.bench_function("middleware_should_run", |b| {
        b.iter(|| {
            black_box(matches.should_run(black_box("/api/users/42")));
            black_box(matches.should_run(black_box("/static/app.js")));
        });
    });
}

criterion_group!(
    benches,
    bench_url_helpers,
    bench_response_conversion,
    bench_middleware_match
);
criterion_main!(benches);
