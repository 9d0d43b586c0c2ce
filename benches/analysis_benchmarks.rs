//! Performance benchmarks for the analysis pipeline.
//!
//! Covers each stage on month-sized inputs:
//! - Normalizing rows with multi-role cells
//! - Aggregating shares into a period result
//! - Comparing two periods
//! - The full endpoint round trip
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use nonconformance_engine::analysis::{aggregate, compare, normalize};
use nonconformance_engine::api::{AnalysisRequest, AppState, create_router};
use nonconformance_engine::config::ConfigLoader;
use nonconformance_engine::models::RawRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const PRODUCTION_CELLS: [&str; 6] = [
    "Cutting",
    "Bending/Assembly",
    "Painting",
    "Storage/Cutting/",
    "Assembly",
    "Welding/Bending",
];

const OFFICE_CELLS: [&str; 5] = ["", "Manager", "Estimator/Designer", "", "Programmer"];

/// Creates `count` rows cycling through typical role cells and costs.
fn create_rows(count: usize, offset: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let n = i + offset;
            RawRecord::new(
                PRODUCTION_CELLS[n % PRODUCTION_CELLS.len()],
                OFFICE_CELLS[n % OFFICE_CELLS.len()],
                (n as i64 % 97) * 125 + 40,
            )
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for size in [100usize, 1_000, 10_000] {
        let rows = create_rows(size, 0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| normalize(black_box(rows)).unwrap())
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in [100usize, 1_000, 10_000] {
        let shares = normalize(&create_rows(size, 0)).unwrap();
        group.throughput(Throughput::Elements(shares.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &shares, |b, shares| {
            b.iter(|| aggregate(black_box(shares)))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let current = aggregate(&normalize(&create_rows(1_000, 0)).unwrap());
    let previous = aggregate(&normalize(&create_rows(1_000, 3)).unwrap());

    c.bench_function("compare_1000_rows", |b| {
        b.iter(|| compare(black_box(&current), black_box(&previous)))
    });
}

fn bench_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let state = AppState::new(ConfigLoader::default());
    let mut request = AnalysisRequest::new(create_rows(1_000, 0));
    request.previous_rows = Some(create_rows(1_000, 3));
    let body = serde_json::to_string(&request).expect("Failed to serialize request");

    c.bench_function("endpoint_1000_rows_with_previous", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/analyze")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            }
        })
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_aggregate,
    bench_compare,
    bench_endpoint
);
criterion_main!(benches);
