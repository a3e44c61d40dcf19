//! Performance benchmarks for the incentive dashboard.
//!
//! Covers the pure aggregation functions over growing entry collections and
//! a full `/stats` request through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use incentive_dashboard::api::{AppState, create_router};
use incentive_dashboard::calculation::{
    IncentivePolicy, calculate_stats, filter_by_year, monthly_breakdown, monthly_time_series,
    staff_yearly_summary,
};
use incentive_dashboard::models::{Entry, Settings};
use incentive_dashboard::store::LocalEntryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds `count` entries spread over 40 staff, 4 sales people and two years.
fn create_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let billing = 400_000 + (i as i64 % 17) * 25_000;
            Entry {
                id: i as i64,
                name: format!("staff_{:02}", i % 40),
                sales: format!("sales_{}", i % 4),
                affiliation: "Employee".to_string(),
                client: format!("client_{}", i % 9),
                billing: Decimal::from(billing),
                cost: Decimal::from(billing - 60_000 - (i as i64 % 5) * 10_000),
                incentive_target: Decimal::from(40_000),
                month: format!("{}-{:02}", 2025 + (i / 12) % 2, i % 12 + 1),
            }
        })
        .collect()
}

fn bench_stats(c: &mut Criterion) {
    let policy = IncentivePolicy::default();
    let mut group = c.benchmark_group("calculate_stats");

    for size in [100, 1_000, 10_000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(calculate_stats(entries, &policy)))
        });
    }

    group.finish();
}

fn bench_series(c: &mut Criterion) {
    let policy = IncentivePolicy::default();
    let mut group = c.benchmark_group("monthly_time_series");

    for size in [100, 1_000, 10_000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(monthly_time_series(entries, "2025", &policy)))
        });
    }

    group.finish();
}

fn bench_staff_summary(c: &mut Criterion) {
    let policy = IncentivePolicy::default();
    let mut group = c.benchmark_group("staff_yearly_summary");

    for size in [100, 1_000, 10_000] {
        let entries = create_entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(staff_yearly_summary(filter_by_year(entries, "2025"), &policy)))
        });
    }

    group.finish();
}

fn bench_breakdown(c: &mut Criterion) {
    let entries = create_entries(10_000);

    c.bench_function("monthly_breakdown_10000", |b| {
        b.iter(|| black_box(monthly_breakdown(&entries)))
    });
}

/// Benchmark: `/stats` for a yearly view through the router.
fn bench_stats_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("entries.json");
    let document = serde_json::json!({ "entries": create_entries(1_000) });
    std::fs::write(&path, document.to_string()).unwrap();

    let store = rt
        .block_on(LocalEntryStore::open(&path, None))
        .expect("Failed to open store");
    let state = AppState::new(
        Arc::new(store),
        IncentivePolicy::default(),
        Settings::default(),
    );
    let router = create_router(state);

    c.bench_function("stats_request_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/stats?view=yearly&year=2025")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_stats,
    bench_series,
    bench_staff_summary,
    bench_breakdown,
    bench_stats_request,
);
criterion_main!(benches);
