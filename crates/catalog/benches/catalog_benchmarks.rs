use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use romantica_catalog::{CatalogState, LoadPhase, StaticRecordSource};
use romantica_products::{Product, RawRecord, transform_records};

/// Fixture rows repeated to `count` rows.
fn rows(count: usize) -> Vec<RawRecord> {
    StaticRecordSource::fixture()
        .rows()
        .iter()
        .cycle()
        .take(count)
        .cloned()
        .collect()
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_records");

    for count in [9usize, 100, 1_000] {
        let input = rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| transform_records(black_box(input)).unwrap());
        });
    }

    group.finish();
}

fn bench_category_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_category");

    for count in [9usize, 100, 1_000] {
        let products: Vec<Product> = transform_records(&rows(count)).unwrap();
        let state = CatalogState {
            phase: LoadPhase::Loaded,
            products,
            ..CatalogState::default()
        };
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &state, |b, state| {
            b.iter(|| state.get_by_category(black_box("gifts")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transform, bench_category_filter);
criterion_main!(benches);
