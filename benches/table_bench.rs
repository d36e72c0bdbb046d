//! Benchmarks for kvtable operations

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kvtable::KvTable;

fn populated(n: usize) -> KvTable {
    let table = KvTable::new();
    for i in 0..n {
        let key = format!("key{}", i);
        let value = format!("value{}", i);
        table.put(&key, Some(value.as_str()));
    }
    table
}

fn table_benchmarks(c: &mut Criterion) {
    // Insert throughput at growing table sizes (linear duplicate scan
    // dominates, so cost per insert grows with n)
    let mut group = c.benchmark_group("put_unique");
    for n in [10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| populated(n));
        });
    }
    group.finish();

    // Update an existing key (scan + value replacement, no growth)
    c.bench_function("put_update", |b| {
        let table = populated(100);
        b.iter(|| table.put(black_box("key50"), Some(black_box("fresh"))));
    });

    // Lookup hit at the front, middle, and end of the scan
    let mut group = c.benchmark_group("get_value_hit");
    let table = populated(1000);
    for key in ["key0", "key500", "key999"] {
        group.bench_with_input(BenchmarkId::from_parameter(key), &key, |b, &key| {
            b.iter(|| table.get_value(black_box(key)));
        });
    }
    group.finish();

    // Lookup miss scans the whole table
    c.bench_function("get_value_miss", |b| {
        let table = populated(1000);
        b.iter(|| table.get_value(black_box("absent")));
    });

    // Full positional iteration, one lock acquisition per index
    c.bench_function("iterate_by_index", |b| {
        let table = populated(1000);
        b.iter(|| {
            for i in 0..table.count() {
                black_box(table.get_by_index(i));
            }
        });
    });
}

criterion_group!(benches, table_benchmarks);
criterion_main!(benches);
