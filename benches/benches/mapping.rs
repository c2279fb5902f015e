// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `scrollstory_range`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use scrollstory_range::{Progress, clamp, map_range, try_map_range};

fn offsets(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * 7.5 - 500.0).collect()
}

fn bench_map_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_range");
    for &n in &[1_000_usize, 100_000] {
        let scrolls = offsets(n);
        group.bench_with_input(BenchmarkId::new("unclamped", n), &scrolls, |b, scrolls| {
            b.iter(|| {
                let mut acc = 0.0;
                for &s in scrolls {
                    acc += map_range(black_box(1200.0), 4800.0, s, 0.0, 1.0);
                }
                black_box(acc)
            });
        });
        group.bench_with_input(BenchmarkId::new("clamped", n), &scrolls, |b, scrolls| {
            b.iter(|| {
                let mut acc = 0.0;
                for &s in scrolls {
                    acc += clamp(0.0, map_range(black_box(1200.0), 4800.0, s, 0.0, 1.0), 1.0);
                }
                black_box(acc)
            });
        });
        group.bench_with_input(BenchmarkId::new("checked", n), &scrolls, |b, scrolls| {
            b.iter(|| {
                let mut ok = 0_usize;
                for &s in scrolls {
                    let mapped = try_map_range(black_box(1200.0), 4800.0, s, 0.0, 1.0);
                    ok += usize::from(mapped.is_ok());
                }
                black_box(ok)
            });
        });
    }
    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let scrolls = offsets(10_000);
    c.bench_function("progress/zoom_split", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &s in &scrolls {
                let p = Progress::from_scroll(black_box(1350.0), 3000.0, s);
                acc += p.sub_window(0.0, 0.6).get() + p.sub_window(0.545, 1.0).get();
            }
            black_box(acc)
        });
    });
    c.bench_function("progress/step_index", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for &s in &scrolls {
                acc += Progress::from_scroll(black_box(9000.0), 13_900.0, s).step_index(10);
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_map_range, bench_progress);
criterion_main!(benches);
