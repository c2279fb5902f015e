// Copyright 2025 the Scrollstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for tick fan-out, the threshold registry, and a full home page tick.

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

use scrollstory_home::{HomeLayout, HomePage};
use scrollstory_scroll::{
    MeasuredRect, ScrollDispatcher, ScrollEvent, StyleVariables, Subscription,
};
use scrollstory_threshold::{SharedThresholds, Threshold, ThresholdRegistry};

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[1_usize, 8, 64] {
        let dispatcher = ScrollDispatcher::new();
        let sink = Rc::new(Cell::new(0.0));
        let _subs: Vec<Subscription> = (0..n)
            .map(|_| {
                let sink = sink.clone();
                dispatcher.subscribe(move |e| sink.set(sink.get() + e.scroll))
            })
            .collect();
        let mut scroll = 0.0;
        group.bench_with_input(BenchmarkId::new("subscribers", n), &n, |b, _| {
            b.iter(|| {
                scroll += 1.0;
                black_box(dispatcher.dispatch(ScrollEvent::at(scroll)))
            });
        });
    }
    group.bench_function("subscribe_drop", |b| {
        let dispatcher = ScrollDispatcher::new();
        b.iter(|| drop(black_box(dispatcher.subscribe(|_| {}))));
    });
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let ids: Vec<String> = (0..64).map(|i| format!("milestone-{i}")).collect();
    c.bench_function("registry/insert_64", |b| {
        b.iter_batched(
            ThresholdRegistry::new,
            |mut registry| {
                for (i, id) in ids.iter().enumerate() {
                    let _ = registry.add_threshold(Threshold::new(id.clone(), i as f64 * 100.0));
                }
                registry
            },
            BatchSize::SmallInput,
        );
    });

    let mut filled = ThresholdRegistry::new();
    for (i, id) in ids.iter().enumerate() {
        let _ = filled.add_threshold(Threshold::new(id.clone(), (64 - i) as f64 * 100.0));
    }
    c.bench_function("registry/sorted_by_value_64", |b| {
        b.iter(|| black_box(filled.sorted_by_value().len()));
    });
    c.bench_function("registry/last_passed_64", |b| {
        b.iter(|| black_box(filled.last_passed(black_box(3210.0))));
    });
}

fn bench_home_tick(c: &mut Criterion) {
    let dispatcher = ScrollDispatcher::new();
    let mut page = HomePage::new(
        dispatcher.clone(),
        SharedThresholds::new(),
        StyleVariables::new(),
        StyleVariables::new(),
    );
    let mut layout = HomeLayout::new(Size::new(1440.0, 900.0));
    layout.zoom = Some(MeasuredRect::new(900.0, 1440.0, 3000.0));
    layout.features = Some(MeasuredRect::new(10_800.0, 1440.0, 4000.0));
    page.set_layout(layout, Some(15_700.0));
    page.mount();

    let mut scroll = 0.0;
    c.bench_function("home/tick", |b| {
        b.iter(|| {
            scroll = (scroll + 37.0) % 15_700.0;
            dispatcher.dispatch(ScrollEvent::at(scroll));
        });
    });
    black_box(page.theme());
}

criterion_group!(benches, bench_dispatch, bench_registry, bench_home_tick);
criterion_main!(benches);
