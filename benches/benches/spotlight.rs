// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout pass and compositor throughput.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kurbo::{Circle, Rect, Size};
use understory_spotlight::{HighlightShape, SpotlightStyle, composite, layout};

const SCREEN: Size = Size::new(390.0, 844.0);

fn bench_layout(c: &mut Criterion) {
    let highlight = Rect::new(16.0, 96.0, 374.0, 136.0);
    let button = Size::new(86.0, 36.0);
    c.bench_function("layout", |b| {
        b.iter(|| layout(black_box(Some(highlight)), black_box(button), black_box(SCREEN)));
    });
}

fn bench_composite(c: &mut Criterion) {
    let style = SpotlightStyle::default();
    let shapes = [
        ("rect", HighlightShape::Rect(Rect::new(16.0, 96.0, 374.0, 136.0))),
        ("circle", HighlightShape::Circle(Circle::new((338.0, 768.0), 35.0))),
    ];
    let mut group = c.benchmark_group("composite");
    group.sample_size(20);
    for (name, shape) in shapes {
        for scale in [1.0, 3.0] {
            group.bench_with_input(BenchmarkId::new(name, scale), &scale, |b, &scale| {
                b.iter(|| composite(black_box(&shape), SCREEN, &style, scale));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_composite);
criterion_main!(benches);
