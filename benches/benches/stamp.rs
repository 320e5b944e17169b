// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use furrow_terrain::{CursorConfig, Editor, EditorConfig, Lattice};

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");
    for &n in &[32u32, 128, 512] {
        group.throughput(Throughput::Elements(u64::from(n) * u64::from(n)));
        group.bench_function(format!("new_n{}", n), |b| {
            b.iter(|| black_box(Lattice::new(n, n)));
        });
    }
    group.finish();
}

fn bench_stamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("stamp");
    for &radius in &[0.5f64, 4.0, 32.0] {
        let cfg = EditorConfig {
            width: 256,
            depth: 256,
            cursor: CursorConfig {
                radius,
                sensitivity: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut ed = Editor::new(&cfg).unwrap();
        ed.raise(1.0);
        ed.move_cursor(0.25, -0.25);
        group.throughput(Throughput::Elements(256 * 256));
        group.bench_function(format!("radius_{}", radius), |b| {
            // Every iteration stamps the same spot near the lattice center.
            b.iter_batched(
                || ed.clone(),
                |mut ed| black_box(ed.stamp()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lattice, bench_stamp);
criterion_main!(benches);
