// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::convert::Infallible;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use furrow_fsm::adapters::terrain::sculpt_machine;
use furrow_fsm::mouse::{MouseAction, MouseMachine, MouseState, mouse_machine};
use furrow_terrain::{Editor, EditorConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u32 << 24) as f32) - 0.5
    }
}

#[derive(Clone, Copy)]
enum Event {
    Button(MouseAction),
    Move(f32, f32),
}

/// A drag-heavy input trace: press, a run of moves, release, with scroll notches between strokes.
fn gen_trace(strokes: usize, moves_per_stroke: usize) -> Vec<Event> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(strokes * (moves_per_stroke + 3));
    for i in 0..strokes {
        out.push(Event::Button(if i % 2 == 0 {
            MouseAction::ScrollUp
        } else {
            MouseAction::ScrollDown
        }));
        out.push(Event::Button(MouseAction::LeftPress));
        for _ in 0..moves_per_stroke {
            out.push(Event::Move(rng.next_f32() * 10.0, rng.next_f32() * 10.0));
        }
        out.push(Event::Button(MouseAction::LeftRelease));
    }
    out
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter");
    let trace = gen_trace(64, 32);
    group.throughput(Throughput::Elements(trace.len() as u64));
    group.bench_function("replay", |b| {
        b.iter_batched(
            || {
                let mut m: MouseMachine<(f32, f32)> = mouse_machine();
                m.on(
                    MouseState::Default,
                    MouseAction::LeftPress,
                    MouseState::LeftPressed,
                    |_| Ok(()),
                )
                .unwrap();
                m.on_move(
                    MouseState::LeftPressed,
                    MouseAction::Movement,
                    MouseState::LeftPressed,
                    |acc, dx, dz| {
                        acc.0 += dx;
                        acc.1 += dz;
                        Ok(())
                    },
                )
                .unwrap();
                m.on(
                    MouseState::LeftPressed,
                    MouseAction::LeftRelease,
                    MouseState::Default,
                    |_| Ok(()),
                )
                .unwrap();
                (m, (0.0_f32, 0.0_f32))
            },
            |(mut m, mut acc)| {
                for ev in &trace {
                    let _ = match *ev {
                        Event::Button(a) => m.fire(&mut acc, a),
                        Event::Move(dx, dz) => {
                            m.fire_with(&mut acc, MouseAction::Movement, (dx, dz))
                        }
                    };
                }
                black_box(acc);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_sculpt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sculpt");
    for &n in &[16u32, 64] {
        let trace = gen_trace(16, 32);
        group.throughput(Throughput::Elements(trace.len() as u64));
        group.bench_function(format!("replay_lattice_n{}", n), |b| {
            b.iter_batched(
                || {
                    let cfg = EditorConfig {
                        width: n,
                        depth: n,
                        ..Default::default()
                    };
                    let m = sculpt_machine::<Infallible>().unwrap();
                    (m, Editor::new(&cfg).unwrap())
                },
                |(mut m, mut ed)| {
                    for ev in &trace {
                        let _ = match *ev {
                            Event::Button(a) => m.fire(&mut ed, a),
                            Event::Move(dx, dz) => {
                                m.fire_with(&mut ed, MouseAction::Movement, (dx, dz))
                            }
                        };
                    }
                    black_box(ed.take_changes());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_counter, bench_sculpt);
criterion_main!(benches);
