//! Benchmarks for constraint distribution and nested layout drawing.
//!
//! Run with: cargo bench -p tessera-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_layout::{
    Component, Constraint, ConstraintSet, Fill, Linear, Placement, Rect, Split, Stack,
    calculate_constraints,
};
use tessera_render::Screen;
use tessera_style::Theme;

fn mixed_sets(n: usize) -> Vec<ConstraintSet> {
    (0..n)
        .map(|i| match i % 3 {
            0 => ConstraintSet::length(3).min(1),
            1 => ConstraintSet::percentage(0.1).max(20),
            _ => ConstraintSet::ratio((i % 5 + 1) as f64),
        })
        .collect()
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/distribute");
    for n in [4usize, 32, 256] {
        let sets = mixed_sets(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("mixed", n), &sets, |b, sets| {
            b.iter(|| black_box(calculate_constraints(black_box(sets), 200)))
        });
    }
    group.finish();
}

fn dashboard() -> impl Component {
    let sidebar = Linear::vbox()
        .spacing(1)
        .child(Fill, Constraint::length(3))
        .child(Fill, Constraint::ratio(1.0))
        .child(Fill, Constraint::length(1));
    let grid = Linear::hbox()
        .spacing(1)
        .child(Fill, Constraint::ratio(1.0))
        .child(Fill, Constraint::ratio(2.0))
        .child(Fill, Constraint::ratio(1.0));
    Stack::new()
        .child(
            Split::horizontal(sidebar, grid).constraint(Constraint::length(24)).divider(true),
            Placement::fill(),
        )
        .child(Fill, Placement::centered(Constraint::percentage(0.5), Constraint::length(8)))
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/draw");
    let theme = Theme::default();
    for (w, h) in [(80u16, 24u16), (200, 60)] {
        let mut root = dashboard();
        let mut screen = Screen::new(w, h);
        group.bench_function(BenchmarkId::new("dashboard", format!("{w}x{h}")), |b| {
            b.iter(|| {
                root.draw(&mut screen, Rect::new(0, 0, w, h), &theme);
                black_box(&screen);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_distribute, bench_draw);
criterion_main!(benches);
