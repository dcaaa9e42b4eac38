//! Benchmarks for cell construction, compositing, and SGR output.
//!
//! Run with: cargo bench -p tessera-render --bench cell_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_render::{Cell, Color, ColorProfile, Style, StyleCache};

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell/new");
    group.bench_function("ascii", |b| b.iter(|| black_box(Cell::new(black_box('a')))));
    group.bench_function("cjk", |b| b.iter(|| black_box(Cell::new(black_box('中')))));
    group.bench_function("emoji", |b| b.iter(|| black_box(Cell::new(black_box('🚀')))));
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let base = Cell::new('X').with_fg(Color::RED).with_bg(Color::BLUE);
    let content = Cell::new('y').with_fg(Color::GREEN);
    let tint = Cell {
        bg: Some(Color::BLACK),
        ..Cell::TRANSPARENT
    };

    let mut group = c.benchmark_group("cell/merge");
    group.bench_function("content", |b| b.iter(|| black_box(base.merge(black_box(&content)))));
    group.bench_function("transparent", |b| b.iter(|| black_box(base.merge(black_box(&tint)))));
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let cache = StyleCache::new(ColorProfile::TrueColor);
    let cells = [
        ("plain", Cell::new('a')),
        ("bold", Cell::new('a').with_style(Style::new().bold())),
        ("rgb", Cell::new('a').with_fg(Color::Rgb(10, 20, 30)).with_bg(Color::Indexed(200))),
    ];

    let mut group = c.benchmark_group("cell/render");
    for (name, cell) in cells {
        group.bench_function(format!("direct/{name}"), |b| b.iter(|| black_box(cell.render())));
        group.bench_function(format!("cached/{name}"), |b| {
            let mut out = String::with_capacity(64);
            b.iter(|| {
                out.clear();
                cell.render_into(&mut out, &cache);
                black_box(&out);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_merge, bench_render);
criterion_main!(benches);
