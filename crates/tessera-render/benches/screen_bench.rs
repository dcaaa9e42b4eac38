//! Benchmarks for drawing into and rendering a full screen.
//!
//! Run with: cargo bench -p tessera-render --bench screen_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_core::geometry::Rect;
use tessera_render::{BorderChars, Color, Screen, Style};

const SIZES: [(u16, u16); 3] = [(80, 24), (120, 40), (200, 60)];

fn populated(w: u16, h: u16) -> Screen {
    let mut screen = Screen::new(w, h);
    let style = Style::new().fg(Color::CYAN);
    for y in 0..h {
        let text = if y % 3 == 0 { "hello 世界 🚀 " } else { "the quick brown fox " };
        let mut x = 0;
        while x < w {
            x = screen.draw_string(x, y, text, style);
        }
    }
    screen.draw_box(Rect::new(0, 0, w, h), BorderChars::ROUNDED, Style::new().bold());
    screen
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen/draw");
    for (w, h) in SIZES {
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        group.bench_with_input(BenchmarkId::new("populate", format!("{w}x{h}")), &(), |b, _| {
            b.iter(|| black_box(populated(w, h)))
        });
        let mut screen = Screen::new(w, h);
        group.bench_with_input(BenchmarkId::new("clear", format!("{w}x{h}")), &(), |b, _| {
            b.iter(|| {
                screen.clear();
                black_box(&screen);
            })
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen/render");
    for (w, h) in SIZES {
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
        let screen = populated(w, h);
        group.bench_with_input(BenchmarkId::new("render", format!("{w}x{h}")), &screen, |b, s| {
            b.iter(|| black_box(s.render()))
        });
        let mut dimmed = populated(w, h);
        dimmed.dim_area(0, 0, w, h);
        group.bench_with_input(BenchmarkId::new("render_dimmed", format!("{w}x{h}")), &dimmed, |b, s| {
            b.iter(|| black_box(s.render()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw, bench_render);
criterion_main!(benches);
