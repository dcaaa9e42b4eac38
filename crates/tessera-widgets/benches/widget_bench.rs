//! Widget draw benchmarks.
//!
//! Run with: cargo bench -p tessera-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_core::geometry::Rect;
use tessera_core::key::{Key, KeyCode};
use tessera_layout::{Component, ConstraintSet};
use tessera_render::Screen;
use tessera_style::Theme;
use tessera_text::wrap::WrapMode;
use tessera_widgets::{Container, Input, Row, Table, Text, TextArea, Viewer};

const SIZES: [(u16, u16); 3] = [(40, 10), (80, 24), (200, 60)];

fn lorem(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{i:04} the quick brown fox jumps over the lazy dog, 日本語 too"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_draw(c: &mut Criterion, name: &str, mut component: impl Component) {
    let mut group = c.benchmark_group(format!("widget/{name}"));
    let theme = Theme::default();
    for (w, h) in SIZES {
        let mut screen = Screen::new(w, h);
        let area = Rect::from_size(w, h);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &(), |b, _| {
            b.iter(|| {
                screen.clear();
                component.draw(&mut screen, area, &theme);
                black_box(&screen);
            })
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    bench_draw(c, "text/wrapped", Text::new(lorem(100)).wrap(WrapMode::WordChar));
    bench_draw(c, "container/text", Container::new(Text::new(lorem(20))).title("Notes"));
}

fn bench_table(c: &mut Criterion) {
    let table = Table::new(
        (0..1_000).map(|i| Row::new([format!("row {i}"), format!("{}", i * 7), "ok".to_string()])),
        [
            ConstraintSet::ratio(2.0),
            ConstraintSet::ratio(1.0),
            ConstraintSet::length(4),
        ],
    )
    .header(Row::new(["Name", "Value", "St"]));
    bench_draw(c, "table/1k", table);
}

fn bench_viewer(c: &mut Criterion) {
    bench_draw(c, "viewer/10k", Viewer::new(lorem(10_000)));
}

fn bench_editing(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget/edit");

    group.bench_function("input/type_100", |b| {
        b.iter(|| {
            let mut input = Input::new();
            for c in "hello world ".chars().cycle().take(100) {
                input.handle_key(&Key::char(c));
            }
            input.handle_key(&Key::ctrl('w'));
            black_box(input.value().len())
        })
    });

    group.bench_function("textarea/newlines_100", |b| {
        b.iter(|| {
            let mut area = TextArea::new();
            for i in 0..100 {
                area.insert_str("line ");
                area.insert_str(&i.to_string());
                area.handle_key(&Key::new(KeyCode::Enter));
            }
            black_box(area.line_count())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text, bench_table, bench_viewer, bench_editing);
criterion_main!(benches);
