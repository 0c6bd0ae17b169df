// File: crates/scatter-core/benches/scene_bench.rs
// Summary: Benchmarks for axis switching (with frame stepping), resize, and SVG serialization.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use scatter_core::{Attribute, AxisId, ChartRenderer, Dataset, Record, Theme};

fn gen_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| {
            let f = i as f64;
            Record {
                state: format!("State {i}"),
                abbr: format!("S{i}"),
                poverty: 10.0 + (f * 0.37).sin().abs() * 12.0,
                age: 30.0 + (f * 0.11).cos().abs() * 12.0,
                income: 38_000.0 + (f * 0.07).sin().abs() * 40_000.0,
                obesity: 20.0 + (f * 0.19).cos().abs() * 16.0,
                smokes: 9.0 + (f * 0.23).sin().abs() * 18.0,
                healthcare: 4.0 + (f * 0.29).cos().abs() * 20.0,
            }
        })
        .collect();
    Dataset::new(records)
}

fn bench_select_axis(c: &mut Criterion) {
    let ds = gen_dataset(51);
    c.bench_function("select_axis_and_animate_51", |b| {
        b.iter_batched(
            || ChartRenderer::initialize(ds.clone(), 960.0),
            |mut r| {
                r.select_axis(AxisId::X, Attribute::Income).ok();
                let mut t = 0.0;
                while r.is_animating() {
                    t += 16.0;
                    r.advance_to(t);
                }
                black_box(r.scene().marks.len())
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_resize(c: &mut Criterion) {
    let mut r = ChartRenderer::initialize(gen_dataset(51), 960.0);
    let mut w = 400.0;
    c.bench_function("resize_51", |b| {
        b.iter(|| {
            w = if w > 1200.0 { 400.0 } else { w + 13.0 };
            r.resize(black_box(w));
        })
    });
}

fn bench_svg(c: &mut Criterion) {
    let r = ChartRenderer::initialize(gen_dataset(51), 960.0);
    let theme = Theme::light();
    c.bench_function("to_svg_51", |b| b.iter(|| black_box(r.to_svg(&theme))));
}

criterion_group!(benches, bench_select_axis, bench_resize, bench_svg);
criterion_main!(benches);
