use criterion::{black_box, criterion_group, criterion_main, Criterion};
use huemix::palette::{adjust, Adjustment, Palette};
use huemix::{analysis, contrast, Hex};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("convert", |b| {
        b.iter(|| black_box(Hex::new(76, 174, 79)).to_hsl().to_rgb())
    });

    group.bench_function("generate-keyword", |b| {
        b.iter(|| Palette::from_input(black_box("Jungle")))
    });

    group.bench_function("generate-hex", |b| {
        b.iter(|| Palette::from_input(black_box("#4CAE4F")))
    });

    let palette = Palette::from_input("Jungle");
    let warmer = Adjustment::new().with_warmth(25.0).with_brightness(10.0);
    group.bench_function("adjust", |b| {
        b.iter(|| adjust(black_box(palette.swatches()), &warmer))
    });

    group.bench_function("analyze", |b| {
        b.iter(|| analysis::analyze(black_box(palette.swatches())))
    });

    group.bench_function("contrast", |b| {
        b.iter(|| contrast::contrast_ratio(black_box(Hex::new(30, 41, 59)), Hex::new(255, 255, 255)))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
