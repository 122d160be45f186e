use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prompter_colors::termco::{AnsiColor, XtermColor};
use prompter_colors::{ColorKind, Gradient, HsvColor, RgbColor, Translator};

pub fn run_benchmarks(c: &mut Criterion) {
    let colors: Vec<_> = (0..=255_u8)
        .step_by(15)
        .flat_map(|r| (0..=255_u8).step_by(51).map(move |g| RgbColor::new(r, g, 255 - r)))
        .collect();

    let mut group = c.benchmark_group("quantize");
    group.bench_function("ansi", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(AnsiColor::from_rgb(color));
            }
        })
    });
    group.bench_function("xterm", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(XtermColor::from_rgb(color));
            }
        })
    });
    group.bench_function("xterm-translator", |b| {
        let mut translator = Translator::new();
        b.iter(|| {
            for color in &colors {
                black_box(translator.translate(*color, ColorKind::Xterm));
            }
        })
    });
    group.finish();

    let mut group = c.benchmark_group("gradient");
    group.bench_function("rgb", |b| {
        b.iter(|| {
            Gradient::new(RgbColor::new(0, 0, 0), RgbColor::new(255, 128, 64))
                .iter()
                .count()
        })
    });
    group.bench_function("xterm", |b| {
        b.iter(|| Gradient::new(XtermColor::new(16), XtermColor::new(231)).iter().count())
    });
    group.bench_function("hue-shift", |b| {
        let start = HsvColor::new(0, 80, 90).expect("valid HSV color");
        b.iter(|| Gradient::new(start, 360).iter().count())
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
