use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use qalam_core::layout::{self, create_rtl_text_layout, create_text_format, create_text_layout, FontStyle, FontWeight};

fn with_factory<T>(f: impl FnOnce() -> T) -> T {
    layout::init().unwrap();
    let result = f();
    layout::shutdown();
    result
}

fn layout_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_creation");

    static TEXT: &str = "The quick brown fox jumps over the lazy dog.\n";

    group.bench_function("create_text_layout_ltr", |b| {
        with_factory(|| {
            let format = create_text_format("Segoe UI", 14.0, FontWeight::Regular, FontStyle::Normal).unwrap();
            b.iter(|| {
                black_box(create_text_layout(black_box(TEXT), Some(&format), 800.0, 600.0).unwrap());
            });
        });
    });

    static ARABIC_TEXT: &str = "مرحبا بالعالم، هذا نص تجريبي لقياس سرعة التخطيط.\n";

    group.bench_function("create_rtl_text_layout", |b| {
        with_factory(|| {
            let format = create_text_format("Segoe UI", 14.0, FontWeight::Regular, FontStyle::Normal).unwrap();
            b.iter(|| {
                black_box(create_rtl_text_layout(black_box(ARABIC_TEXT), Some(&format), 800.0, 600.0).unwrap());
            });
        });
    });

    group.finish();
}

fn layout_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_hit_testing");

    static TEXT: &str = "The quick brown fox jumps over the lazy dog and keeps running.\n";

    group.bench_function("hit_test_point_sweep", |b| {
        with_factory(|| {
            let format = create_text_format("Segoe UI", 14.0, FontWeight::Regular, FontStyle::Normal).unwrap();
            let layout = create_text_layout(TEXT, Some(&format), 800.0, 600.0).unwrap();
            b.iter(|| {
                for x in (0..800).step_by(40) {
                    black_box(layout.hit_test_point(black_box(x as f32), 5.0).unwrap());
                }
            });
        });
    });

    group.bench_function("hit_test_position_sweep", |b| {
        with_factory(|| {
            let format = create_text_format("Segoe UI", 14.0, FontWeight::Regular, FontStyle::Normal).unwrap();
            let layout = create_text_layout(TEXT, Some(&format), 800.0, 600.0).unwrap();
            let total = layout.total_units();
            b.iter(|| {
                for pos in 0..total {
                    black_box(layout.hit_test_position(black_box(pos), false).unwrap());
                }
            });
        });
    });

    group.finish();
}

criterion_group!(benches, layout_creation, layout_hit_testing);
criterion_main!(benches);
