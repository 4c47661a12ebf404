use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scroll_showcase::showcase::{
    caption_opacities, default_keyframes, step_data, Align, Caption, Keyframe, Showcase,
    DEFAULT_CROSSFADE_GAP,
};

fn keyframes(count: usize) -> Vec<Keyframe> {
    (0..count)
        .map(|i| {
            Keyframe::new(
                Vec3::splat(i as f32 * 0.1),
                Vec3::new(0.0, i as f32, 0.0),
                Caption::text(format!("Step {i}"), "body"),
                Align::Left,
            )
        })
        .collect()
}

fn bench_step_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_data");

    for count in [3usize, 16, 256] {
        let frames = keyframes(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &frames, |b, frames| {
            let mut p = 0.0f32;
            b.iter(|| {
                p = (p + 0.0137) % 1.0;
                black_box(step_data(black_box(p), frames))
            });
        });
    }

    group.finish();
}

fn bench_caption_opacities(c: &mut Criterion) {
    c.bench_function("caption_opacities_3", |b| {
        let mut p = 0.0f32;
        b.iter(|| {
            p = (p + 0.0137) % 1.0;
            black_box(caption_opacities(black_box(p), 3, DEFAULT_CROSSFADE_GAP))
        });
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let showcase = Showcase::new(default_keyframes(), DEFAULT_CROSSFADE_GAP)
        .expect("default keyframes are valid");

    c.bench_function("showcase_frame", |b| {
        let mut p = 0.0f32;
        b.iter(|| {
            p = (p + 0.0137) % 1.0;
            black_box(showcase.frame(black_box(p)))
        });
    });
}

criterion_group!(benches, bench_step_data, bench_caption_opacities, bench_full_frame);
criterion_main!(benches);
