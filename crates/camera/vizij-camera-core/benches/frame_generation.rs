//! Frame sequencing benchmarks.
//!
//! ```bash
//! cargo bench --package vizij-camera-core --bench frame_generation
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vizij_camera_core::{
    auto_keyframes, generate_frames, preview, Importance, Keypoint, SceneObject,
};

fn spiral_keypoints(count: usize, duration: f32) -> Vec<Keypoint> {
    (0..count)
        .map(|i| {
            let progress = i as f32 / (count - 1) as f32;
            let angle = progress * std::f32::consts::TAU;
            Keypoint::new(
                progress * duration,
                [angle.cos() * 10.0, 2.0 + progress * 4.0, angle.sin() * 10.0],
                [0.0, 0.0, 0.0],
            )
        })
        .collect()
}

fn bench_generate_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_frames");
    let duration = 60.0;
    let fps = 30;

    for count in [2usize, 10, 40] {
        let keypoints = spiral_keypoints(count, duration);
        group.throughput(Throughput::Elements((duration as u64) * fps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &keypoints, |b, kps| {
            b.iter(|| generate_frames(black_box(kps), duration, fps, 75.0));
        });
    }
    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let keypoints = spiral_keypoints(20, 60.0);
    c.bench_function("preview_resolution_30", |b| {
        b.iter(|| preview(black_box(&keypoints), 30));
    });
}

fn bench_auto_keyframes(c: &mut Criterion) {
    let objects: Vec<SceneObject> = (0..200)
        .map(|i| {
            let obj = SceneObject::new(format!("obj{i}"), [i as f32, 0.0, (i % 7) as f32]);
            if i % 50 == 0 {
                obj.with_importance(Importance::High)
            } else {
                obj
            }
        })
        .collect();
    let focus = Default::default();
    c.bench_function("auto_keyframes_200_objects", |b| {
        b.iter(|| auto_keyframes(black_box(&objects), 60.0, &focus));
    });
}

criterion_group!(benches, bench_generate_frames, bench_preview, bench_auto_keyframes);
criterion_main!(benches);
