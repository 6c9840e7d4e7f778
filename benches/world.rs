/// Benchmark suite for world construction and collision queries
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use voxel_viewer::{Camera, World, WorldConfig};

fn bench_world_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_construction");
    group.sample_size(10);

    for &size in &[2usize, 4, 8] {
        for parallel in [false, true] {
            let id = format!("{size}x{size}{}", if parallel { "_par" } else { "" });
            group.bench_with_input(BenchmarkId::from_parameter(id), &size, |b, &size| {
                b.iter(|| {
                    let world = World::new(WorldConfig {
                        size_in_chunks: size,
                        parallel_meshing: parallel,
                        ..WorldConfig::default()
                    });
                    black_box(world.face_count())
                });
            });
        }
    }
    group.finish();
}

fn bench_is_solid(c: &mut Criterion) {
    c.bench_function("world_is_solid", |b| {
        let world = World::new(WorldConfig::default());
        b.iter(|| {
            let mut solid = 0;
            for i in 0..1024 {
                let t = i as f32 * 0.125;
                if world.is_solid(black_box(t), black_box(t * 0.03), black_box(128.0 - t)) {
                    solid += 1;
                }
            }
            solid
        });
    });
}

fn bench_collision_move(c: &mut Criterion) {
    c.bench_function("camera_move_with_collision", |b| {
        let world = World::new(WorldConfig::default());
        b.iter(|| {
            let mut camera = Camera::new(Vec3::new(64.0, 24.0, 64.0));
            for _ in 0..64 {
                camera.move_with_collision(0.15, -0.15, 0.1, &world);
            }
            black_box(camera.position())
        });
    });
}

criterion_group!(
    benches,
    bench_world_construction,
    bench_is_solid,
    bench_collision_move
);
criterion_main!(benches);
