/// Benchmark suite for face-culled meshing
/// Tests extraction cost across chunk fill patterns
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxel_viewer::meshing::build_mesh;
use voxel_viewer::voxel::{BlockType, Chunk, TerrainGenerator, CHUNK_HEIGHT, CHUNK_SIZE};
use voxel_viewer::World;

fn bench_mesh_empty(c: &mut Criterion) {
    c.bench_function("mesh_empty_chunk", |b| {
        let chunk = Chunk::empty(0, 0);
        let air = |_: i32, _: i32, _: i32| false;
        b.iter(|| build_mesh(black_box(&chunk), &air));
    });
}

fn bench_mesh_terrain(c: &mut Criterion) {
    c.bench_function("mesh_terrain_chunk", |b| {
        let world = World::from_chunks(
            1,
            vec![Chunk::generate(0, 0, &TerrainGenerator::default())],
        )
        .unwrap();
        let chunk = &world.chunks()[0];
        b.iter(|| build_mesh(black_box(chunk), &world));
    });
}

fn bench_mesh_checkerboard(c: &mut Criterion) {
    c.bench_function("mesh_checkerboard_chunk", |b| {
        // Worst case: every active block exposes all six faces
        let mut chunk = Chunk::empty(0, 0);
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_HEIGHT {
                for z in 0..CHUNK_SIZE {
                    if (x + y + z) % 2 == 0 {
                        chunk.set_block(x, y, z, BlockType::Stone);
                    }
                }
            }
        }
        let world = World::from_chunks(1, vec![chunk]).unwrap();
        let chunk = &world.chunks()[0];
        b.iter(|| build_mesh(black_box(chunk), &world));
    });
}

criterion_group!(
    benches,
    bench_mesh_empty,
    bench_mesh_terrain,
    bench_mesh_checkerboard
);
criterion_main!(benches);
