/// Tests for face-culled mesh extraction.
use glam::Vec3;
use voxel_viewer::meshing::{build_mesh, FaceDir};
use voxel_viewer::voxel::block_type::{COLOR_DIRT, COLOR_GRASS_TOP, COLOR_STONE};
use voxel_viewer::voxel::{BlockType, Chunk, SolidityQuery, CHUNK_SIZE};
use voxel_viewer::World;

fn single_chunk_world(chunk: Chunk) -> World {
    World::from_chunks(1, vec![chunk]).unwrap()
}

#[test]
fn test_isolated_block_has_six_faces() {
    let mut chunk = Chunk::empty(0, 0);
    chunk.set_block(4, 4, 4, BlockType::Stone);
    let world = single_chunk_world(chunk);

    let mesh = world.chunks()[0].mesh();
    assert_eq!(mesh.len(), 6);
    for dir in FaceDir::ALL {
        let face = mesh.iter().find(|f| f.dir() == dir).unwrap();
        assert_eq!(face.color(), COLOR_STONE);
        assert_eq!(face.block_center(), Vec3::new(4.0, 4.0, 4.0));
    }
}

#[test]
fn test_grass_column_faces() {
    // Grass blocks stacked at y = 0..=5 in one column
    let mut chunk = Chunk::empty(0, 0);
    for y in 0..=5 {
        chunk.set_block(7, y, 7, BlockType::Grass);
    }
    let world = single_chunk_world(chunk);
    let mesh = world.chunks()[0].mesh();

    assert_eq!(mesh.len(), 26);

    let tops: Vec<_> = mesh.iter().filter(|f| f.dir() == FaceDir::PosY).collect();
    assert_eq!(tops.len(), 1);
    assert_eq!(tops[0].block_center().y, 5.0);
    assert_eq!(tops[0].color(), COLOR_GRASS_TOP);

    let bottoms: Vec<_> = mesh.iter().filter(|f| f.dir() == FaceDir::NegY).collect();
    assert_eq!(bottoms.len(), 1, "nothing is solid below y = 0");
    assert_eq!(bottoms[0].block_center().y, 0.0);

    let sides = mesh
        .iter()
        .filter(|f| !matches!(f.dir(), FaceDir::PosY | FaceDir::NegY))
        .collect::<Vec<_>>();
    assert_eq!(sides.len(), 24);
    assert!(sides.iter().all(|f| f.color() == COLOR_DIRT));
}

#[test]
fn test_solid_slab_only_exposes_shell() {
    let mut chunk = Chunk::empty(0, 0);
    for x in 0..CHUNK_SIZE {
        for z in 0..CHUNK_SIZE {
            chunk.set_block(x, 0, z, BlockType::Dirt);
        }
    }
    let world = single_chunk_world(chunk);
    let n = CHUNK_SIZE;
    // top + bottom + 4 border walls
    assert_eq!(world.face_count(), 2 * n * n + 4 * n);
}

#[test]
fn test_faces_match_solidity_query() {
    // Stub world: a checkerboard of solid cells
    let query = |x: i32, y: i32, z: i32| (x + y + z).rem_euclid(2) == 0;

    let mut chunk = Chunk::empty(0, 0);
    chunk.set_block(2, 3, 4, BlockType::Dirt);
    chunk.set_block(5, 5, 5, BlockType::Stone);
    let mesh = build_mesh(&chunk, &query);

    for face in &mesh {
        let center = face.block_center().as_ivec3();
        let n = center + face.dir().offset();
        assert!(!query.is_solid_block(n.x, n.y, n.z), "face {:?} has a solid neighbour", face.dir());
    }

    // Every direction not emitted must be solid in the stub
    for (x, y, z) in [(2, 3, 4), (5, 5, 5)] {
        let emitted = mesh
            .iter()
            .filter(|f| f.block_center() == Vec3::new(x as f32, y as f32, z as f32))
            .count();
        let open = FaceDir::ALL
            .iter()
            .filter(|d| {
                let o = d.offset();
                !query(x + o.x, y + o.y, z + o.z)
            })
            .count();
        assert_eq!(emitted, open);
    }
}

#[test]
fn test_chunk_border_culled_against_neighbour() {
    let mut left = Chunk::empty(0, 0);
    let mut right = Chunk::empty(1, 0);
    left.set_block(CHUNK_SIZE - 1, 2, 3, BlockType::Stone);
    right.set_block(0, 2, 3, BlockType::Stone);

    let world = World::from_chunks(2, vec![left, right, Chunk::empty(0, 1), Chunk::empty(1, 1)])
        .unwrap();

    let left_mesh = world.chunk(0, 0).unwrap().mesh();
    let right_mesh = world.chunk(1, 0).unwrap().mesh();
    assert_eq!(left_mesh.len(), 5);
    assert_eq!(right_mesh.len(), 5);
    assert!(left_mesh.iter().all(|f| f.dir() != FaceDir::PosX));
    assert!(right_mesh.iter().all(|f| f.dir() != FaceDir::NegX));
}

#[test]
fn test_world_edge_faces_are_emitted() {
    let mut chunk = Chunk::empty(0, 0);
    chunk.set_block(0, 0, 0, BlockType::Stone);
    let world = single_chunk_world(chunk);
    // Outside the world counts as air, so the corner block keeps all faces
    assert_eq!(world.face_count(), 6);
}

#[test]
fn test_mesh_is_replaced_not_patched() {
    let empty = |_: i32, _: i32, _: i32| false;

    let mut chunk = Chunk::empty(0, 0);
    chunk.set_block(1, 1, 1, BlockType::Stone);
    assert!(chunk.mesh().is_empty(), "no mesh before the first rebuild");

    chunk.rebuild_mesh(&empty);
    assert_eq!(chunk.mesh().len(), 6);

    chunk.set_block(1, 1, 1, BlockType::Air);
    assert_eq!(chunk.mesh().len(), 6, "stale mesh until rebuild");

    chunk.rebuild_mesh(&empty);
    assert!(chunk.mesh().is_empty());
}

#[test]
fn test_rebuild_is_idempotent() {
    let mut world = World::new(voxel_viewer::WorldConfig {
        size_in_chunks: 2,
        ..Default::default()
    });
    let before: Vec<_> = world.chunks().iter().map(|c| c.mesh().to_vec()).collect();
    world.rebuild_meshes();
    let after: Vec<_> = world.chunks().iter().map(|c| c.mesh().to_vec()).collect();
    assert_eq!(before, after);
}
