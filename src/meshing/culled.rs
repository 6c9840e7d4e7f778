/// Face-culled mesh extraction: one quad per block face whose neighbour
/// cell is not solid. Neighbour lookups go through the world so faces on a
/// chunk border are culled against the adjacent chunk's blocks.
use super::face::{FaceDir, RenderFace};
use crate::count_call;
use crate::voxel::{Chunk, SolidityQuery, CHUNK_HEIGHT, CHUNK_SIZE};
use glam::IVec3;

/// Build the full mesh of `chunk`. Colors are resolved here, once.
pub fn build_mesh<W: SolidityQuery + ?Sized>(chunk: &Chunk, world: &W) -> Vec<RenderFace> {
    count_call!(crate::perf::FUNCTION_COUNTERS.mesh_chunk_calls);

    let offset = chunk.world_offset();
    let blocks = chunk.blocks();
    let mut faces = Vec::new();

    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_HEIGHT {
            for z in 0..CHUNK_SIZE {
                let block = blocks[crate::voxel::chunk::coords_to_index(x, y, z)];
                if !block.is_active() {
                    continue;
                }

                let world_pos = offset + IVec3::new(x as i32, y as i32, z as i32);
                let center = world_pos.as_vec3();

                for dir in FaceDir::ALL {
                    let n = world_pos + dir.offset();
                    if !world.is_solid_block(n.x, n.y, n.z) {
                        faces.push(RenderFace::new(dir, center, block.face_color(dir)));
                    }
                }
            }
        }
    }

    log::trace!(
        "meshed chunk ({}, {}): {} faces",
        chunk.chunk_x(),
        chunk.chunk_z(),
        faces.len()
    );
    faces
}
