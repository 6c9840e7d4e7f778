/// Fixed-size column of blocks plus the face mesh built from it.
/// Block data is synthesized at construction; the mesh stays empty until
/// `rebuild_mesh` runs against a fully populated world.
use super::terrain::TerrainGenerator;
use super::{BlockType, SolidityQuery};
use crate::meshing::{culled, RenderFace};
use glam::IVec3;

pub const CHUNK_SIZE: usize = 16;
pub const CHUNK_HEIGHT: usize = 32;
pub const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;
pub const CHUNK_HEIGHT_I32: i32 = CHUNK_HEIGHT as i32;
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_HEIGHT * CHUNK_SIZE;

pub struct Chunk {
    chunk_x: i32,
    chunk_z: i32,
    // Box keeps the 8K array off the stack
    blocks: Box<[BlockType; CHUNK_VOLUME]>,
    mesh: Vec<RenderFace>,
}

impl Chunk {
    /// Chunk filled with air (mesh empty)
    pub fn empty(chunk_x: i32, chunk_z: i32) -> Self {
        Self {
            chunk_x,
            chunk_z,
            blocks: Box::new([BlockType::Air; CHUNK_VOLUME]),
            mesh: Vec::new(),
        }
    }

    /// Synthesize terrain for the chunk at chunk coordinates (chunk_x, chunk_z).
    /// Depends only on the coordinates and the generator's seed.
    pub fn generate(chunk_x: i32, chunk_z: i32, terrain: &TerrainGenerator) -> Self {
        let mut chunk = Self::empty(chunk_x, chunk_z);
        let offset = chunk.world_offset();

        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let surface = terrain.surface_height(offset.x + x as i32, offset.z + z as i32);
                for y in 0..CHUNK_HEIGHT {
                    chunk.blocks[coords_to_index(x, y, z)] =
                        TerrainGenerator::block_at_height(surface, y as i32);
                }
            }
        }

        chunk
    }

    #[inline]
    pub fn chunk_x(&self) -> i32 {
        self.chunk_x
    }

    #[inline]
    pub fn chunk_z(&self) -> i32 {
        self.chunk_z
    }

    /// World-space block coordinate of local (0, 0, 0)
    #[inline]
    pub fn world_offset(&self) -> IVec3 {
        IVec3::new(self.chunk_x * CHUNK_SIZE_I32, 0, self.chunk_z * CHUNK_SIZE_I32)
    }

    /// Block at local coordinates, None outside the chunk
    #[inline]
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<BlockType> {
        if !(0..CHUNK_SIZE_I32).contains(&x)
            || !(0..CHUNK_HEIGHT_I32).contains(&y)
            || !(0..CHUNK_SIZE_I32).contains(&z)
        {
            return None;
        }
        Some(self.blocks[coords_to_index(x as usize, y as usize, z as usize)])
    }

    /// Overwrite a block. The mesh is left untouched until the next rebuild.
    #[inline]
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, block: BlockType) {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_HEIGHT && z < CHUNK_SIZE);
        self.blocks[coords_to_index(x, y, z)] = block;
    }

    #[inline]
    pub fn blocks(&self) -> &[BlockType; CHUNK_VOLUME] {
        &self.blocks
    }

    #[inline]
    pub fn active_block_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_active()).count()
    }

    #[inline]
    pub fn mesh(&self) -> &[RenderFace] {
        &self.mesh
    }

    /// Replace the mesh with a fresh extraction against `world`.
    pub fn rebuild_mesh<W: SolidityQuery + ?Sized>(&mut self, world: &W) {
        let mesh = culled::build_mesh(self, world);
        self.mesh = mesh;
    }

    #[inline]
    pub(crate) fn replace_mesh(&mut self, mesh: Vec<RenderFace>) {
        self.mesh = mesh;
    }
}

/// Convert local coordinates to linear index (x fastest, then y, then z)
#[inline]
pub const fn coords_to_index(x: usize, y: usize, z: usize) -> usize {
    (z * CHUNK_HEIGHT + y) * CHUNK_SIZE + x
}

/// Convert linear index to local coordinates
#[inline]
pub const fn index_to_coords(index: usize) -> (usize, usize, usize) {
    let x = index % CHUNK_SIZE;
    let rest = index / CHUNK_SIZE;
    let y = rest % CHUNK_HEIGHT;
    let z = rest / CHUNK_HEIGHT;
    (x, y, z)
}
